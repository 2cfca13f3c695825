//! File, reference, id and substring checks over a site root.
//!
//! Every check is a synchronous read-and-compare producing a named
//! [`CheckOutcome`]. Checks are independent: a failure never aborts the
//! run, it is recorded and the remaining checks still execute so one
//! report lists everything wrong with the site.

use crate::manifest::SiteManifest;
use crate::scan::scan_document;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Result of one named check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
  pub name: String,
  pub passed: bool,
  /// Failure detail naming exactly what was expected and missing.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub detail: Option<String>,
}

/// Ordered outcomes of a full check run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
  pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
  fn pass(&mut self, name: impl Into<String>) {
    self.outcomes.push(CheckOutcome {
      name: name.into(),
      passed: true,
      detail: None,
    });
  }

  fn fail(&mut self, name: impl Into<String>, detail: impl Into<String>) {
    self.outcomes.push(CheckOutcome {
      name: name.into(),
      passed: false,
      detail: Some(detail.into()),
    });
  }

  fn check(&mut self, name: impl Into<String>, passed: bool, detail: impl Into<String>) {
    if passed {
      self.pass(name);
    } else {
      self.fail(name, detail);
    }
  }

  pub fn is_pass(&self) -> bool {
    self.outcomes.iter().all(|outcome| outcome.passed)
  }

  pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
    self.outcomes.iter().filter(|outcome| !outcome.passed)
  }

  /// Outcome by name; checks have stable names so callers can single one out.
  pub fn outcome(&self, name: &str) -> Option<&CheckOutcome> {
    self.outcomes.iter().find(|outcome| outcome.name == name)
  }
}

/// Files from `names` that do not exist under `root`.
pub fn missing_files<S: AsRef<str>>(root: &Path, names: &[S]) -> Vec<String> {
  names
    .iter()
    .map(|name| name.as_ref())
    .filter(|name| !root.join(name).exists())
    .map(|name| name.to_string())
    .collect()
}

/// Substrings from `expected` that do not occur in `text`.
pub fn missing_substrings<'a, S: AsRef<str>>(text: &str, expected: &'a [S]) -> Vec<&'a str> {
  expected
    .iter()
    .map(|needle| needle.as_ref())
    .filter(|needle| !text.contains(*needle))
    .collect()
}

const MARKUP_CHECKS: [&str; 5] = [
  "markup_references_script",
  "markup_references_stylesheet",
  "markup_references_video",
  "core_controls_present",
  "expected_buttons",
];

/// Run the full structural suite against `root` using `manifest`'s
/// expectations.
pub fn run_site_checks(root: &Path, manifest: &SiteManifest) -> CheckReport {
  let mut report = CheckReport::default();

  for name in manifest.required_files() {
    report.check(
      format!("required_file:{name}"),
      root.join(name).exists(),
      format!("{name} is missing"),
    );
  }

  check_markup(root, manifest, &mut report);

  check_text_file(
    root,
    &manifest.script,
    "script_configuration",
    &manifest.script_substrings,
    &mut report,
  );
  check_text_file(
    root,
    &manifest.stylesheet,
    "style_definitions",
    &manifest.stylesheet_substrings,
    &mut report,
  );

  report
}

fn check_markup(root: &Path, manifest: &SiteManifest, report: &mut CheckReport) {
  let markup_path = root.join(&manifest.markup);
  let markup = match fs::read_to_string(&markup_path) {
    Ok(text) => text,
    Err(err) => {
      // The markup-dependent checks share one cause; report it on each
      // so no check silently disappears from the report.
      for name in MARKUP_CHECKS {
        report.fail(name, format!("could not read {}: {err}", manifest.markup));
      }
      return;
    }
  };

  let scan = match scan_document(&markup) {
    Ok(scan) => scan,
    Err(err) => {
      for name in MARKUP_CHECKS {
        report.fail(name, format!("could not parse {}: {err}", manifest.markup));
      }
      return;
    }
  };

  report.check(
    "markup_references_script",
    scan.script_sources.iter().any(|src| src == &manifest.script),
    format!("{} should reference {}", manifest.markup, manifest.script),
  );
  report.check(
    "markup_references_stylesheet",
    markup.contains(&manifest.stylesheet),
    format!(
      "{} should include the stylesheet {}",
      manifest.markup, manifest.stylesheet
    ),
  );
  report.check(
    "markup_references_video",
    scan.media_sources.iter().any(|src| src == &manifest.video),
    format!("video source {} not referenced", manifest.video),
  );

  let missing = scan.missing_ids(manifest.required_ids.iter().map(String::as_str));
  report.check(
    "core_controls_present",
    missing.is_empty(),
    format!("missing expected element ids: {missing:?}"),
  );

  let missing_buttons: Vec<&str> = manifest
    .required_buttons
    .iter()
    .map(String::as_str)
    .filter(|id| !scan.button_ids.iter().any(|button| button == id))
    .collect();
  report.check(
    "expected_buttons",
    missing_buttons.is_empty(),
    format!("missing expected buttons: {missing_buttons:?}"),
  );
}

fn check_text_file(
  root: &Path,
  file: &str,
  check_name: &str,
  expected: &[String],
  report: &mut CheckReport,
) {
  let text = match fs::read_to_string(root.join(file)) {
    Ok(text) => text,
    Err(err) => {
      report.fail(check_name, format!("could not read {file}: {err}"));
      return;
    }
  };

  let missing = missing_substrings(&text, expected);
  if missing.is_empty() {
    report.pass(check_name);
  } else {
    // The first missing needle is usually the interesting one; the full
    // list still goes into the message for one-pass debugging.
    report.fail(
      check_name,
      format!("{file} is missing {:?} (all missing: {missing:?})", missing[0]),
    );
  }
}
