//! Expectation manifest: which files, ids and substrings a site must have.
//!
//! The default manifest encodes the conveyor bypass training site. A JSON
//! file can override any subset of fields; unset fields keep the default
//! so a manifest only needs to name what differs.

use crate::error::ManifestError;
use crate::error::Result;
use serde::Deserialize;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteManifest {
  /// Markup file, relative to the site root.
  pub markup: String,
  /// Script file the markup must reference via a `<script src>`.
  pub script: String,
  /// Stylesheet whose filename must appear in the markup text.
  pub stylesheet: String,
  /// Video asset the markup must reference via a `<source src>`.
  pub video: String,
  /// Element ids the markup must contain (superset check).
  pub required_ids: Vec<String>,
  /// Ids that must belong to `<button>` elements specifically.
  pub required_buttons: Vec<String>,
  /// Literal substrings the script file must contain.
  pub script_substrings: Vec<String>,
  /// Literal substrings the stylesheet must contain.
  pub stylesheet_substrings: Vec<String>,
}

impl Default for SiteManifest {
  fn default() -> Self {
    Self {
      markup: "index.html".to_string(),
      script: "script.js".to_string(),
      stylesheet: "style.css".to_string(),
      video: "Logic_of_the_Silent_Conveyor.mp4".to_string(),
      required_ids: vec![
        "panel-container".to_string(),
        "startButton".to_string(),
        "newScenarioButton".to_string(),
        "feedback".to_string(),
        "trainingVideo".to_string(),
        "playbackRateSelector".to_string(),
      ],
      required_buttons: vec![
        "startButton".to_string(),
        "newScenarioButton".to_string(),
      ],
      script_substrings: vec![
        "const NUM_CHILDREN = 15".to_string(),
        "function initGame()".to_string(),
        "function startSimulation()".to_string(),
        "function provideFeedback(index)".to_string(),
      ],
      stylesheet_substrings: vec![
        ".panel".to_string(),
        ".panel-container".to_string(),
        ".feedback".to_string(),
      ],
    }
  }
}

impl SiteManifest {
  /// Load a manifest from a JSON file. Missing fields fall back to the
  /// training-site defaults.
  pub fn from_json_file(path: &Path) -> Result<Self> {
    let text = fs::read_to_string(path)?;
    let manifest = serde_json::from_str(&text).map_err(ManifestError::InvalidJson)?;
    Ok(manifest)
  }

  /// Every file the site root must contain, in report order.
  pub fn required_files(&self) -> [&str; 4] {
    [&self.markup, &self.script, &self.stylesheet, &self.video]
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  #[test]
  fn default_profile_names_the_training_site() {
    let manifest = SiteManifest::default();
    assert_eq!(manifest.markup, "index.html");
    assert_eq!(manifest.video, "Logic_of_the_Silent_Conveyor.mp4");
    assert_eq!(manifest.required_ids.len(), 6);
    assert!(manifest
      .script_substrings
      .contains(&"const NUM_CHILDREN = 15".to_string()));
  }

  #[test]
  fn partial_json_overrides_only_named_fields() {
    let manifest: SiteManifest =
      serde_json::from_str(r#"{ "video": "other.mp4" }"#).unwrap();
    assert_eq!(manifest.video, "other.mp4");
    assert_eq!(manifest.markup, "index.html");
    assert_eq!(manifest.required_ids, SiteManifest::default().required_ids);
  }

  #[test]
  fn json_round_trips() {
    let manifest = SiteManifest::default();
    let json = serde_json::to_string(&manifest).unwrap();
    let back: SiteManifest = serde_json::from_str(&json).unwrap();
    assert_eq!(manifest, back);
  }

  #[test]
  fn from_json_file_rejects_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    let err = SiteManifest::from_json_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Manifest error"));
  }
}
