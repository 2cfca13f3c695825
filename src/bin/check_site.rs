use clap::Parser;
use sitecheck::checks::run_site_checks;
use sitecheck::manifest::SiteManifest;
use std::error::Error;
use std::path::PathBuf;

/// Run structural checks against a static training-site directory.
#[derive(Parser, Debug)]
#[command(name = "check_site", version, about)]
struct Args {
  /// Site root containing the markup, script, stylesheet and video files
  #[arg(long, default_value = ".")]
  root: PathBuf,

  /// JSON manifest overriding the built-in expectations
  #[arg(long)]
  manifest: Option<PathBuf>,

  /// Print the full report as JSON instead of per-failure lines
  #[arg(long)]
  json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
  let args = Args::parse();

  let manifest = match &args.manifest {
    Some(path) => match SiteManifest::from_json_file(path) {
      Ok(manifest) => manifest,
      Err(err) => {
        // A bad manifest is an operator error, not a site failure; use a
        // distinct exit code so CI can tell the two apart.
        eprintln!("error: {err}");
        std::process::exit(2);
      }
    },
    None => SiteManifest::default(),
  };

  let report = run_site_checks(&args.root, &manifest);

  if args.json {
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    for failure in report.failures() {
      eprintln!(
        "FAIL {}: {}",
        failure.name,
        failure.detail.as_deref().unwrap_or("check failed")
      );
    }
    if report.is_pass() {
      println!("{} checks passed", report.outcomes.len());
    }
  }

  if !report.is_pass() {
    std::process::exit(1);
  }
  Ok(())
}
