pub mod checks;
pub mod dom;
pub mod error;
pub mod manifest;
pub mod scan;

pub use checks::{missing_files, missing_substrings, run_site_checks, CheckOutcome, CheckReport};
pub use error::{Error, Result};
pub use manifest::SiteManifest;
pub use scan::{scan_document, DocumentScan};
