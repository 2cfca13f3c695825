//! Error types for sitecheck.
//!
//! All errors use the `thiserror` crate for minimal boilerplate and
//! proper error trait implementations. Check *failures* are not errors:
//! they are reported through `checks::CheckReport`. Errors here cover
//! the cases where the checker itself cannot proceed (unreadable
//! manifest, I/O problems).

use thiserror::Error;

/// Result type alias for sitecheck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for sitecheck.
#[derive(Error, Debug)]
pub enum Error {
  /// HTML parsing error
  #[error("Parse error: {0}")]
  Parse(#[from] ParseError),

  /// Manifest loading error
  #[error("Manifest error: {0}")]
  Manifest(#[from] ManifestError),

  /// IO error (file operations)
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
}

/// HTML parsing errors.
#[derive(Error, Debug)]
pub enum ParseError {
  /// The parser could not produce a document at all. html5ever is
  /// tolerant of malformed markup, so in practice this only happens on
  /// I/O failures while feeding the parser.
  #[error("Invalid HTML: {message}")]
  InvalidHtml { message: String },
}

/// Errors loading an expectation manifest from disk.
#[derive(Error, Debug)]
pub enum ManifestError {
  /// The manifest file exists but is not valid JSON for `SiteManifest`.
  #[error("Invalid manifest JSON: {0}")]
  InvalidJson(#[from] serde_json::Error),
}
