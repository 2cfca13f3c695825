//! Single-pass structural scan of a markup document.
//!
//! One pre-order walk over the parsed tree produces every container the
//! checks consume. The containers are read-only after the walk; running
//! the scan twice on the same text yields equal results.

use crate::dom::parse_html;
use crate::dom::DomNode;
use crate::dom::DomNodeType;
use crate::error::Result;
use std::collections::HashSet;

/// Structural facts collected from one markup document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocumentScan {
  /// Every `id` attribute value in the document. Duplicates collapse.
  pub ids: HashSet<String>,
  /// `src` values of `<script>` tags, in document order.
  pub script_sources: Vec<String>,
  /// `src` values of `<source>` tags, in document order.
  pub media_sources: Vec<String>,
  /// `id` of each `<button>`, in document order; empty string when the
  /// button has no id.
  pub button_ids: Vec<String>,
}

impl DocumentScan {
  /// Required ids absent from the document, sorted for stable reporting.
  pub fn missing_ids<'a, I>(&self, required: I) -> Vec<String>
  where
    I: IntoIterator<Item = &'a str>,
  {
    let mut missing: Vec<String> = required
      .into_iter()
      .filter(|id| !self.ids.contains(*id))
      .map(|id| id.to_string())
      .collect();
    missing.sort_unstable();
    missing
  }
}

/// Parse `html` and collect ids, script sources, media sources and
/// button ids in a single pass.
pub fn scan_document(html: &str) -> Result<DocumentScan> {
  let root = parse_html(html)?;
  let mut scan = DocumentScan::default();
  collect(&root, &mut scan);
  Ok(scan)
}

fn collect(node: &DomNode, scan: &mut DocumentScan) {
  if let DomNodeType::Element {
    tag_name,
    attributes,
  } = &node.node_type
  {
    let id = attributes
      .iter()
      .find(|(name, _)| name == "id")
      .map(|(_, value)| value.as_str());
    if let Some(id) = id {
      scan.ids.insert(id.to_string());
    }

    let src = attributes
      .iter()
      .find(|(name, _)| name == "src")
      .map(|(_, value)| value.as_str());

    match tag_name.as_str() {
      "script" => {
        if let Some(src) = src {
          scan.script_sources.push(src.to_string());
        }
      }
      "source" => {
        if let Some(src) = src {
          scan.media_sources.push(src.to_string());
        }
      }
      "button" => scan.button_ids.push(id.unwrap_or("").to_string()),
      _ => {}
    }
  }

  for child in &node.children {
    collect(child, scan);
  }
}
