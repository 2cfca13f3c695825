//! Tolerant HTML parsing into a minimal DOM tree.
//!
//! The checker only needs start tags and their attributes in document
//! order, so the tree keeps just elements and text. Parsing goes through
//! html5ever's full tree builder rather than the raw tokenizer: that way
//! malformed markup is repaired the same way a browser would repair it,
//! and the scan sees the tags a browser would see.

use crate::error::Error;
use crate::error::ParseError;
use crate::error::Result;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::Handle;
use markup5ever_rcdom::NodeData;
use markup5ever_rcdom::RcDom;
use std::io;

/// A node in the simplified document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomNode {
  pub node_type: DomNodeType,
  pub children: Vec<DomNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomNodeType {
  Document,
  Element {
    /// Lowercased by html5ever for HTML elements.
    tag_name: String,
    /// Attribute (name, value) pairs in source order; names lowercased.
    attributes: Vec<(String, String)>,
  },
  Text {
    content: String,
  },
}

impl DomNode {
  pub fn is_element(&self) -> bool {
    matches!(self.node_type, DomNodeType::Element { .. })
  }

  pub fn tag_name(&self) -> Option<&str> {
    match &self.node_type {
      DomNodeType::Element { tag_name, .. } => Some(tag_name),
      _ => None,
    }
  }

  /// First value of the named attribute, if present.
  pub fn attribute(&self, name: &str) -> Option<&str> {
    match &self.node_type {
      DomNodeType::Element { attributes, .. } => attributes
        .iter()
        .find(|(attr_name, _)| attr_name == name)
        .map(|(_, value)| value.as_str()),
      _ => None,
    }
  }
}

/// Parse HTML text into a [`DomNode`] tree rooted at the document node.
///
/// The parse is best-effort: html5ever recovers from unclosed tags,
/// stray end tags and similar damage, so this only fails if the input
/// cannot be fed to the parser at all.
pub fn parse_html(html: &str) -> Result<DomNode> {
  let opts = ParseOpts {
    tree_builder: TreeBuilderOpts {
      scripting_enabled: false,
      ..Default::default()
    },
    ..Default::default()
  };

  let mut reader = io::Cursor::new(html.as_bytes());
  let dom = parse_document(RcDom::default(), opts)
    .from_utf8()
    .read_from(&mut reader)
    .map_err(|e| {
      Error::Parse(ParseError::InvalidHtml {
        message: format!("Failed to parse HTML: {}", e),
      })
    })?;

  convert_handle(&dom.document).ok_or_else(|| {
    Error::Parse(ParseError::InvalidHtml {
      message: "document produced no root node".to_string(),
    })
  })
}

fn convert_handle(handle: &Handle) -> Option<DomNode> {
  let node_type = match &handle.data {
    NodeData::Document => DomNodeType::Document,
    NodeData::Element { name, attrs, .. } => DomNodeType::Element {
      tag_name: name.local.to_string(),
      attributes: attrs
        .borrow()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect(),
    },
    NodeData::Text { contents } => DomNodeType::Text {
      content: contents.borrow().to_string(),
    },
    // Comments, doctypes and processing instructions carry nothing the
    // structural scan looks at.
    _ => return None,
  };

  let children = handle
    .children
    .borrow()
    .iter()
    .filter_map(convert_handle)
    .collect();

  Some(DomNode {
    node_type,
    children,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn find_element<'a>(node: &'a DomNode, tag: &str) -> Option<&'a DomNode> {
    if node.tag_name() == Some(tag) {
      return Some(node);
    }
    node.children.iter().find_map(|child| find_element(child, tag))
  }

  #[test]
  fn parses_elements_with_attributes() {
    let root = parse_html(r#"<div id="main" class="panel">hi</div>"#).unwrap();
    let div = find_element(&root, "div").expect("div present");
    assert_eq!(div.attribute("id"), Some("main"));
    assert_eq!(div.attribute("class"), Some("panel"));
    assert_eq!(div.attribute("missing"), None);
  }

  #[test]
  fn lowercases_tag_and_attribute_names() {
    let root = parse_html(r#"<DIV ID="x"></DIV>"#).unwrap();
    let div = find_element(&root, "div").expect("div present");
    assert_eq!(div.attribute("id"), Some("x"));
  }

  #[test]
  fn recovers_from_unclosed_tags() {
    let root = parse_html("<ul><li>one<li>two").unwrap();
    assert!(find_element(&root, "ul").is_some());
    assert!(find_element(&root, "li").is_some());
  }

  #[test]
  fn empty_input_still_yields_a_document() {
    let root = parse_html("").unwrap();
    assert_eq!(root.node_type, DomNodeType::Document);
    // html5ever synthesizes html/head/body even for empty input.
    assert!(find_element(&root, "body").is_some());
  }
}
