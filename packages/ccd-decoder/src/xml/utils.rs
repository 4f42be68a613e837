//! XML utility functions for navigating roxmltree nodes.

use roxmltree::Node;

/// How a direct child takes part in decoding its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind<'a> {
    /// Element with attributes or children, looked up in the owner's table.
    Data,
    /// Character content that can become the owner's raw-text payload.
    Text(&'a str),
    /// Whitespace, comments, processing instructions and bare empty elements.
    Ignored,
}

/// Get the tag name without namespace.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use ccd_decoder::xml::get_tag_name;
///
/// let xml = r#"<ClinicalDocument xmlns="urn:hl7-org:v3"><id/></ClinicalDocument>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "ClinicalDocument");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Get the namespace URI of an element, if it has one.
pub fn get_namespace<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.tag_name().namespace()
}

/// Check whether an element carries at least one attribute.
///
/// Namespace declarations are not attributes.
pub fn has_attributes(node: Node<'_, '_>) -> bool {
    node.attributes().next().is_some()
}

/// Classify a direct child for the dispatch walk.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use ccd_decoder::xml::{classify_child, ChildKind};
///
/// let xml = r#"<given>Alice</given>"#;
/// let doc = Document::parse(xml).unwrap();
/// let text = doc.root_element().first_child().unwrap();
/// assert_eq!(classify_child(text), ChildKind::Text("Alice"));
/// ```
pub fn classify_child<'a>(node: Node<'a, '_>) -> ChildKind<'a> {
    if node.is_element() {
        if has_attributes(node) || node.has_children() {
            ChildKind::Data
        } else {
            ChildKind::Ignored
        }
    } else if node.is_text() {
        match node.text() {
            Some(text) if !text.trim().is_empty() => ChildKind::Text(text),
            _ => ChildKind::Ignored,
        }
    } else {
        ChildKind::Ignored
    }
}

/// Split a multi-valued attribute into its tokens, preserving order.
///
/// # Examples
/// ```
/// use ccd_decoder::xml::split_tokens;
///
/// let tokens: Vec<_> = split_tokens(" H  WP ").collect();
/// assert_eq!(tokens, vec!["H", "WP"]);
/// ```
pub fn split_tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split_whitespace()
}

/// Get all element children of a node.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Render an element name as `{namespace}local` for log output.
pub fn describe(node: Node<'_, '_>) -> String {
    match get_namespace(node) {
        Some(ns) => format!("{{{ns}}}{}", get_tag_name(node)),
        None => get_tag_name(node).to_string(),
    }
}
