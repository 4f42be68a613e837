//! Structural checks applied to a parsed tree before any decoding.

use roxmltree::{Document, Node};

use crate::config::{HL7_NAMESPACE, ROOT_ELEMENT};
use crate::error::DocumentStructureError;
use crate::xml::{get_namespace, get_tag_name};

/// Validate a parsed document and return its `ClinicalDocument` element.
///
/// Comments and processing instructions (such as `xml-stylesheet`) at the
/// top level are not counted. A check that only skips comments would reject
/// a stylesheet-bearing document as having several top-level nodes; this
/// gate accepts it. Every document such a check accepts is accepted here too.
///
/// # Errors
/// Returns the first failed check, see [`validate_top_level`].
pub fn validate_document<'a, 'input>(
    doc: &'a Document<'input>,
) -> Result<Node<'a, 'input>, DocumentStructureError> {
    validate_top_level(
        doc.root()
            .children()
            .filter(|node| !node.is_comment() && !node.is_pi()),
    )
}

/// Apply the gate checks, in order, to the top-level nodes of a document.
///
/// 1. there is at least one node
/// 2. there is exactly one node
/// 3. it is in the HL7 V3 namespace
/// 4. its local name is `ClinicalDocument`
///
/// # Errors
/// Returns the `DocumentStructureError` variant for the first failed check.
pub fn validate_top_level<'a, 'input>(
    nodes: impl IntoIterator<Item = Node<'a, 'input>>,
) -> Result<Node<'a, 'input>, DocumentStructureError> {
    let nodes: Vec<_> = nodes.into_iter().collect();

    let Some(&top) = nodes.first() else {
        return Err(DocumentStructureError::NoElements);
    };

    if nodes.len() != 1 {
        return Err(DocumentStructureError::MultipleTopLevel { count: nodes.len() });
    }

    let namespace = get_namespace(top);
    if namespace != Some(HL7_NAMESPACE) {
        return Err(DocumentStructureError::WrongNamespace {
            found: namespace.map(str::to_string),
        });
    }

    let name = get_tag_name(top);
    if name != ROOT_ELEMENT {
        return Err(DocumentStructureError::WrongRootElement {
            found: name.to_string(),
        });
    }

    tracing::debug!("Document gate passed");
    Ok(top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_document() {
        let xml = r#"<?xml version="1.0"?>
<?xml-stylesheet type="text/xsl" href="CDA.xsl"?>
<!-- exported 2024-06-15 -->
<ClinicalDocument xmlns="urn:hl7-org:v3"><id root="1.2.3"/></ClinicalDocument>"#;
        let doc = Document::parse(xml).unwrap();
        let top = validate_document(&doc).unwrap();
        assert_eq!(get_tag_name(top), "ClinicalDocument");
    }

    #[test]
    fn test_processing_instructions_are_not_top_level_nodes() {
        let xml = r#"<?xml-stylesheet type="text/xsl" href="CDA.xsl"?><?render mode="print"?><ClinicalDocument xmlns="urn:hl7-org:v3"/>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(doc.root().children().count(), 3);
        assert!(validate_document(&doc).is_ok());
    }

    #[test]
    fn test_no_elements() {
        let err = validate_top_level(std::iter::empty()).unwrap_err();
        assert_eq!(err, DocumentStructureError::NoElements);
    }

    #[test]
    fn test_multiple_top_level() {
        let xml = r#"<wrapper><ClinicalDocument xmlns="urn:hl7-org:v3"/><ClinicalDocument xmlns="urn:hl7-org:v3"/></wrapper>"#;
        let doc = Document::parse(xml).unwrap();
        let err = validate_top_level(doc.root_element().children()).unwrap_err();
        assert_eq!(err, DocumentStructureError::MultipleTopLevel { count: 2 });
    }

    #[test]
    fn test_wrong_namespace() {
        let doc = Document::parse(r#"<ClinicalDocument xmlns="urn:example"/>"#).unwrap();
        let err = validate_document(&doc).unwrap_err();
        assert_eq!(
            err,
            DocumentStructureError::WrongNamespace {
                found: Some("urn:example".to_string())
            }
        );
    }

    #[test]
    fn test_missing_namespace() {
        let doc = Document::parse("<ClinicalDocument/>").unwrap();
        let err = validate_document(&doc).unwrap_err();
        assert_eq!(err, DocumentStructureError::WrongNamespace { found: None });
    }

    #[test]
    fn test_wrong_root_element() {
        let doc = Document::parse(r#"<Bundle xmlns="urn:hl7-org:v3"/>"#).unwrap();
        let err = validate_document(&doc).unwrap_err();
        assert_eq!(
            err,
            DocumentStructureError::WrongRootElement {
                found: "Bundle".to_string()
            }
        );
    }

    #[test]
    fn test_namespace_checked_before_name() {
        let doc = Document::parse(r#"<Bundle xmlns="urn:example"/>"#).unwrap();
        assert!(matches!(
            validate_document(&doc),
            Err(DocumentStructureError::WrongNamespace { .. })
        ));
    }
}
