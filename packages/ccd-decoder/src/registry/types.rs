//! Types for the dispatch system.

use std::fmt;

use roxmltree::Node;

use crate::config::NumericPolicy;
use crate::error::{FieldDecodeError, Result};
use crate::xml::get_tag_name;

/// Attribute name, optionally qualified by a namespace URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttrName {
    pub namespace: Option<&'static str>,
    pub local: &'static str,
}

impl AttrName {
    /// An attribute with no namespace, such as `nullFlavor`.
    #[must_use]
    pub const fn plain(local: &'static str) -> Self {
        Self {
            namespace: None,
            local,
        }
    }

    /// An attribute in a namespace, such as `sdtc:valueSet`.
    #[must_use]
    pub const fn qualified(namespace: &'static str, local: &'static str) -> Self {
        Self {
            namespace: Some(namespace),
            local,
        }
    }

    /// Look this attribute up on an element.
    ///
    /// A plain name only matches an attribute without a namespace, so
    /// `code` never picks up `sdtc:code`.
    pub fn lookup<'a>(&self, node: Node<'a, '_>) -> Option<&'a str> {
        match self.namespace {
            Some(ns) => node.attribute((ns, self.local)),
            None => node
                .attributes()
                .find(|attr| attr.namespace().is_none() && attr.name() == self.local)
                .map(|attr| attr.value()),
        }
    }
}

impl fmt::Display for AttrName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namespace {
            Some(ns) => write!(f, "{{{ns}}}{}", self.local),
            None => f.write_str(self.local),
        }
    }
}

/// State carried through one decode run.
///
/// Holds the numeric policy and collects the field errors that the lenient
/// policy turns into warnings.
#[derive(Debug, Default)]
pub struct DecodeContext {
    policy: NumericPolicy,
    warnings: Vec<FieldDecodeError>,
}

impl DecodeContext {
    #[must_use]
    pub fn new(policy: NumericPolicy) -> Self {
        Self {
            policy,
            warnings: Vec::new(),
        }
    }

    #[must_use]
    pub fn policy(&self) -> NumericPolicy {
        self.policy
    }

    /// Report a malformed numeric attribute.
    ///
    /// # Errors
    /// Returns the field error when the policy is strict.
    pub fn report(&mut self, error: FieldDecodeError) -> Result<()> {
        match self.policy {
            NumericPolicy::Strict => Err(error.into()),
            NumericPolicy::Lenient => {
                tracing::warn!(
                    element = %error.element,
                    attribute = %error.attribute,
                    value = %error.value,
                    "Skipping malformed numeric attribute"
                );
                self.warnings.push(error);
                Ok(())
            }
        }
    }

    /// Field errors collected so far.
    #[must_use]
    pub fn warnings(&self) -> &[FieldDecodeError] {
        &self.warnings
    }

    /// Take ownership of the collected warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<FieldDecodeError> {
        self.warnings
    }
}

/// Build the field error for an attribute that failed to parse.
pub(crate) fn field_error(
    node: Node<'_, '_>,
    name: &AttrName,
    value: &str,
    reason: impl fmt::Display,
) -> FieldDecodeError {
    FieldDecodeError {
        element: get_tag_name(node).to_string(),
        attribute: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use roxmltree::Document;

    fn sample_error() -> FieldDecodeError {
        FieldDecodeError {
            element: "versionNumber".to_string(),
            attribute: "value".to_string(),
            value: "x".to_string(),
            reason: "invalid digit found in string".to_string(),
        }
    }

    #[test]
    fn test_attr_name_lookup() {
        let xml = r#"<code xmlns:sdtc="urn:hl7-org:sdtc" code="1" sdtc:valueSet="2.16"/>"#;
        let doc = Document::parse(xml).unwrap();
        let node = doc.root_element();

        assert_eq!(AttrName::plain("code").lookup(node), Some("1"));
        assert_eq!(
            AttrName::qualified("urn:hl7-org:sdtc", "valueSet").lookup(node),
            Some("2.16")
        );
        assert_eq!(AttrName::plain("valueSet").lookup(node), None);
    }

    #[test]
    fn test_plain_name_skips_qualified_attribute() {
        let xml = r#"<code xmlns:sdtc="urn:hl7-org:sdtc" sdtc:code="ext" code="core"/>"#;
        let doc = Document::parse(xml).unwrap();
        let node = doc.root_element();

        assert_eq!(AttrName::plain("code").lookup(node), Some("core"));
        assert_eq!(
            AttrName::qualified("urn:hl7-org:sdtc", "code").lookup(node),
            Some("ext")
        );
    }

    #[test]
    fn test_context_keeps_policy() {
        assert_eq!(DecodeContext::default().policy(), NumericPolicy::Lenient);
        assert_eq!(
            DecodeContext::new(NumericPolicy::Strict).policy(),
            NumericPolicy::Strict
        );
    }

    #[test]
    fn test_attr_name_display() {
        assert_eq!(AttrName::plain("use").to_string(), "use");
        assert_eq!(
            AttrName::qualified("urn:hl7-org:sdtc", "valueSet").to_string(),
            "{urn:hl7-org:sdtc}valueSet"
        );
    }

    #[test]
    fn test_lenient_context_collects_warnings() {
        let mut ctx = DecodeContext::new(NumericPolicy::Lenient);
        assert!(ctx.report(sample_error()).is_ok());
        assert_eq!(ctx.warnings().len(), 1);
        assert_eq!(ctx.into_warnings()[0].value, "x");
    }

    #[test]
    fn test_strict_context_fails() {
        let mut ctx = DecodeContext::new(NumericPolicy::Strict);
        let err = ctx.report(sample_error()).unwrap_err();
        assert!(matches!(err, DecodeError::Field(_)));
        assert!(ctx.warnings().is_empty());
    }
}
