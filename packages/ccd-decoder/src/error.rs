//! Error types for the decoder.
//!
//! Uses the dual-error pattern: `DecodeError` for library consumers, with
//! `DocumentStructureError` and `FieldDecodeError` carrying the detail of
//! the two failure classes the decoder itself can raise.

use thiserror::Error;

/// Main error type for the decoder library.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The parsed tree is not a single `ClinicalDocument` in the HL7 V3 namespace.
    #[error("Invalid clinical document: {0}")]
    Structure(#[from] DocumentStructureError),

    /// A numeric attribute could not be parsed and the policy is strict.
    #[error("Field decode failed: {0}")]
    Field(#[from] FieldDecodeError),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Input exceeds the configured size limit.
    #[error("Document is {size} bytes, which exceeds the limit of {limit} bytes")]
    DocumentTooLarge { size: usize, limit: usize },

    /// Unknown numeric policy name.
    #[error("Invalid numeric policy: '{0}'. Expected 'lenient' or 'strict'")]
    InvalidNumericPolicy(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

/// Failure of one of the document gate checks.
///
/// Each variant corresponds to one check, in the order they are applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentStructureError {
    /// The tree has no nodes to decode.
    #[error("document does not have any XML elements to parse")]
    NoElements,

    /// More than one top-level node.
    #[error("document must have a single top level XML element, found {count}")]
    MultipleTopLevel { count: usize },

    /// Top-level element is not in the HL7 V3 namespace.
    #[error(
        "top level element must have namespace 'urn:hl7-org:v3', found '{}'",
        .found.as_deref().unwrap_or("")
    )]
    WrongNamespace { found: Option<String> },

    /// Top-level element is not `ClinicalDocument`.
    #[error("top level element must be 'ClinicalDocument', found '{found}'")]
    WrongRootElement { found: String },
}

/// A malformed numeric attribute on an otherwise well-formed element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("<{element}> attribute '{attribute}' has invalid value '{value}': {reason}")]
pub struct FieldDecodeError {
    /// Local name of the element carrying the attribute.
    pub element: String,
    /// Attribute name, prefixed with its namespace when qualified.
    pub attribute: String,
    /// The raw attribute value.
    pub value: String,
    /// Parser message.
    pub reason: String,
}

/// Result type alias for decoder operations.
pub type Result<T> = std::result::Result<T, DecodeError>;
