//! Entry points that tie parsing, the gate and the schema decoders together.

use std::fs;
use std::path::Path;

use roxmltree::Document;

use crate::config::DecodeOptions;
use crate::error::{DecodeError, FieldDecodeError, Result};
use crate::gate::validate_document;
use crate::registry::{Decode, DecodeContext};
use crate::types::ClinicalDocument;

/// Result of decoding one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodeOutcome {
    /// The decoded header, or `None` if the document carries no usable data.
    pub document: Option<ClinicalDocument>,
    /// Malformed numeric attributes skipped under the lenient policy.
    pub warnings: Vec<FieldDecodeError>,
}

/// Decode a CDA document from an XML string.
///
/// # Errors
/// Fails if the input exceeds the size limit, is not well-formed XML, fails
/// the document gate, or carries a malformed number under the strict policy.
pub fn decode_str(xml: &str, options: &DecodeOptions) -> Result<DecodeOutcome> {
    check_size(xml.len(), options)?;
    let doc = Document::parse(xml)?;
    decode_document(&doc, options)
}

/// Decode a CDA document from a file.
///
/// # Errors
/// Same as [`decode_str`], plus IO errors.
pub fn decode_file(path: &Path, options: &DecodeOptions) -> Result<DecodeOutcome> {
    let size = usize::try_from(fs::metadata(path)?.len()).unwrap_or(usize::MAX);
    check_size(size, options)?;

    tracing::debug!(path = %path.display(), size, "Reading document");
    let xml = fs::read_to_string(path)?;
    decode_str(&xml, options)
}

/// Decode an already parsed tree.
///
/// # Errors
/// Fails if the tree does not pass the document gate, or carries a
/// malformed number under the strict policy.
pub fn decode_document(doc: &Document<'_>, options: &DecodeOptions) -> Result<DecodeOutcome> {
    let root = validate_document(doc)?;

    let mut ctx = DecodeContext::new(options.numeric_policy);
    tracing::debug!(policy = %ctx.policy(), "Decoding clinical document");
    let document = ClinicalDocument::decode(root, &mut ctx)?;
    let warnings = ctx.into_warnings();

    tracing::debug!(
        empty = document.is_none(),
        warnings = warnings.len(),
        "Decoded clinical document"
    );

    Ok(DecodeOutcome { document, warnings })
}

fn check_size(size: usize, options: &DecodeOptions) -> Result<()> {
    if size > options.max_document_size {
        return Err(DecodeError::DocumentTooLarge {
            size,
            limit: options.max_document_size,
        });
    }
    Ok(())
}
