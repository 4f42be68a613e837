//! CCD Decoder - Decode HL7 CDA/CCD clinical document headers.
//!
//! This crate turns a CDA R2 document (such as a C-CDA Continuity of Care
//! Document) into a typed, read-only object graph. Absent or vacuous
//! elements come back as `None`, and ambiguous timing elements are resolved
//! into the concrete timing variant their content implies.
//!
//! # Example
//!
//! ```
//! use ccd_decoder::{decode_str, DecodeOptions};
//!
//! let xml = r#"<ClinicalDocument xmlns="urn:hl7-org:v3">
//!     <title>Health Summary</title>
//! </ClinicalDocument>"#;
//!
//! let outcome = decode_str(xml, &DecodeOptions::default()).unwrap();
//! let title = outcome.document.unwrap().title.unwrap();
//! assert_eq!(title.text.as_deref(), Some("Health Summary"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Namespaces, size limit and the numeric policy
//! - [`error`]: Error types and Result alias
//! - [`gate`]: Top-level document checks
//! - [`xml`]: XML node helpers
//! - [`registry`]: Declarative element schemas, dispatch and the timing resolver
//! - [`types`]: The decoded object graph
//! - [`emptiness`]: Recursive emptiness used to prune vacuous values
//! - [`decoder`]: Public decode entry points
//! - [`summary`]: Display helpers and document summaries
//! - [`yaml`]: YAML output
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod decoder;
pub mod emptiness;
pub mod error;
pub mod gate;
pub mod registry;
pub mod summary;
pub mod types;
pub mod xml;
pub mod yaml;

pub use decoder::{decode_document, decode_file, decode_str, DecodeOutcome};

pub use config::{DecodeOptions, NumericPolicy};
pub use error::{DecodeError, DocumentStructureError, FieldDecodeError, Result};
pub use summary::DocumentSummary;
pub use types::ClinicalDocument;
