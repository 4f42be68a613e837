//! Schema declarations for every decodable HL7 type.
//!
//! Each declaration lists the attributes and qualified child names a type
//! reads. Children not listed are skipped during decoding.

mod datatypes;
mod document;
mod entities;
mod timing;
