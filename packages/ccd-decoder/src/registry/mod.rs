//! Schema-driven dispatch for HL7 V3 elements.
//!
//! Every decodable type implements [`ElementSchema`]: a static attribute
//! table, a dispatch table from qualified child names to fields, and an
//! optional text slot. The generic engine walks a node against that schema
//! and the blanket [`Decode`] impl exposes it per type. Timing elements whose
//! type depends on their content go through the resolver.

#[macro_use]
mod macros;

mod core;
mod engine;
mod handler;
mod handlers;
mod resolver;
mod types;

pub use core::DispatchTable;
pub use engine::{apply_attributes, decode_element};
pub use handler::{AttributeSpec, ChildSlot, Decode, ElementSchema, Slot};
pub use resolver::{
    resolve_member, resolve_timing, ResolutionScope, TimingKind, TimingSignature,
};
pub use types::{AttrName, DecodeContext};
