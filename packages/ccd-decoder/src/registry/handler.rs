//! Element schema trait definition.
//!
//! A schema describes one HL7 data type: which attributes it reads, which
//! child elements it dispatches and where its raw text goes. The generic
//! engine does the walking; schemas only wire names to fields.

use roxmltree::Node;

use super::core::DispatchTable;
use super::engine::decode_element;
use super::types::{AttrName, DecodeContext};
use crate::emptiness::IsEmpty;
use crate::error::Result;

/// Where a decoded attribute value is stored.
///
/// Each variant holds an accessor returning the target field.
pub enum Slot<T> {
    /// Stored verbatim.
    Text(fn(&mut T) -> &mut Option<String>),
    /// `true` only for the exact literal `true`.
    Flag(fn(&mut T) -> &mut Option<bool>),
    /// Parsed as a signed 64-bit integer.
    Integer(fn(&mut T) -> &mut Option<i64>),
    /// Parsed as a double.
    Decimal(fn(&mut T) -> &mut Option<f64>),
    /// Whitespace-separated tokens, in order.
    Tokens(fn(&mut T) -> &mut Vec<String>),
}

/// One attribute a schema reads.
pub struct AttributeSpec<T> {
    pub name: AttrName,
    pub slot: Slot<T>,
}

/// Function that decodes a child element into its owner's field.
pub type ChildSlot<T> = fn(&mut T, Node<'_, '_>, &mut DecodeContext) -> Result<()>;

/// Static description of how an element decodes.
///
/// Implementations are normally generated by `element_schema!`.
pub trait ElementSchema: Default + IsEmpty + Sized + 'static {
    /// Attributes read from the element itself.
    fn attributes() -> &'static [AttributeSpec<Self>];

    /// Child elements, keyed by namespace and local name.
    fn children() -> &'static DispatchTable<Self>;

    /// Field receiving non-whitespace text content, if the type keeps any.
    fn text_slot(&mut self) -> Option<&mut Option<String>> {
        None
    }
}

/// Decode an element into a value, or `None` if nothing was populated.
pub trait Decode: Sized {
    /// # Errors
    /// Fails only when a numeric attribute is malformed under the strict policy.
    fn decode(node: Node<'_, '_>, ctx: &mut DecodeContext) -> Result<Option<Self>>;
}

impl<T: ElementSchema> Decode for T {
    fn decode(node: Node<'_, '_>, ctx: &mut DecodeContext) -> Result<Option<Self>> {
        decode_element(node, ctx)
    }
}
