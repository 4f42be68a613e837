//! Generic decode engine driven by element schemas.

use roxmltree::Node;

use super::handler::{AttributeSpec, ElementSchema, Slot};
use super::types::{field_error, DecodeContext};
use crate::emptiness::IsEmpty;
use crate::error::Result;
use crate::xml::{classify_child, describe, get_tag_name, split_tokens, ChildKind};

/// Decode one element according to its schema.
///
/// Attributes are applied first, then direct children are visited in
/// document order. Data children go through the schema's dispatch table,
/// unknown ones are skipped. Non-whitespace text lands in the text slot,
/// where the last run wins. A value with nothing populated becomes `None`.
///
/// # Errors
/// Propagates field errors raised under the strict numeric policy.
pub fn decode_element<T: ElementSchema>(
    node: Node<'_, '_>,
    ctx: &mut DecodeContext,
) -> Result<Option<T>> {
    let mut value = T::default();
    apply_attributes(node, &mut value, T::attributes(), ctx)?;

    let table = T::children();
    for child in node.children() {
        match classify_child(child) {
            ChildKind::Data => match table.get(child) {
                Some(slot) => slot(&mut value, child, ctx)?,
                None => tracing::trace!(
                    element = %describe(child),
                    parent = get_tag_name(node),
                    "No dispatch entry, skipping"
                ),
            },
            ChildKind::Text(text) => {
                if let Some(payload) = value.text_slot() {
                    *payload = Some(text.to_string());
                }
            }
            ChildKind::Ignored => {}
        }
    }

    Ok((!IsEmpty::is_empty(&value)).then_some(value))
}

/// Copy the attributes named in `specs` from `node` into `target`.
///
/// # Errors
/// Propagates field errors raised under the strict numeric policy.
pub fn apply_attributes<T>(
    node: Node<'_, '_>,
    target: &mut T,
    specs: &[AttributeSpec<T>],
    ctx: &mut DecodeContext,
) -> Result<()> {
    for spec in specs {
        let Some(raw) = spec.name.lookup(node) else {
            continue;
        };

        match &spec.slot {
            Slot::Text(access) => *access(target) = Some(raw.to_string()),
            Slot::Flag(access) => *access(target) = Some(raw == "true"),
            Slot::Integer(access) => match raw.parse::<i64>() {
                Ok(number) => *access(target) = Some(number),
                Err(e) => ctx.report(field_error(node, &spec.name, raw, e))?,
            },
            Slot::Decimal(access) => match raw.parse::<f64>() {
                Ok(number) => *access(target) = Some(number),
                Err(e) => ctx.report(field_error(node, &spec.name, raw, e))?,
            },
            Slot::Tokens(access) => access(target).extend(split_tokens(raw).map(str::to_string)),
        }
    }
    Ok(())
}
