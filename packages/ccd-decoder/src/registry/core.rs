//! Dispatch table mapping qualified child names to decode slots.

use std::collections::HashMap;

use roxmltree::Node;

use super::handler::ChildSlot;
use crate::xml::{get_namespace, get_tag_name};

/// Table mapping `(namespace, local name)` to the slot filling a field.
///
/// Keyed namespace first so lookups borrow straight from the node without
/// building an owned key.
pub struct DispatchTable<T> {
    slots: HashMap<&'static str, HashMap<&'static str, ChildSlot<T>>>,
}

impl<T> DispatchTable<T> {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Register a slot for a qualified name. A later registration for the
    /// same name replaces the earlier one.
    pub fn register(&mut self, namespace: &'static str, local: &'static str, slot: ChildSlot<T>) {
        self.slots.entry(namespace).or_default().insert(local, slot);
    }

    /// Get the slot for an element, matching on namespace and local name.
    ///
    /// Elements without a namespace never match.
    pub fn get(&self, node: Node<'_, '_>) -> Option<ChildSlot<T>> {
        let namespace = get_namespace(node)?;
        self.slots
            .get(namespace)
            .and_then(|locals| locals.get(get_tag_name(node)))
            .copied()
    }

    /// Check if a slot is registered for a qualified name.
    #[must_use]
    pub fn has_handler(&self, namespace: &str, local: &str) -> bool {
        self.slots
            .get(namespace)
            .is_some_and(|locals| locals.contains_key(local))
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All registered names, sorted.
    #[must_use]
    pub fn registered_names(&self) -> Vec<(&'static str, &'static str)> {
        let mut names: Vec<_> = self
            .slots
            .iter()
            .flat_map(|(ns, locals)| locals.keys().map(move |local| (*ns, *local)))
            .collect();
        names.sort_unstable();
        names
    }
}

impl<T> Default for DispatchTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HL7_NAMESPACE, SDTC_NAMESPACE};
    use crate::error::Result;
    use crate::registry::DecodeContext;
    use roxmltree::Document;

    #[derive(Default)]
    struct Counter {
        hits: Vec<&'static str>,
    }

    fn mark_v3(target: &mut Counter, _: Node<'_, '_>, _: &mut DecodeContext) -> Result<()> {
        target.hits.push("v3");
        Ok(())
    }

    fn mark_sdtc(target: &mut Counter, _: Node<'_, '_>, _: &mut DecodeContext) -> Result<()> {
        target.hits.push("sdtc");
        Ok(())
    }

    fn table() -> DispatchTable<Counter> {
        let mut table = DispatchTable::new();
        table.register(HL7_NAMESPACE, "statusCode", mark_v3);
        table.register(SDTC_NAMESPACE, "statusCode", mark_sdtc);
        table
    }

    #[test]
    fn test_table_distinguishes_namespaces() {
        let xml = r#"<root xmlns="urn:hl7-org:v3" xmlns:sdtc="urn:hl7-org:sdtc">
            <statusCode code="a"/><sdtc:statusCode code="b"/><other:statusCode xmlns:other="urn:x" code="c"/>
        </root>"#;
        let doc = Document::parse(xml).unwrap();
        let table = table();
        let mut counter = Counter::default();
        let mut ctx = DecodeContext::default();

        for child in doc.root_element().children().filter(|n| n.is_element()) {
            if let Some(slot) = table.get(child) {
                slot(&mut counter, child, &mut ctx).unwrap();
            }
        }

        assert_eq!(counter.hits, vec!["v3", "sdtc"]);
    }

    #[test]
    fn test_unqualified_element_does_not_match() {
        let xml = r#"<statusCode code="a"/>"#;
        let doc = Document::parse(xml).unwrap();
        assert!(table().get(doc.root_element()).is_none());
    }

    #[test]
    fn test_table_introspection() {
        let table = table();
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert!(table.has_handler(SDTC_NAMESPACE, "statusCode"));
        assert!(!table.has_handler(SDTC_NAMESPACE, "code"));
        assert_eq!(
            table.registered_names(),
            vec![(SDTC_NAMESPACE, "statusCode"), (HL7_NAMESPACE, "statusCode")]
        );
    }
}
