//! Resolver for elements whose timing datatype is not fixed by their tag.
//!
//! `useablePeriod` and composite `comp` elements may hold an interval, a
//! periodic interval, an event-related interval or a nested set expression.
//! The concrete type is chosen from which children and attributes are
//! present, in a fixed precedence order:
//!
//! 1. any `comp` child: composite
//! 2. an `event` or `offset` child: event-related
//! 3. a `phase` or `period` child, or an `alignment`, `institutionSpecified`
//!    or `institution` attribute: periodic
//! 4. composite members only: a `low`, `center`, `width` or `high` child
//!    gives an interval
//! 5. otherwise an interval at top level and the generic type for members

use roxmltree::Node;

use super::handler::Decode;
use super::types::DecodeContext;
use crate::error::Result;
use crate::types::{EivlTs, IvlTs, PivlTs, SxcmTs, SxprTs, TimingMember, TimingValue};
use crate::xml::{element_children, get_tag_name};

/// Where an ambiguous timing element sits, which decides its fallback type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionScope {
    /// An owner's `useablePeriod`.
    UseablePeriod,
    /// A `comp` member of a composite timing value.
    CompositeMember,
}

/// The concrete timing datatype selected for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingKind {
    Interval,
    Periodic,
    EventRelated,
    Composite,
    Generic,
}

/// Presence flags for the children and attributes that drive resolution.
///
/// Children are matched by local name in any namespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimingSignature {
    pub comp: bool,
    pub event: bool,
    pub offset: bool,
    pub phase: bool,
    pub period: bool,
    pub low: bool,
    pub center: bool,
    pub width: bool,
    pub high: bool,
    pub alignment: bool,
    pub institution: bool,
}

impl TimingSignature {
    /// Scan an element's direct children and attributes.
    #[must_use]
    pub fn of(node: Node<'_, '_>) -> Self {
        let mut signature = Self::default();
        for child in element_children(node) {
            match get_tag_name(child) {
                "comp" => signature.comp = true,
                "event" => signature.event = true,
                "offset" => signature.offset = true,
                "phase" => signature.phase = true,
                "period" => signature.period = true,
                "low" => signature.low = true,
                "center" => signature.center = true,
                "width" => signature.width = true,
                "high" => signature.high = true,
                _ => {}
            }
        }
        signature.alignment = node.attribute("alignment").is_some();
        signature.institution = node.attribute("institutionSpecified").is_some()
            || node.attribute("institution").is_some();
        signature
    }

    /// Apply the precedence rules for the given scope.
    #[must_use]
    pub fn classify(&self, scope: ResolutionScope) -> TimingKind {
        if self.comp {
            TimingKind::Composite
        } else if self.event || self.offset {
            TimingKind::EventRelated
        } else if self.phase || self.period || self.alignment || self.institution {
            TimingKind::Periodic
        } else if scope == ResolutionScope::CompositeMember && self.has_interval_bounds() {
            TimingKind::Interval
        } else {
            match scope {
                ResolutionScope::UseablePeriod => TimingKind::Interval,
                ResolutionScope::CompositeMember => TimingKind::Generic,
            }
        }
    }

    fn has_interval_bounds(&self) -> bool {
        self.low || self.center || self.width || self.high
    }
}

/// Resolve and decode a `useablePeriod` element.
///
/// # Errors
/// Propagates field errors raised under the strict numeric policy.
pub fn resolve_timing(node: Node<'_, '_>, ctx: &mut DecodeContext) -> Result<Option<TimingValue>> {
    let kind = TimingSignature::of(node).classify(ResolutionScope::UseablePeriod);
    tracing::trace!(?kind, element = get_tag_name(node), "Resolved timing element");

    Ok(match kind {
        TimingKind::Composite => SxprTs::decode(node, ctx)?.map(TimingValue::Composite),
        TimingKind::EventRelated => EivlTs::decode(node, ctx)?.map(TimingValue::EventRelated),
        TimingKind::Periodic => PivlTs::decode(node, ctx)?.map(TimingValue::Periodic),
        // The generic type is never chosen at top level.
        TimingKind::Interval | TimingKind::Generic => {
            IvlTs::decode(node, ctx)?.map(TimingValue::Interval)
        }
    })
}

/// Resolve and decode one `comp` member of a composite timing value.
///
/// # Errors
/// Propagates field errors raised under the strict numeric policy.
pub fn resolve_member(
    node: Node<'_, '_>,
    ctx: &mut DecodeContext,
) -> Result<Option<TimingMember>> {
    let kind = TimingSignature::of(node).classify(ResolutionScope::CompositeMember);
    tracing::trace!(?kind, element = get_tag_name(node), "Resolved composite member");

    Ok(match kind {
        TimingKind::Composite => SxprTs::decode(node, ctx)?.map(TimingMember::Composite),
        TimingKind::EventRelated => EivlTs::decode(node, ctx)?.map(TimingMember::EventRelated),
        TimingKind::Periodic => PivlTs::decode(node, ctx)?.map(TimingMember::Periodic),
        TimingKind::Interval => IvlTs::decode(node, ctx)?.map(TimingMember::Interval),
        TimingKind::Generic => SxcmTs::decode(node, ctx)?.map(TimingMember::Generic),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    fn classify(xml: &str, scope: ResolutionScope) -> TimingKind {
        let doc = Document::parse(xml).unwrap();
        TimingSignature::of(doc.root_element()).classify(scope)
    }

    fn resolve(xml: &str) -> Option<TimingValue> {
        let doc = Document::parse(xml).unwrap();
        resolve_timing(doc.root_element(), &mut DecodeContext::default()).unwrap()
    }

    #[test]
    fn test_comp_beats_phase() {
        let xml = r#"<useablePeriod xmlns="urn:hl7-org:v3">
            <phase><low value="20240101"/></phase>
            <comp operator="A"><period value="8" unit="h"/></comp>
        </useablePeriod>"#;
        assert_eq!(classify(xml, ResolutionScope::UseablePeriod), TimingKind::Composite);
        assert!(matches!(resolve(xml), Some(TimingValue::Composite(_))));
    }

    #[test]
    fn test_event_beats_period() {
        let xml = r#"<useablePeriod xmlns="urn:hl7-org:v3">
            <period value="1" unit="d"/><event code="ACM"/>
        </useablePeriod>"#;
        assert_eq!(classify(xml, ResolutionScope::UseablePeriod), TimingKind::EventRelated);
    }

    #[test]
    fn test_offset_alone_is_event_related() {
        let xml = r#"<comp><offset value="1" unit="h"/></comp>"#;
        assert_eq!(classify(xml, ResolutionScope::CompositeMember), TimingKind::EventRelated);
    }

    #[test]
    fn test_periodic_attributes() {
        assert_eq!(
            classify(r#"<useablePeriod alignment="DW"/>"#, ResolutionScope::UseablePeriod),
            TimingKind::Periodic
        );
        assert_eq!(
            classify(
                r#"<useablePeriod institutionSpecified="true"/>"#,
                ResolutionScope::UseablePeriod
            ),
            TimingKind::Periodic
        );
        assert_eq!(
            classify(r#"<comp institution="true"/>"#, ResolutionScope::CompositeMember),
            TimingKind::Periodic
        );
    }

    #[test]
    fn test_bounds_only_count_for_members() {
        let xml = r#"<x><low value="20240101"/><high value="20241231"/></x>"#;
        assert_eq!(classify(xml, ResolutionScope::CompositeMember), TimingKind::Interval);
        assert_eq!(classify(xml, ResolutionScope::UseablePeriod), TimingKind::Interval);
    }

    #[test]
    fn test_fallback_differs_by_scope() {
        let xml = r#"<x value="20240101"/>"#;
        assert_eq!(classify(xml, ResolutionScope::UseablePeriod), TimingKind::Interval);
        assert_eq!(classify(xml, ResolutionScope::CompositeMember), TimingKind::Generic);
    }

    #[test]
    fn test_signature_is_pure() {
        let xml = r#"<useablePeriod xmlns="urn:hl7-org:v3"><phase/><comp value="x"/></useablePeriod>"#;
        let doc = Document::parse(xml).unwrap();
        let node = doc.root_element();
        let first = TimingSignature::of(node);
        let second = TimingSignature::of(node);
        assert_eq!(first, second);
        assert_eq!(
            first.classify(ResolutionScope::UseablePeriod),
            second.classify(ResolutionScope::UseablePeriod)
        );

        let mut ctx = DecodeContext::default();
        let a = resolve_timing(node, &mut ctx).unwrap();
        let b = resolve_timing(node, &mut ctx).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_children_match_in_any_namespace() {
        let xml = r#"<useablePeriod xmlns:x="urn:other"><x:period value="2"/></useablePeriod>"#;
        assert_eq!(classify(xml, ResolutionScope::UseablePeriod), TimingKind::Periodic);
    }

    #[test]
    fn test_nested_composite_keeps_members() {
        let xml = r#"<useablePeriod xmlns="urn:hl7-org:v3" operator="I">
            <comp operator="A">
                <comp><low value="20240101"/></comp>
                <comp><period value="12" unit="h"/></comp>
            </comp>
            <comp value="20240301"/>
        </useablePeriod>"#;
        let Some(TimingValue::Composite(outer)) = resolve(xml) else {
            panic!("expected composite");
        };
        assert_eq!(outer.operator.as_deref(), Some("I"));
        assert_eq!(outer.comp.len(), 2);

        let TimingMember::Composite(inner) = &outer.comp[0] else {
            panic!("expected nested composite");
        };
        assert_eq!(inner.operator.as_deref(), Some("A"));
        assert!(matches!(inner.comp[0], TimingMember::Interval(_)));
        assert!(matches!(inner.comp[1], TimingMember::Periodic(_)));

        let TimingMember::Generic(generic) = &outer.comp[1] else {
            panic!("expected generic member");
        };
        assert_eq!(generic.value.as_deref(), Some("20240301"));
    }

    #[test]
    fn test_empty_useable_period_is_none() {
        assert!(resolve(r#"<useablePeriod xmlns="urn:hl7-org:v3"> </useablePeriod>"#).is_none());
    }
}
