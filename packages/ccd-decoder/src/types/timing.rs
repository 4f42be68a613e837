//! Timing specification datatypes.
//!
//! The same XML shape can carry any of these, so owners store them as
//! [`TimingValue`] or [`TimingMember`], chosen by the timing resolver.

use serde::Serialize;

use super::datatypes::{Ce, IvlPq, IvxbTs, Pq, Pqr, Ts};
use crate::emptiness::IsEmpty;

/// IVL_TS: interval of time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IvlTs {
    pub null_flavor: Option<String>,
    pub unit: Option<String>,
    pub value: Option<String>,
    pub operator: Option<String>,
    pub translations: Vec<Pqr>,
    pub low: Option<IvxbTs>,
    pub center: Option<Ts>,
    pub width: Option<Pq>,
    pub high: Option<IvxbTs>,
}

/// PIVL_TS: periodic interval, such as "every 8 hours".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PivlTs {
    pub null_flavor: Option<String>,
    pub operator: Option<String>,
    pub alignment: Option<String>,
    pub institution_specified: Option<bool>,
    pub phase: Option<IvlTs>,
    pub period: Option<Pq>,
}

/// EIVL_TS: interval relative to a clinical event, such as "before meals".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EivlTs {
    pub null_flavor: Option<String>,
    pub operator: Option<String>,
    pub value: Option<String>,
    pub event: Option<Ce>,
    pub offset: Option<IvlPq>,
}

/// SXPR_TS: set expression combining member timings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SxprTs {
    pub null_flavor: Option<String>,
    pub value: Option<String>,
    pub operator: Option<String>,
    pub comp: Vec<TimingMember>,
}

/// SXCM_TS: the generic timing supertype, used for composite members that
/// match no more specific shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SxcmTs {
    pub null_flavor: Option<String>,
    pub value: Option<String>,
    pub operator: Option<String>,
}

/// A resolved top-level timing value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TimingValue {
    Interval(IvlTs),
    Periodic(PivlTs),
    EventRelated(EivlTs),
    Composite(SxprTs),
}

/// A resolved member of a composite timing value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TimingMember {
    Interval(IvlTs),
    Periodic(PivlTs),
    EventRelated(EivlTs),
    Composite(SxprTs),
    Generic(SxcmTs),
}

impl IsEmpty for TimingValue {
    fn is_empty(&self) -> bool {
        match self {
            Self::Interval(v) => IsEmpty::is_empty(v),
            Self::Periodic(v) => IsEmpty::is_empty(v),
            Self::EventRelated(v) => IsEmpty::is_empty(v),
            Self::Composite(v) => IsEmpty::is_empty(v),
        }
    }
}

impl IsEmpty for TimingMember {
    fn is_empty(&self) -> bool {
        match self {
            Self::Interval(v) => IsEmpty::is_empty(v),
            Self::Periodic(v) => IsEmpty::is_empty(v),
            Self::EventRelated(v) => IsEmpty::is_empty(v),
            Self::Composite(v) => IsEmpty::is_empty(v),
            Self::Generic(v) => IsEmpty::is_empty(v),
        }
    }
}
