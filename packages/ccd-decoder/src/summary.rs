//! Display helpers and a one-screen summary of a decoded document.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use crate::types::{Ce, ClinicalDocument, Cs, En, Enxp, Ii, On, Patient, Ts};

/// Leading `YYYY[MM[DD]]` of an HL7 timestamp.
#[allow(clippy::expect_used)]
static TS_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})(\d{2})?(\d{2})?").expect("valid regex")
});

/// Format the date part of a timestamp as `YYYY-MM-DD`.
///
/// Missing month or day become `01`; the time and zone are dropped.
#[must_use]
pub fn ts_to_iso_date(ts: &Ts) -> Option<String> {
    let value = ts.value.as_deref()?;
    let caps = TS_DATE_RE.captures(value)?;
    let year = caps.get(1)?.as_str();
    let month = caps.get(2).map_or("01", |m| m.as_str());
    let day = caps.get(3).map_or("01", |m| m.as_str());
    Some(format!("{year}-{month}-{day}"))
}

/// Whole years between a full `YYYYMMDD` birth date and `today`.
#[must_use]
pub fn age_on(birth: &Ts, today: NaiveDate) -> Option<u32> {
    let value = birth.value.as_deref()?;
    let caps = TS_DATE_RE.captures(value)?;
    // Partial dates give no age
    caps.get(3)?;
    let date = NaiveDate::parse_from_str(caps.get(0)?.as_str(), "%Y%m%d").ok()?;
    today.years_since(date)
}

/// `code@codeSystem`, else `code@codeSystemName`, else `code`.
#[must_use]
pub fn ce_to_string(ce: &Ce) -> Option<String> {
    let code = ce.code.as_deref()?;
    Some(
        match ce.code_system.as_deref().or(ce.code_system_name.as_deref()) {
            Some(system) => format!("{code}@{system}"),
            None => code.to_string(),
        },
    )
}

#[must_use]
pub fn cs_to_string(cs: &Cs) -> Option<String> {
    cs.code.clone()
}

/// `extension@root`, else root, else extension.
#[must_use]
pub fn ii_to_string(ii: &Ii) -> Option<String> {
    match (ii.extension.as_deref(), ii.root.as_deref()) {
        (Some(ext), Some(root)) => Some(format!("{ext}@{root}")),
        (None, Some(root)) => Some(root.to_string()),
        (ext, None) => ext.map(str::to_string),
    }
}

/// The raw name text, else prefix, given, family and suffix parts.
#[must_use]
pub fn name_to_string(name: &En) -> Option<String> {
    if let Some(text) = &name.text {
        return Some(text.clone());
    }
    join_parts([&name.prefix, &name.given, &name.family, &name.suffix])
}

/// Organization names have no given or family parts.
#[must_use]
pub fn organization_name_to_string(name: &On) -> Option<String> {
    if let Some(text) = &name.text {
        return Some(text.clone());
    }
    join_parts([&name.prefix, &name.suffix])
}

fn join_parts<'a>(groups: impl IntoIterator<Item = &'a Vec<Enxp>>) -> Option<String> {
    let parts: Vec<&str> = groups
        .into_iter()
        .flatten()
        .filter_map(|part| part.text.as_deref())
        .collect();
    (!parts.is_empty()).then(|| parts.join(" "))
}

/// Headline facts about a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub title: Option<String>,
    pub document_id: Option<String>,
    pub effective_date: Option<String>,
    pub language: Option<String>,
    pub patient_name: Option<String>,
    pub birth_date: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub author_count: usize,
    pub custodian: Option<String>,
}

impl DocumentSummary {
    /// Summarize a document, computing the patient's age as of `today`.
    #[must_use]
    pub fn from_document(doc: &ClinicalDocument, today: NaiveDate) -> Self {
        let patient = first_patient(doc);
        let birth_time = patient.and_then(|p| p.birth_time.as_ref());

        Self {
            title: doc.title.as_ref().and_then(|t| t.text.clone()),
            document_id: doc.id.as_ref().and_then(ii_to_string),
            effective_date: doc.effective_time.as_ref().and_then(ts_to_iso_date),
            language: doc.language_code.as_ref().and_then(cs_to_string),
            patient_name: patient
                .and_then(|p| p.names.first())
                .and_then(name_to_string),
            birth_date: birth_time.and_then(ts_to_iso_date),
            age: birth_time.and_then(|ts| age_on(ts, today)),
            gender: patient
                .and_then(|p| p.administrative_gender_code.as_ref())
                .and_then(|ce| ce.code.clone()),
            author_count: doc.authors.len(),
            custodian: doc
                .custodian
                .as_ref()
                .and_then(|c| c.assigned_custodian.as_ref())
                .and_then(|a| a.represented_custodian_organization.as_ref())
                .and_then(|o| o.name.as_ref())
                .and_then(organization_name_to_string),
        }
    }
}

fn first_patient(doc: &ClinicalDocument) -> Option<&Patient> {
    doc.record_targets
        .iter()
        .filter_map(|rt| rt.patient_role.as_ref())
        .find_map(|role| role.patient.as_ref())
}
