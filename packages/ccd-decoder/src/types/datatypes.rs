//! HL7 V3 leaf datatypes.
//!
//! Field names follow the XML attribute and element names. Every field is
//! optional because any of them may be missing from a real document.

use serde::Serialize;

use super::timing::{IvlTs, TimingValue};

/// BL: boolean.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bl {
    pub null_flavor: Option<String>,
    pub value: Option<bool>,
}

/// INT: integer number. Also used for INT_POS.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Int {
    pub null_flavor: Option<String>,
    pub value: Option<i64>,
}

/// PQ: physical quantity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pq {
    pub null_flavor: Option<String>,
    pub unit: Option<String>,
    pub value: Option<f64>,
    pub translations: Vec<Pqr>,
}

/// PQR: a quantity expressed in another coding system's unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pqr {
    pub null_flavor: Option<String>,
    pub code: Option<String>,
    pub code_system: Option<String>,
    pub code_system_name: Option<String>,
    pub code_system_version: Option<String>,
    pub display_name: Option<String>,
    pub value_set: Option<String>,
    pub value_set_version: Option<String>,
    pub value: Option<f64>,
    pub original_text: Option<Ed>,
}

/// IVXB_PQ: interval boundary quantity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IvxbPq {
    pub null_flavor: Option<String>,
    pub unit: Option<String>,
    pub value: Option<f64>,
    pub inclusive: Option<bool>,
    pub translations: Vec<Pqr>,
}

/// IVL_PQ: interval of physical quantities.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IvlPq {
    pub null_flavor: Option<String>,
    pub unit: Option<String>,
    pub value: Option<f64>,
    pub operator: Option<String>,
    pub translations: Vec<Pqr>,
    pub low: Option<IvxbPq>,
    pub center: Option<Pq>,
    pub width: Option<Pq>,
    pub high: Option<IvxbPq>,
}

/// ST: character string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct St {
    pub null_flavor: Option<String>,
    pub representation: Option<String>,
    pub media_type: Option<String>,
    pub language: Option<String>,
    pub text: Option<String>,
}

/// SC: character string with an optional code.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sc {
    pub null_flavor: Option<String>,
    pub representation: Option<String>,
    pub media_type: Option<String>,
    pub language: Option<String>,
    pub code: Option<String>,
    pub code_system: Option<String>,
    pub code_system_name: Option<String>,
    pub code_system_version: Option<String>,
    pub display_name: Option<String>,
    pub text: Option<String>,
}

/// CS: simple coded value whose code system is implied by context.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cs {
    pub null_flavor: Option<String>,
    pub code: Option<String>,
    pub code_system: Option<String>,
    pub code_system_name: Option<String>,
    pub code_system_version: Option<String>,
    pub display_name: Option<String>,
}

/// CV: coded value with original text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cv {
    pub null_flavor: Option<String>,
    pub code: Option<String>,
    pub code_system: Option<String>,
    pub code_system_name: Option<String>,
    pub code_system_version: Option<String>,
    pub display_name: Option<String>,
    pub value_set: Option<String>,
    pub value_set_version: Option<String>,
    pub original_text: Option<Ed>,
}

/// CE: coded value with equivalents.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ce {
    pub null_flavor: Option<String>,
    pub code: Option<String>,
    pub code_system: Option<String>,
    pub code_system_name: Option<String>,
    pub code_system_version: Option<String>,
    pub display_name: Option<String>,
    pub value_set: Option<String>,
    pub value_set_version: Option<String>,
    pub original_text: Option<Ed>,
    pub translations: Vec<Cd>,
}

/// CD: concept descriptor, the most general coded type.
///
/// `valueSet` and `valueSetVersion` come from the sdtc namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cd {
    pub null_flavor: Option<String>,
    pub code: Option<String>,
    pub code_system: Option<String>,
    pub code_system_name: Option<String>,
    pub code_system_version: Option<String>,
    pub display_name: Option<String>,
    pub value_set: Option<String>,
    pub value_set_version: Option<String>,
    pub original_text: Option<Ed>,
    pub qualifiers: Vec<Cr>,
    pub translations: Vec<Cd>,
}

/// CR: concept role, a name/value qualifier on a CD.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cr {
    pub null_flavor: Option<String>,
    pub inverted: Option<bool>,
    pub name: Option<Cv>,
    pub value: Option<Cd>,
}

/// ED: encapsulated data.
///
/// Holds inline text (or base64) as the raw text payload, with an optional
/// reference and a recursive thumbnail.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ed {
    pub null_flavor: Option<String>,
    pub compression: Option<String>,
    pub integrity_check: Option<String>,
    pub integrity_check_algorithm: Option<String>,
    pub language: Option<String>,
    pub media_type: Option<String>,
    pub representation: Option<String>,
    pub reference: Option<Tel>,
    pub thumbnail: Option<Box<Ed>>,
    pub text: Option<String>,
}

/// II: instance identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ii {
    pub null_flavor: Option<String>,
    pub assigning_authority_name: Option<String>,
    pub displayable: Option<bool>,
    pub root: Option<String>,
    pub extension: Option<String>,
}

/// TEL: telecommunication address.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tel {
    pub null_flavor: Option<String>,
    pub value: Option<String>,
    #[serde(rename = "use")]
    pub uses: Vec<String>,
    pub useable_periods: Vec<TimingValue>,
}

/// TS: point in time, kept as the raw HL7 timestamp string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ts {
    pub null_flavor: Option<String>,
    pub value: Option<String>,
}

/// IVXB_TS: interval boundary timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IvxbTs {
    pub null_flavor: Option<String>,
    pub value: Option<String>,
    pub inclusive: Option<bool>,
}

/// ADXP: one address part.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Adxp {
    pub null_flavor: Option<String>,
    pub representation: Option<String>,
    pub media_type: Option<String>,
    pub language: Option<String>,
    pub part_type: Option<String>,
    pub text: Option<String>,
}

/// AD: postal address.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub null_flavor: Option<String>,
    pub is_not_ordered: Option<bool>,
    #[serde(rename = "use")]
    pub uses: Vec<String>,
    pub delimiter: Option<Adxp>,
    pub country: Option<Adxp>,
    pub state: Option<Adxp>,
    pub county: Option<Adxp>,
    pub city: Option<Adxp>,
    pub postal_code: Option<Adxp>,
    pub street_address_lines: Vec<Adxp>,
    pub house_number: Option<Adxp>,
    pub house_number_numeric: Option<Adxp>,
    pub direction: Option<Adxp>,
    pub street_name: Option<Adxp>,
    pub street_name_base: Option<Adxp>,
    pub street_name_type: Option<Adxp>,
    pub additional_locator: Option<Adxp>,
    pub unit_id: Option<Adxp>,
    pub unit_type: Option<Adxp>,
    pub care_of: Option<Adxp>,
    pub census_tract: Option<Adxp>,
    pub delivery_address_line: Option<Adxp>,
    pub delivery_installation_type: Option<Adxp>,
    pub delivery_installation_area: Option<Adxp>,
    pub delivery_installation_qualifier: Option<Adxp>,
    pub delivery_mode: Option<Adxp>,
    pub delivery_mode_identifier: Option<Adxp>,
    pub building_number_suffix: Option<Adxp>,
    pub post_box: Option<Adxp>,
    pub precinct: Option<Adxp>,
    pub useable_periods: Vec<TimingValue>,
    pub text: Option<String>,
}

/// ENXP: one name part.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enxp {
    pub null_flavor: Option<String>,
    pub representation: Option<String>,
    pub media_type: Option<String>,
    pub language: Option<String>,
    pub part_type: Option<String>,
    pub qualifier: Vec<String>,
    pub text: Option<String>,
}

/// EN: entity name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct En {
    pub null_flavor: Option<String>,
    #[serde(rename = "use")]
    pub uses: Vec<String>,
    pub delimiter: Vec<Enxp>,
    pub family: Vec<Enxp>,
    pub given: Vec<Enxp>,
    pub prefix: Vec<Enxp>,
    pub suffix: Vec<Enxp>,
    pub valid_time: Option<IvlTs>,
    pub text: Option<String>,
}

/// PN: person name. Same shape as EN.
pub type Pn = En;

/// ON: organization name. EN without person name parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct On {
    pub null_flavor: Option<String>,
    #[serde(rename = "use")]
    pub uses: Vec<String>,
    pub delimiter: Vec<Enxp>,
    pub prefix: Vec<Enxp>,
    pub suffix: Vec<Enxp>,
    pub valid_time: Option<IvlTs>,
    pub text: Option<String>,
}
