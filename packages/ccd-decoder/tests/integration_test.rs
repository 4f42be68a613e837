//! End-to-end integration tests for the decoder.
//!
//! Decodes a C-CDA Continuity of Care Document header fixture for the
//! sample patient Alice Newman.

use std::fs;
use std::path::{Path, PathBuf};

use ccd_decoder::types::{TimingValue, Ts};
use ccd_decoder::{
    decode_document, decode_file, decode_str, ClinicalDocument, DecodeError, DecodeOptions,
    DocumentStructureError, DocumentSummary, NumericPolicy,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn decode_fixture() -> ClinicalDocument {
    let outcome = decode_str(&load_fixture("alice_newman.xml"), &DecodeOptions::default())
        .expect("fixture decodes");
    assert!(outcome.warnings.is_empty());
    outcome.document.expect("fixture has header data")
}

fn texts<'a>(parts: impl IntoIterator<Item = &'a ccd_decoder::types::Enxp>) -> Vec<&'a str> {
    parts
        .into_iter()
        .filter_map(|p| p.text.as_deref())
        .collect()
}

#[test]
fn test_document_header() {
    let doc = decode_fixture();

    assert_eq!(doc.realm_codes.len(), 1);
    assert_eq!(doc.template_ids.len(), 2);
    assert_eq!(
        doc.type_id.as_ref().unwrap().extension.as_deref(),
        Some("POCD_HD000040")
    );
    assert_eq!(doc.code.as_ref().unwrap().code.as_deref(), Some("34133-9"));
    assert_eq!(
        doc.title.as_ref().unwrap().text.as_deref(),
        Some("Summary of Patient Chart")
    );
    assert_eq!(
        doc.effective_time,
        Some(Ts {
            null_flavor: None,
            value: Some("20141015103026-0500".to_string()),
        })
    );
    assert_eq!(doc.version_number.as_ref().unwrap().value, Some(1));
    assert_eq!(doc.authors.len(), 2);
}

#[test]
fn test_patient_name() {
    let doc = decode_fixture();
    let patient = doc.record_targets[0]
        .patient_role
        .as_ref()
        .unwrap()
        .patient
        .as_ref()
        .unwrap();

    let name = &patient.names[0];
    assert_eq!(name.uses, vec!["L"]);
    assert_eq!(texts(&name.given), vec!["Alice"]);
    assert_eq!(texts(&name.family), vec!["Newman"]);
    assert_eq!(patient.birth_time.as_ref().unwrap().value.as_deref(), Some("19700501"));
}

#[test]
fn test_patient_demographics() {
    let doc = decode_fixture();
    let patient = doc.record_targets[0]
        .patient_role
        .as_ref()
        .unwrap()
        .patient
        .as_ref()
        .unwrap();

    // v3 and sdtc race codes end up in one list, in document order
    let races: Vec<_> = patient
        .race_codes
        .iter()
        .filter_map(|c| c.code.as_deref())
        .collect();
    assert_eq!(races, vec!["2106-3", "2076-8"]);
    assert_eq!(patient.ethnic_group_codes.len(), 1);
    assert_eq!(patient.deceased_ind.as_ref().unwrap().value, Some(false));

    let guardian_name = &patient.guardians[0]
        .guardian_person
        .as_ref()
        .unwrap()
        .names[0];
    assert_eq!(texts(&guardian_name.given), vec!["Boris", "Bo"]);
    assert_eq!(guardian_name.given[1].qualifier, vec!["CL"]);

    let birthplace_city = patient
        .birthplace
        .as_ref()
        .and_then(|b| b.place.as_ref())
        .and_then(|p| p.addr.as_ref())
        .and_then(|a| a.city.as_ref())
        .and_then(|c| c.text.as_deref());
    assert_eq!(birthplace_city, Some("Beaverton"));

    let language = &patient.language_communications[0];
    assert_eq!(language.preference_ind.as_ref().unwrap().value, Some(true));
}

#[test]
fn test_contact_details_and_useable_periods() {
    let doc = decode_fixture();
    let role = doc.record_targets[0].patient_role.as_ref().unwrap();

    let addr = &role.addrs[0];
    assert_eq!(addr.uses, vec!["HP"]);
    assert_eq!(addr.street_address_lines.len(), 1);
    assert_eq!(
        addr.postal_code.as_ref().unwrap().text.as_deref(),
        Some("97006")
    );
    let TimingValue::Interval(period) = &addr.useable_periods[0] else {
        panic!("expected an interval, got {:?}", addr.useable_periods[0]);
    };
    assert_eq!(period.low.as_ref().unwrap().value.as_deref(), Some("19750501"));
    assert_eq!(period.high.as_ref().unwrap().value.as_deref(), Some("20240501"));

    assert_eq!(role.telecoms.len(), 3);
    assert_eq!(role.telecoms[1].uses, vec!["HP", "WP"]);
    assert!(matches!(
        role.telecoms[2].useable_periods[0],
        TimingValue::Periodic(_)
    ));
}

#[test]
fn test_participants() {
    let doc = decode_fixture();

    let device = doc.authors[1]
        .assigned_author
        .as_ref()
        .unwrap()
        .assigned_authoring_device
        .as_ref()
        .unwrap();
    assert_eq!(
        device.software_name.as_ref().unwrap().text.as_deref(),
        Some("Good Health Report Generator")
    );

    let organization = doc
        .custodian
        .as_ref()
        .and_then(|c| c.assigned_custodian.as_ref())
        .and_then(|a| a.represented_custodian_organization.as_ref())
        .unwrap();
    assert_eq!(organization.telecoms.len(), 1);
    assert_eq!(organization.addr.as_ref().unwrap().street_address_lines.len(), 1);

    let authenticator = doc.legal_authenticator.as_ref().unwrap();
    assert_eq!(
        authenticator.signature_code.as_ref().unwrap().code.as_deref(),
        Some("S")
    );

    let service_event = doc.documentation_of[0].service_event.as_ref().unwrap();
    assert_eq!(service_event.class_code.as_deref(), Some("PCPR"));
    assert_eq!(service_event.performers.len(), 1);

    let encounter = doc
        .component_of
        .as_ref()
        .unwrap()
        .encompassing_encounter
        .as_ref()
        .unwrap();
    assert!(encounter.location.is_some());
}

#[test]
fn test_summary() {
    let doc = decode_fixture();
    let summary = DocumentSummary::from_document(&doc, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());

    assert_eq!(
        summary,
        DocumentSummary {
            title: Some("Summary of Patient Chart".to_string()),
            document_id: Some("EHRVersion2.0@be84a8e4-a22e-4210-a4a6-b3c48273e84c".to_string()),
            effective_date: Some("2014-10-15".to_string()),
            language: Some("en-US".to_string()),
            patient_name: Some("Alice Newman".to_string()),
            birth_date: Some("1970-05-01".to_string()),
            age: Some(54),
            gender: Some("F".to_string()),
            author_count: 2,
            custodian: Some("The DoctorsTogether Physician Group".to_string()),
        }
    );
}

#[test]
fn test_decode_file_matches_decode_str() {
    let from_file = decode_file(&fixture_path("alice_newman.xml"), &DecodeOptions::default())
        .unwrap()
        .document;
    assert_eq!(from_file, Some(decode_fixture()));
}

#[test]
fn test_decode_parsed_document() {
    let xml = load_fixture("alice_newman.xml");
    let tree = roxmltree::Document::parse(&xml).unwrap();
    let outcome = decode_document(&tree, &DecodeOptions::default()).unwrap();
    assert_eq!(outcome.document, Some(decode_fixture()));
}

#[test]
fn test_wrong_namespace_is_rejected() {
    let xml = load_fixture("alice_newman.xml").replacen(
        r#"xmlns="urn:hl7-org:v3""#,
        r#"xmlns="urn:hl7-org:v2""#,
        1,
    );
    let err = decode_str(&xml, &DecodeOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Structure(DocumentStructureError::WrongNamespace { found: Some(ref ns) })
            if ns == "urn:hl7-org:v2"
    ));
}

#[test]
fn test_numeric_policy() {
    let xml = load_fixture("alice_newman.xml")
        .replace(r#"<versionNumber value="1"/>"#, r#"<versionNumber value="one"/>"#);

    let lenient = decode_str(&xml, &DecodeOptions::default()).unwrap();
    assert_eq!(lenient.warnings.len(), 1);
    assert_eq!(lenient.warnings[0].element, "versionNumber");
    let doc = lenient.document.unwrap();
    assert!(doc.version_number.is_none());
    assert!(doc.title.is_some());

    let strict = DecodeOptions::default().with_numeric_policy(NumericPolicy::Strict);
    let err = decode_str(&xml, &strict).unwrap_err();
    assert!(matches!(err, DecodeError::Field(ref e) if e.value == "one"));
}

#[test]
fn test_yaml_projection() {
    let yaml = ccd_decoder::yaml::generate_yaml(&decode_fixture()).unwrap();
    assert!(yaml.starts_with("---\n"));
    assert!(yaml.contains("title:"));
    assert!(yaml.contains("Alice"));
    assert!(yaml.contains("type: periodic"));
    assert!(yaml.contains("nullFlavor: NA"));
    assert!(!yaml.contains(": null"));
}
