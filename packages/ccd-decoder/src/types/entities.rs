//! CDA R2 header participations, roles and entities.
//!
//! Every record carries the common `realmCode`/`typeId`/`templateId`
//! infrastructure where the schema allows it.

use serde::Serialize;

use super::datatypes::{Ad, Bl, Cd, Ce, Cs, Ed, En, Ii, Int, On, Pn, Sc, Tel, Ts};
use super::timing::IvlTs;

/// Participation linking the document to its patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordTarget {
    pub null_flavor: Option<String>,
    pub type_code: Option<String>,
    pub context_control_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub patient_role: Option<PatientRole>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRole {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub ids: Vec<Ii>,
    pub identified_by: Vec<IdentifiedBy>,
    pub addrs: Vec<Ad>,
    pub telecoms: Vec<Tel>,
    pub patient: Option<Patient>,
    pub provider_organization: Option<Organization>,
}

/// The patient, including the sdtc demographic extensions.
///
/// Race and ethnicity codes from the core element and the sdtc extension
/// element are collected into one list each, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub determiner_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub id: Option<Ii>,
    pub names: Vec<Pn>,
    pub desc: Option<Ed>,
    pub administrative_gender_code: Option<Ce>,
    pub birth_time: Option<Ts>,
    pub deceased_ind: Option<Bl>,
    pub deceased_time: Option<Ts>,
    pub multiple_birth_ind: Option<Bl>,
    pub multiple_birth_order_number: Option<Int>,
    pub marital_status_code: Option<Ce>,
    pub religious_affiliation_code: Option<Ce>,
    pub race_codes: Vec<Ce>,
    pub ethnic_group_codes: Vec<Ce>,
    pub guardians: Vec<Guardian>,
    pub birthplace: Option<Birthplace>,
    pub language_communications: Vec<LanguageCommunication>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guardian {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub ids: Vec<Ii>,
    pub identified_by: Vec<IdentifiedBy>,
    pub code: Option<Ce>,
    pub addrs: Vec<Ad>,
    pub telecoms: Vec<Tel>,
    pub guardian_person: Option<Person>,
    pub guardian_organization: Option<Organization>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub determiner_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub names: Vec<Pn>,
    pub desc: Option<Ed>,
    pub as_patient_relationships: Vec<PatientRelationship>,
}

/// `sdtc:asPatientRelationship`: how a person relates to the patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRelationship {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub code: Option<Ce>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub determiner_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub ids: Vec<Ii>,
    pub names: Vec<On>,
    pub telecoms: Vec<Tel>,
    pub addrs: Vec<Ad>,
    pub standard_industry_class_code: Option<Ce>,
    pub as_organization_part_of: Option<OrganizationPartOf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationPartOf {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub ids: Vec<Ii>,
    pub code: Option<Ce>,
    pub status_code: Option<Cs>,
    pub effective_time: Option<IvlTs>,
    pub whole_organization: Option<Box<Organization>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Birthplace {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub place: Option<Place>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub determiner_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub name: Option<En>,
    pub addr: Option<Ad>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageCommunication {
    pub null_flavor: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub language_code: Option<Cs>,
    pub mode_code: Option<Ce>,
    pub proficiency_level_code: Option<Ce>,
    pub preference_ind: Option<Bl>,
}

/// `sdtc:identifiedBy`: wrapper around an alternate identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifiedBy {
    pub null_flavor: Option<String>,
    pub type_code: Option<String>,
    pub alternate_identification: Option<AlternateIdentification>,
}

/// `sdtc:alternateIdentification`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternateIdentification {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub id: Option<Ii>,
    pub code: Option<Cd>,
    pub status_code: Option<Cs>,
    pub effective_time: Option<IvlTs>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub null_flavor: Option<String>,
    pub type_code: Option<String>,
    pub context_control_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub function_code: Option<Ce>,
    pub time: Option<Ts>,
    pub assigned_author: Option<AssignedAuthor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedAuthor {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub ids: Vec<Ii>,
    pub identified_by: Vec<IdentifiedBy>,
    pub code: Option<Ce>,
    pub addrs: Vec<Ad>,
    pub telecoms: Vec<Tel>,
    pub assigned_person: Option<Person>,
    pub assigned_authoring_device: Option<AuthoringDevice>,
    pub represented_organization: Option<Organization>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoringDevice {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub determiner_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub code: Option<Ce>,
    pub manufacturer_model_name: Option<Sc>,
    pub software_name: Option<Sc>,
    pub as_maintained_entities: Vec<MaintainedEntity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintainedEntity {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub effective_time: Option<IvlTs>,
    pub maintaining_person: Option<Person>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataEnterer {
    pub null_flavor: Option<String>,
    pub type_code: Option<String>,
    pub context_control_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub time: Option<Ts>,
    pub assigned_entity: Option<AssignedEntity>,
}

/// A person or organization acting in a role, shared by several
/// participations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedEntity {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub ids: Vec<Ii>,
    pub identified_by: Vec<IdentifiedBy>,
    pub code: Option<Ce>,
    pub addrs: Vec<Ad>,
    pub telecoms: Vec<Tel>,
    pub assigned_person: Option<Person>,
    pub represented_organization: Option<Organization>,
    pub patient: Option<AssignedEntityPatient>,
}

/// `sdtc:patient`: the assigned entity is also a patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedEntityPatient {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub id: Option<Ii>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Informant {
    pub null_flavor: Option<String>,
    pub type_code: Option<String>,
    pub context_control_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub assigned_entity: Option<AssignedEntity>,
    pub related_entity: Option<RelatedEntity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedEntity {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub code: Option<Ce>,
    pub addrs: Vec<Ad>,
    pub telecoms: Vec<Tel>,
    pub effective_time: Option<IvlTs>,
    pub related_person: Option<Person>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Custodian {
    pub null_flavor: Option<String>,
    pub type_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub assigned_custodian: Option<AssignedCustodian>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedCustodian {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub represented_custodian_organization: Option<CustodianOrganization>,
}

/// The organization responsible for keeping the document. Telecoms from
/// both the core and sdtc namespaces end up in one list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustodianOrganization {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub determiner_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub ids: Vec<Ii>,
    pub name: Option<On>,
    pub telecoms: Vec<Tel>,
    pub addr: Option<Ad>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InformationRecipient {
    pub null_flavor: Option<String>,
    pub type_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub intended_recipient: Option<IntendedRecipient>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntendedRecipient {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub ids: Vec<Ii>,
    pub identified_by: Vec<IdentifiedBy>,
    pub addrs: Vec<Ad>,
    pub telecoms: Vec<Tel>,
    pub information_recipient: Option<Person>,
    pub received_organization: Option<Organization>,
}

/// Signer of the document. Also used for `authenticator`, which has the
/// same shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalAuthenticator {
    pub null_flavor: Option<String>,
    pub type_code: Option<String>,
    pub context_control_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub time: Option<Ts>,
    pub signature_code: Option<Cs>,
    pub signature_text: Option<Ed>,
    pub assigned_entity: Option<AssignedEntity>,
}

pub type Authenticator = LegalAuthenticator;

/// Header-level `participant`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant1 {
    pub null_flavor: Option<String>,
    pub type_code: Option<String>,
    pub context_control_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub function_code: Option<Ce>,
    pub time: Option<IvlTs>,
    pub associated_entity: Option<AssociatedEntity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociatedEntity {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub ids: Vec<Ii>,
    pub identified_by: Vec<IdentifiedBy>,
    pub code: Option<Ce>,
    pub addrs: Vec<Ad>,
    pub telecoms: Vec<Tel>,
    pub associated_person: Option<Person>,
    pub scoping_organization: Option<Organization>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InFulfillmentOf {
    pub null_flavor: Option<String>,
    pub type_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub order: Option<Order>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub mood_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub ids: Vec<Ii>,
    pub code: Option<Ce>,
    pub priority_code: Option<Ce>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationOf {
    pub null_flavor: Option<String>,
    pub type_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub service_event: Option<ServiceEvent>,
}

/// The care provision the document summarizes, with its performers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEvent {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub mood_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub ids: Vec<Ii>,
    pub code: Option<Ce>,
    pub effective_time: Option<IvlTs>,
    pub performers: Vec<Performer1>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Performer1 {
    pub null_flavor: Option<String>,
    pub type_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub function_code: Option<Ce>,
    pub time: Option<IvlTs>,
    pub assigned_entity: Option<AssignedEntity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedDocument {
    pub null_flavor: Option<String>,
    pub type_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub parent_document: Option<ParentDocument>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentDocument {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub mood_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub ids: Vec<Ii>,
    pub code: Option<Cd>,
    pub text: Option<Ed>,
    pub set_id: Option<Ii>,
    pub version_number: Option<Int>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Authorization {
    pub null_flavor: Option<String>,
    pub type_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub consent: Option<Consent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Consent {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub mood_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub ids: Vec<Ii>,
    pub code: Option<Ce>,
    pub status_code: Option<Cs>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentOf {
    pub null_flavor: Option<String>,
    pub type_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub encompassing_encounter: Option<EncompassingEncounter>,
}

/// The encounter in which the document was created.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncompassingEncounter {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub mood_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub ids: Vec<Ii>,
    pub code: Option<Ce>,
    pub effective_time: Option<IvlTs>,
    pub admission_referral_source_code: Option<Ce>,
    pub discharge_disposition_code: Option<Ce>,
    pub responsible_party: Option<ResponsibleParty>,
    pub encounter_participants: Vec<EncounterParticipant>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsibleParty {
    pub null_flavor: Option<String>,
    pub type_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub assigned_entity: Option<AssignedEntity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterParticipant {
    pub null_flavor: Option<String>,
    pub type_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub time: Option<IvlTs>,
    pub assigned_entity: Option<AssignedEntity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub null_flavor: Option<String>,
    pub type_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub health_care_facility: Option<HealthCareFacility>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCareFacility {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub ids: Vec<Ii>,
    pub identified_by: Vec<IdentifiedBy>,
    pub code: Option<Ce>,
    pub location: Option<Place>,
    pub service_provider_organization: Option<Organization>,
}
