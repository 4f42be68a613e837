//! Schemas for header participations, roles and entities.

use crate::types::{
    Ad, AlternateIdentification, AssignedAuthor, AssignedCustodian, AssignedEntity,
    AssignedEntityPatient, AssociatedEntity, Author, AuthoringDevice, Authorization, Birthplace,
    Bl, Cd, Ce, ComponentOf, Consent, Cs, Custodian, CustodianOrganization, DataEnterer,
    DocumentationOf, Ed, En, EncompassingEncounter, EncounterParticipant, Guardian,
    HealthCareFacility, IdentifiedBy, Ii, InFulfillmentOf, InformationRecipient, Informant, Int,
    IntendedRecipient, IvlTs, LanguageCommunication, LegalAuthenticator, Location,
    MaintainedEntity, On, Order, Organization, OrganizationPartOf, ParentDocument, Participant1,
    Patient, PatientRelationship, PatientRole, Performer1, Person, Place, Pn, RecordTarget,
    RelatedDocument, RelatedEntity, ResponsibleParty, Sc, ServiceEvent, Tel, Ts,
};

element_schema!(RecordTarget {
    attributes: [
        "nullFlavor" => text null_flavor,
        "typeCode" => text type_code,
        "contextControlCode" => text context_control_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "patientRole" => one patient_role: PatientRole,
    ],
});

element_schema!(PatientRole {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "id" => many ids: Ii,
        sdtc "identifiedBy" => many identified_by: IdentifiedBy,
        v3 "addr" => many addrs: Ad,
        v3 "telecom" => many telecoms: Tel,
        v3 "patient" => one patient: Patient,
        v3 "providerOrganization" => one provider_organization: Organization,
    ],
});

element_schema!(Patient {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
        "determinerCode" => text determiner_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "id" => one id: Ii,
        v3 "name" => many names: Pn,
        sdtc "desc" => one desc: Ed,
        v3 "administrativeGenderCode" => one administrative_gender_code: Ce,
        v3 "birthTime" => one birth_time: Ts,
        sdtc "deceasedInd" => one deceased_ind: Bl,
        sdtc "deceasedTime" => one deceased_time: Ts,
        sdtc "multipleBirthInd" => one multiple_birth_ind: Bl,
        sdtc "multipleBirthOrderNumber" => one multiple_birth_order_number: Int,
        v3 "maritalStatusCode" => one marital_status_code: Ce,
        v3 "religiousAffiliationCode" => one religious_affiliation_code: Ce,
        v3 "raceCode" => many race_codes: Ce,
        sdtc "raceCode" => many race_codes: Ce,
        v3 "ethnicGroupCode" => many ethnic_group_codes: Ce,
        sdtc "ethnicGroupCode" => many ethnic_group_codes: Ce,
        v3 "guardian" => many guardians: Guardian,
        v3 "birthplace" => one birthplace: Birthplace,
        v3 "languageCommunication" => many language_communications: LanguageCommunication,
    ],
});

element_schema!(Guardian {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "id" => many ids: Ii,
        sdtc "identifiedBy" => many identified_by: IdentifiedBy,
        v3 "code" => one code: Ce,
        v3 "addr" => many addrs: Ad,
        v3 "telecom" => many telecoms: Tel,
        v3 "guardianPerson" => one guardian_person: Person,
        v3 "guardianOrganization" => one guardian_organization: Organization,
    ],
});

element_schema!(Person {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
        "determinerCode" => text determiner_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "name" => many names: Pn,
        sdtc "desc" => one desc: Ed,
        sdtc "asPatientRelationship" => many as_patient_relationships: PatientRelationship,
    ],
});

element_schema!(PatientRelationship {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
    ],
    children: [
        v3 "code" => one code: Ce,
        sdtc "code" => one code: Ce,
    ],
});

element_schema!(Organization {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
        "determinerCode" => text determiner_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "id" => many ids: Ii,
        v3 "name" => many names: On,
        v3 "telecom" => many telecoms: Tel,
        v3 "addr" => many addrs: Ad,
        v3 "standardIndustryClassCode" => one standard_industry_class_code: Ce,
        v3 "asOrganizationPartOf" => one as_organization_part_of: OrganizationPartOf,
    ],
});

element_schema!(OrganizationPartOf {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "id" => many ids: Ii,
        v3 "code" => one code: Ce,
        v3 "statusCode" => one status_code: Cs,
        v3 "effectiveTime" => one effective_time: IvlTs,
        v3 "wholeOrganization" => boxed whole_organization: Organization,
    ],
});

element_schema!(Birthplace {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "place" => one place: Place,
    ],
});

element_schema!(Place {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
        "determinerCode" => text determiner_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "name" => one name: En,
        v3 "addr" => one addr: Ad,
    ],
});

element_schema!(LanguageCommunication {
    attributes: [
        "nullFlavor" => text null_flavor,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "languageCode" => one language_code: Cs,
        v3 "modeCode" => one mode_code: Ce,
        v3 "proficiencyLevelCode" => one proficiency_level_code: Ce,
        v3 "preferenceInd" => one preference_ind: Bl,
    ],
});

element_schema!(IdentifiedBy {
    attributes: [
        "nullFlavor" => text null_flavor,
        "typeCode" => text type_code,
    ],
    children: [
        sdtc "alternateIdentification" => one alternate_identification: AlternateIdentification,
    ],
});

// Producers emit these children in either namespace.
element_schema!(AlternateIdentification {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
    ],
    children: [
        v3 "id" => one id: Ii,
        sdtc "id" => one id: Ii,
        v3 "code" => one code: Cd,
        sdtc "code" => one code: Cd,
        v3 "statusCode" => one status_code: Cs,
        sdtc "statusCode" => one status_code: Cs,
        v3 "effectiveTime" => one effective_time: IvlTs,
        sdtc "effectiveTime" => one effective_time: IvlTs,
    ],
});

element_schema!(Author {
    attributes: [
        "nullFlavor" => text null_flavor,
        "typeCode" => text type_code,
        "contextControlCode" => text context_control_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "functionCode" => one function_code: Ce,
        v3 "time" => one time: Ts,
        v3 "assignedAuthor" => one assigned_author: AssignedAuthor,
    ],
});

element_schema!(AssignedAuthor {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "id" => many ids: Ii,
        sdtc "identifiedBy" => many identified_by: IdentifiedBy,
        v3 "code" => one code: Ce,
        v3 "addr" => many addrs: Ad,
        v3 "telecom" => many telecoms: Tel,
        v3 "assignedPerson" => one assigned_person: Person,
        v3 "assignedAuthoringDevice" => one assigned_authoring_device: AuthoringDevice,
        v3 "representedOrganization" => one represented_organization: Organization,
    ],
});

element_schema!(AuthoringDevice {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
        "determinerCode" => text determiner_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "code" => one code: Ce,
        v3 "manufacturerModelName" => one manufacturer_model_name: Sc,
        v3 "softwareName" => one software_name: Sc,
        v3 "asMaintainedEntity" => many as_maintained_entities: MaintainedEntity,
    ],
});

element_schema!(MaintainedEntity {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "effectiveTime" => one effective_time: IvlTs,
        v3 "maintainingPerson" => one maintaining_person: Person,
    ],
});

element_schema!(DataEnterer {
    attributes: [
        "nullFlavor" => text null_flavor,
        "typeCode" => text type_code,
        "contextControlCode" => text context_control_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "time" => one time: Ts,
        v3 "assignedEntity" => one assigned_entity: AssignedEntity,
    ],
});

element_schema!(AssignedEntity {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "id" => many ids: Ii,
        sdtc "identifiedBy" => many identified_by: IdentifiedBy,
        v3 "code" => one code: Ce,
        v3 "addr" => many addrs: Ad,
        v3 "telecom" => many telecoms: Tel,
        v3 "assignedPerson" => one assigned_person: Person,
        v3 "representedOrganization" => one represented_organization: Organization,
        sdtc "patient" => one patient: AssignedEntityPatient,
    ],
});

element_schema!(AssignedEntityPatient {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
    ],
    children: [
        sdtc "id" => one id: Ii,
        v3 "id" => one id: Ii,
    ],
});

element_schema!(Informant {
    attributes: [
        "nullFlavor" => text null_flavor,
        "typeCode" => text type_code,
        "contextControlCode" => text context_control_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "assignedEntity" => one assigned_entity: AssignedEntity,
        v3 "relatedEntity" => one related_entity: RelatedEntity,
    ],
});

element_schema!(RelatedEntity {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "code" => one code: Ce,
        v3 "addr" => many addrs: Ad,
        v3 "telecom" => many telecoms: Tel,
        v3 "effectiveTime" => one effective_time: IvlTs,
        v3 "relatedPerson" => one related_person: Person,
    ],
});

element_schema!(Custodian {
    attributes: [
        "nullFlavor" => text null_flavor,
        "typeCode" => text type_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "assignedCustodian" => one assigned_custodian: AssignedCustodian,
    ],
});

element_schema!(AssignedCustodian {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "representedCustodianOrganization" =>
            one represented_custodian_organization: CustodianOrganization,
    ],
});

element_schema!(CustodianOrganization {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
        "determinerCode" => text determiner_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "id" => many ids: Ii,
        v3 "name" => one name: On,
        v3 "telecom" => many telecoms: Tel,
        sdtc "telecom" => many telecoms: Tel,
        v3 "addr" => one addr: Ad,
    ],
});

element_schema!(InformationRecipient {
    attributes: [
        "nullFlavor" => text null_flavor,
        "typeCode" => text type_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "intendedRecipient" => one intended_recipient: IntendedRecipient,
    ],
});

element_schema!(IntendedRecipient {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "id" => many ids: Ii,
        sdtc "identifiedBy" => many identified_by: IdentifiedBy,
        v3 "addr" => many addrs: Ad,
        v3 "telecom" => many telecoms: Tel,
        v3 "informationRecipient" => one information_recipient: Person,
        v3 "receivedOrganization" => one received_organization: Organization,
    ],
});

element_schema!(LegalAuthenticator {
    attributes: [
        "nullFlavor" => text null_flavor,
        "typeCode" => text type_code,
        "contextControlCode" => text context_control_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "time" => one time: Ts,
        v3 "signatureCode" => one signature_code: Cs,
        sdtc "signatureText" => one signature_text: Ed,
        v3 "assignedEntity" => one assigned_entity: AssignedEntity,
    ],
});

element_schema!(Participant1 {
    attributes: [
        "nullFlavor" => text null_flavor,
        "typeCode" => text type_code,
        "contextControlCode" => text context_control_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "functionCode" => one function_code: Ce,
        v3 "time" => one time: IvlTs,
        v3 "associatedEntity" => one associated_entity: AssociatedEntity,
    ],
});

element_schema!(AssociatedEntity {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "id" => many ids: Ii,
        sdtc "identifiedBy" => many identified_by: IdentifiedBy,
        v3 "code" => one code: Ce,
        v3 "addr" => many addrs: Ad,
        v3 "telecom" => many telecoms: Tel,
        v3 "associatedPerson" => one associated_person: Person,
        v3 "scopingOrganization" => one scoping_organization: Organization,
    ],
});

element_schema!(InFulfillmentOf {
    attributes: [
        "nullFlavor" => text null_flavor,
        "typeCode" => text type_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "order" => one order: Order,
    ],
});

element_schema!(Order {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
        "moodCode" => text mood_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "id" => many ids: Ii,
        v3 "code" => one code: Ce,
        v3 "priorityCode" => one priority_code: Ce,
    ],
});

element_schema!(DocumentationOf {
    attributes: [
        "nullFlavor" => text null_flavor,
        "typeCode" => text type_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "serviceEvent" => one service_event: ServiceEvent,
    ],
});

element_schema!(ServiceEvent {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
        "moodCode" => text mood_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "id" => many ids: Ii,
        v3 "code" => one code: Ce,
        v3 "effectiveTime" => one effective_time: IvlTs,
        v3 "performer" => many performers: Performer1,
    ],
});

element_schema!(Performer1 {
    attributes: [
        "nullFlavor" => text null_flavor,
        "typeCode" => text type_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "functionCode" => one function_code: Ce,
        v3 "time" => one time: IvlTs,
        v3 "assignedEntity" => one assigned_entity: AssignedEntity,
    ],
});

element_schema!(RelatedDocument {
    attributes: [
        "nullFlavor" => text null_flavor,
        "typeCode" => text type_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "parentDocument" => one parent_document: ParentDocument,
    ],
});

element_schema!(ParentDocument {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
        "moodCode" => text mood_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "id" => many ids: Ii,
        v3 "code" => one code: Cd,
        v3 "text" => one text: Ed,
        v3 "setId" => one set_id: Ii,
        v3 "versionNumber" => one version_number: Int,
    ],
});

element_schema!(Authorization {
    attributes: [
        "nullFlavor" => text null_flavor,
        "typeCode" => text type_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "consent" => one consent: Consent,
    ],
});

element_schema!(Consent {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
        "moodCode" => text mood_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "id" => many ids: Ii,
        v3 "code" => one code: Ce,
        v3 "statusCode" => one status_code: Cs,
    ],
});

element_schema!(ComponentOf {
    attributes: [
        "nullFlavor" => text null_flavor,
        "typeCode" => text type_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "encompassingEncounter" => one encompassing_encounter: EncompassingEncounter,
    ],
});

element_schema!(EncompassingEncounter {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
        "moodCode" => text mood_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "id" => many ids: Ii,
        v3 "code" => one code: Ce,
        v3 "effectiveTime" => one effective_time: IvlTs,
        sdtc "admissionReferralSourceCode" => one admission_referral_source_code: Ce,
        v3 "dischargeDispositionCode" => one discharge_disposition_code: Ce,
        v3 "responsibleParty" => one responsible_party: ResponsibleParty,
        v3 "encounterParticipant" => many encounter_participants: EncounterParticipant,
        v3 "location" => one location: Location,
    ],
});

element_schema!(ResponsibleParty {
    attributes: [
        "nullFlavor" => text null_flavor,
        "typeCode" => text type_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "assignedEntity" => one assigned_entity: AssignedEntity,
    ],
});

element_schema!(EncounterParticipant {
    attributes: [
        "nullFlavor" => text null_flavor,
        "typeCode" => text type_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "time" => one time: IvlTs,
        v3 "assignedEntity" => one assigned_entity: AssignedEntity,
    ],
});

element_schema!(Location {
    attributes: [
        "nullFlavor" => text null_flavor,
        "typeCode" => text type_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "healthCareFacility" => one health_care_facility: HealthCareFacility,
    ],
});

element_schema!(HealthCareFacility {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "id" => many ids: Ii,
        sdtc "identifiedBy" => many identified_by: IdentifiedBy,
        v3 "code" => one code: Ce,
        v3 "location" => one location: Place,
        v3 "serviceProviderOrganization" => one service_provider_organization: Organization,
    ],
});

#[cfg(test)]
mod tests {
    use crate::config::NumericPolicy;
    use crate::registry::{Decode, DecodeContext};
    use crate::types::{
        AssignedEntity, CustodianOrganization, Organization, Patient, PatientRole, Person,
    };
    use pretty_assertions::assert_eq;
    use roxmltree::Document;

    fn decode<T: Decode>(xml: &str) -> Option<T> {
        let doc = Document::parse(xml).unwrap();
        T::decode(doc.root_element(), &mut DecodeContext::default()).unwrap()
    }

    macro_rules! assert_bare_none {
        ($($ty:ident),* $(,)?) => {
            $(
                assert!(
                    decode::<crate::types::$ty>(r#"<x xmlns="urn:hl7-org:v3"/>"#).is_none(),
                    "bare element decoded to Some for {}",
                    stringify!($ty)
                );
                assert!(
                    decode::<crate::types::$ty>(r#"<x xmlns="urn:hl7-org:v3">
                    </x>"#)
                    .is_none(),
                    "whitespace-only element decoded to Some for {}",
                    stringify!($ty)
                );
            )*
        };
    }

    #[test]
    fn test_bare_entities_decode_to_none() {
        assert_bare_none!(
            RecordTarget, PatientRole, Patient, Guardian, Person, PatientRelationship,
            Organization, OrganizationPartOf, Birthplace, Place, LanguageCommunication,
            IdentifiedBy, AlternateIdentification, Author, AssignedAuthor, AuthoringDevice,
            MaintainedEntity, DataEnterer, AssignedEntity, AssignedEntityPatient, Informant,
            RelatedEntity, Custodian, AssignedCustodian, CustodianOrganization,
            InformationRecipient, IntendedRecipient, LegalAuthenticator, Authenticator,
            Participant1, AssociatedEntity, InFulfillmentOf, Order, DocumentationOf,
            ServiceEvent, Performer1, RelatedDocument, ParentDocument, Authorization, Consent,
            ComponentOf, EncompassingEncounter, ResponsibleParty, EncounterParticipant,
            Location, HealthCareFacility,
        );
    }

    #[test]
    fn test_patient_sdtc_extensions() {
        let patient: Patient = decode(
            r#"<patient xmlns="urn:hl7-org:v3" xmlns:sdtc="urn:hl7-org:sdtc">
                <name use="L"><given>Alice</given><family>Newman</family></name>
                <administrativeGenderCode code="F" codeSystem="2.16.840.1.113883.5.1"/>
                <birthTime value="19700501"/>
                <sdtc:deceasedInd value="false"/>
                <sdtc:multipleBirthOrderNumber value="2"/>
                <raceCode code="2106-3" codeSystem="2.16.840.1.113883.6.238"/>
                <sdtc:raceCode code="2108-9" codeSystem="2.16.840.1.113883.6.238"/>
                <ethnicGroupCode code="2186-5"/>
                <languageCommunication>
                    <languageCode code="en"/>
                    <preferenceInd value="true"/>
                </languageCommunication>
            </patient>"#,
        )
        .unwrap();

        assert_eq!(patient.names.len(), 1);
        assert_eq!(patient.deceased_ind.unwrap().value, Some(false));
        assert_eq!(patient.multiple_birth_order_number.unwrap().value, Some(2));
        let races: Vec<_> = patient
            .race_codes
            .iter()
            .filter_map(|c| c.code.as_deref())
            .collect();
        assert_eq!(races, vec!["2106-3", "2108-9"]);
        assert_eq!(patient.ethnic_group_codes.len(), 1);
        let language = &patient.language_communications[0];
        assert_eq!(
            language.language_code.as_ref().unwrap().code.as_deref(),
            Some("en")
        );
        assert_eq!(language.preference_ind.as_ref().unwrap().value, Some(true));
    }

    #[test]
    fn test_unqualified_sdtc_name_is_not_an_extension() {
        let patient: Option<Patient> = decode(
            r#"<patient xmlns="urn:hl7-org:v3"><deceasedInd value="true"/></patient>"#,
        );
        assert!(patient.is_none());
    }

    #[test]
    fn test_person_patient_relationship() {
        let person: Person = decode(
            r#"<guardianPerson xmlns="urn:hl7-org:v3" xmlns:sdtc="urn:hl7-org:sdtc">
                <name><given>Ralph</given><family>Newman</family></name>
                <sdtc:asPatientRelationship>
                    <sdtc:code code="FTH" codeSystem="2.16.840.1.113883.5.111"/>
                </sdtc:asPatientRelationship>
            </guardianPerson>"#,
        )
        .unwrap();
        assert_eq!(person.as_patient_relationships.len(), 1);
        assert_eq!(
            person.as_patient_relationships[0]
                .code
                .as_ref()
                .unwrap()
                .code
                .as_deref(),
            Some("FTH")
        );
    }

    #[test]
    fn test_identified_by_alternate_identification() {
        let role: PatientRole = decode(
            r#"<patientRole xmlns="urn:hl7-org:v3" xmlns:sdtc="urn:hl7-org:sdtc">
                <id root="2.16.840.1.113883.19.5" extension="998991"/>
                <sdtc:identifiedBy typeCode="IDENT">
                    <sdtc:alternateIdentification classCode="IDENT">
                        <sdtc:id root="2.16.840.1.113883.4.1" extension="111-00-2330"/>
                    </sdtc:alternateIdentification>
                </sdtc:identifiedBy>
            </patientRole>"#,
        )
        .unwrap();
        let alternate = role.identified_by[0].alternate_identification.as_ref().unwrap();
        assert_eq!(
            alternate.id.as_ref().unwrap().extension.as_deref(),
            Some("111-00-2330")
        );
    }

    #[test]
    fn test_custodian_telecoms_from_both_namespaces() {
        let org: CustodianOrganization = decode(
            r#"<representedCustodianOrganization xmlns="urn:hl7-org:v3" xmlns:sdtc="urn:hl7-org:sdtc">
                <id root="2.16.840.1.113883.19.5"/>
                <name>Good Health Clinic</name>
                <telecom value="tel:+1(555)555-1002"/>
                <sdtc:telecom value="mailto:records@example.org"/>
            </representedCustodianOrganization>"#,
        )
        .unwrap();
        assert_eq!(org.name.unwrap().text.as_deref(), Some("Good Health Clinic"));
        let values: Vec<_> = org.telecoms.iter().filter_map(|t| t.value.as_deref()).collect();
        assert_eq!(
            values,
            vec!["tel:+1(555)555-1002", "mailto:records@example.org"]
        );
    }

    #[test]
    fn test_organization_part_of_nests() {
        let org: Organization = decode(
            r#"<providerOrganization xmlns="urn:hl7-org:v3">
                <name>Cardiology</name>
                <asOrganizationPartOf>
                    <wholeOrganization><name>General Hospital</name></wholeOrganization>
                </asOrganizationPartOf>
            </providerOrganization>"#,
        )
        .unwrap();
        let whole = org
            .as_organization_part_of
            .unwrap()
            .whole_organization
            .unwrap();
        assert_eq!(whole.names[0].text.as_deref(), Some("General Hospital"));
    }

    #[test]
    fn test_assigned_entity_sdtc_patient() {
        let entity: AssignedEntity = decode(
            r#"<assignedEntity xmlns="urn:hl7-org:v3" xmlns:sdtc="urn:hl7-org:sdtc">
                <sdtc:patient><sdtc:id root="1.2.3" extension="42"/></sdtc:patient>
            </assignedEntity>"#,
        )
        .unwrap();
        assert_eq!(
            entity.patient.unwrap().id.unwrap().extension.as_deref(),
            Some("42")
        );
    }

    #[test]
    fn test_strict_policy_propagates_from_nested_entity() {
        let xml = r#"<patient xmlns="urn:hl7-org:v3" xmlns:sdtc="urn:hl7-org:sdtc">
            <sdtc:multipleBirthOrderNumber value="second"/>
        </patient>"#;
        let doc = Document::parse(xml).unwrap();
        let mut ctx = DecodeContext::new(NumericPolicy::Strict);
        assert!(Patient::decode(doc.root_element(), &mut ctx).is_err());
    }
}
