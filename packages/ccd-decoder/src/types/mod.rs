//! Decoded object graph.
//!
//! Plain data records with public fields. Values are built fresh for each
//! decode and carry no reference back into the XML tree.

mod datatypes;
mod document;
mod entities;
mod timing;

pub use datatypes::{
    Ad, Adxp, Bl, Cd, Ce, Cr, Cs, Cv, Ed, En, Enxp, Ii, Int, IvlPq, IvxbPq, IvxbTs, On, Pn, Pq,
    Pqr, Sc, St, Tel, Ts,
};
pub use document::ClinicalDocument;
pub use entities::{
    AlternateIdentification, AssignedAuthor, AssignedCustodian, AssignedEntity,
    AssignedEntityPatient, AssociatedEntity, Authenticator, Author, AuthoringDevice,
    Authorization, Birthplace, ComponentOf, Consent, Custodian, CustodianOrganization,
    DataEnterer, DocumentationOf, EncompassingEncounter, EncounterParticipant, Guardian,
    HealthCareFacility, IdentifiedBy, InFulfillmentOf, InformationRecipient, Informant,
    IntendedRecipient, LanguageCommunication, LegalAuthenticator, Location, MaintainedEntity,
    Order, Organization, OrganizationPartOf, ParentDocument, Participant1, Patient,
    PatientRelationship, PatientRole, Performer1, Person, Place, RecordTarget, RelatedDocument,
    RelatedEntity, ResponsibleParty, ServiceEvent,
};
pub use timing::{EivlTs, IvlTs, PivlTs, SxcmTs, SxprTs, TimingMember, TimingValue};
