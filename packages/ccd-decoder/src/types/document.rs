//! The root clinical document record.

use serde::Serialize;

use super::datatypes::{Cd, Ce, Cs, Ii, Int, St, Ts};
use super::entities::{
    Authenticator, Author, Authorization, ComponentOf, Custodian, DataEnterer, DocumentationOf,
    InFulfillmentOf, InformationRecipient, Informant, LegalAuthenticator, Participant1,
    RecordTarget, RelatedDocument,
};

/// A decoded CDA document header.
///
/// The structured body is not decoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalDocument {
    pub null_flavor: Option<String>,
    pub class_code: Option<String>,
    pub mood_code: Option<String>,
    pub realm_codes: Vec<Cs>,
    pub type_id: Option<Ii>,
    pub template_ids: Vec<Ii>,
    pub id: Option<Ii>,
    /// `sdtc:category`
    pub categories: Vec<Cd>,
    pub code: Option<Ce>,
    pub title: Option<St>,
    /// `sdtc:statusCode`
    pub status_code: Option<Cs>,
    pub effective_time: Option<Ts>,
    pub confidentiality_code: Option<Ce>,
    pub language_code: Option<Cs>,
    pub set_id: Option<Ii>,
    pub version_number: Option<Int>,
    pub copy_time: Option<Ts>,
    pub record_targets: Vec<RecordTarget>,
    pub authors: Vec<Author>,
    pub data_enterer: Option<DataEnterer>,
    pub informants: Vec<Informant>,
    pub custodian: Option<Custodian>,
    pub information_recipients: Vec<InformationRecipient>,
    pub legal_authenticator: Option<LegalAuthenticator>,
    pub authenticators: Vec<Authenticator>,
    pub participants: Vec<Participant1>,
    pub in_fulfillment_of: Vec<InFulfillmentOf>,
    pub documentation_of: Vec<DocumentationOf>,
    pub related_documents: Vec<RelatedDocument>,
    pub authorizations: Vec<Authorization>,
    pub component_of: Option<ComponentOf>,
}
