//! Schema for the root `ClinicalDocument` element.

use crate::types::{
    Authenticator, Author, Authorization, Cd, Ce, ClinicalDocument, ComponentOf, Cs, Custodian,
    DataEnterer, DocumentationOf, Ii, InFulfillmentOf, InformationRecipient, Informant, Int,
    LegalAuthenticator, Participant1, RecordTarget, RelatedDocument, St, Ts,
};

element_schema!(ClinicalDocument {
    attributes: [
        "nullFlavor" => text null_flavor,
        "classCode" => text class_code,
        "moodCode" => text mood_code,
    ],
    children: [
        v3 "realmCode" => many realm_codes: Cs,
        v3 "typeId" => one type_id: Ii,
        v3 "templateId" => many template_ids: Ii,
        v3 "id" => one id: Ii,
        sdtc "category" => many categories: Cd,
        v3 "code" => one code: Ce,
        v3 "title" => one title: St,
        sdtc "statusCode" => one status_code: Cs,
        v3 "effectiveTime" => one effective_time: Ts,
        v3 "confidentialityCode" => one confidentiality_code: Ce,
        v3 "languageCode" => one language_code: Cs,
        v3 "setId" => one set_id: Ii,
        v3 "versionNumber" => one version_number: Int,
        v3 "copyTime" => one copy_time: Ts,
        v3 "recordTarget" => many record_targets: RecordTarget,
        v3 "author" => many authors: Author,
        v3 "dataEnterer" => one data_enterer: DataEnterer,
        v3 "informant" => many informants: Informant,
        v3 "custodian" => one custodian: Custodian,
        v3 "informationRecipient" => many information_recipients: InformationRecipient,
        v3 "legalAuthenticator" => one legal_authenticator: LegalAuthenticator,
        v3 "authenticator" => many authenticators: Authenticator,
        v3 "participant" => many participants: Participant1,
        v3 "inFulfillmentOf" => many in_fulfillment_of: InFulfillmentOf,
        v3 "documentationOf" => many documentation_of: DocumentationOf,
        v3 "relatedDocument" => many related_documents: RelatedDocument,
        v3 "authorization" => many authorizations: Authorization,
        v3 "componentOf" => one component_of: ComponentOf,
    ],
});

#[cfg(test)]
mod tests {
    use crate::config::{HL7_NAMESPACE, SDTC_NAMESPACE};
    use crate::registry::{Decode, DecodeContext, ElementSchema};
    use crate::types::ClinicalDocument;
    use roxmltree::Document;

    #[test]
    fn test_body_is_not_dispatched() {
        let table = ClinicalDocument::children();
        assert!(!table.has_handler(HL7_NAMESPACE, "component"));
        assert!(table.has_handler(HL7_NAMESPACE, "componentOf"));
        assert!(table.has_handler(SDTC_NAMESPACE, "statusCode"));
        assert!(!table.has_handler(HL7_NAMESPACE, "statusCode"));
    }

    #[test]
    fn test_bare_document_is_none() {
        for xml in [
            r#"<ClinicalDocument xmlns="urn:hl7-org:v3"/>"#,
            r#"<ClinicalDocument xmlns="urn:hl7-org:v3">
                <component><structuredBody/></component>
                <title/>
            </ClinicalDocument>"#,
        ] {
            let doc = Document::parse(xml).unwrap();
            let decoded =
                ClinicalDocument::decode(doc.root_element(), &mut DecodeContext::default())
                    .unwrap();
            assert!(decoded.is_none());
        }
    }

    #[test]
    fn test_header_fields() {
        let xml = r#"<ClinicalDocument xmlns="urn:hl7-org:v3" xmlns:sdtc="urn:hl7-org:sdtc">
            <realmCode code="US"/>
            <typeId root="2.16.840.1.113883.1.3" extension="POCD_HD000040"/>
            <templateId root="2.16.840.1.113883.10.20.22.1.1"/>
            <templateId root="2.16.840.1.113883.10.20.22.1.2"/>
            <id root="2.16.840.1.113883.19.5.99999.1" extension="TT988"/>
            <sdtc:category code="11369-6"/>
            <code code="34133-9" displayName="Summarization of Episode Note"/>
            <title>Community Health and Hospitals: Health Summary</title>
            <sdtc:statusCode code="completed"/>
            <effectiveTime value="20240615103000-0500"/>
            <versionNumber value="3"/>
            <component><structuredBody/></component>
        </ClinicalDocument>"#;
        let doc = Document::parse(xml).unwrap();
        let cda = ClinicalDocument::decode(doc.root_element(), &mut DecodeContext::default())
            .unwrap()
            .unwrap();

        assert_eq!(cda.realm_codes[0].code.as_deref(), Some("US"));
        assert_eq!(cda.template_ids.len(), 2);
        assert_eq!(cda.id.unwrap().extension.as_deref(), Some("TT988"));
        assert_eq!(cda.categories.len(), 1);
        assert_eq!(
            cda.title.unwrap().text.as_deref(),
            Some("Community Health and Hospitals: Health Summary")
        );
        assert_eq!(cda.status_code.unwrap().code.as_deref(), Some("completed"));
        assert_eq!(cda.version_number.unwrap().value, Some(3));
    }
}
