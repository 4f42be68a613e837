//! Schemas for the leaf datatypes.

use crate::types::{
    Ad, Adxp, Bl, Cd, Ce, Cr, Cs, Cv, Ed, En, Enxp, Ii, Int, IvlPq, IvlTs, IvxbPq, IvxbTs, On,
    Pq, Pqr, Sc, St, Tel, Ts,
};

element_schema!(Bl {
    attributes: [
        "nullFlavor" => text null_flavor,
        "value" => flag value,
    ],
    children: [],
});

element_schema!(Int {
    attributes: [
        "nullFlavor" => text null_flavor,
        "value" => integer value,
    ],
    children: [],
});

element_schema!(Pq {
    attributes: [
        "nullFlavor" => text null_flavor,
        "unit" => text unit,
        "value" => decimal value,
    ],
    children: [
        v3 "translation" => many translations: Pqr,
    ],
});

element_schema!(Pqr {
    attributes: [
        "nullFlavor" => text null_flavor,
        "code" => text code,
        "codeSystem" => text code_system,
        "codeSystemName" => text code_system_name,
        "codeSystemVersion" => text code_system_version,
        "displayName" => text display_name,
        @sdtc "valueSet" => text value_set,
        @sdtc "valueSetVersion" => text value_set_version,
        "value" => decimal value,
    ],
    children: [
        v3 "originalText" => one original_text: Ed,
    ],
});

element_schema!(IvxbPq {
    attributes: [
        "nullFlavor" => text null_flavor,
        "unit" => text unit,
        "value" => decimal value,
        "inclusive" => flag inclusive,
    ],
    children: [
        v3 "translation" => many translations: Pqr,
    ],
});

element_schema!(IvlPq {
    attributes: [
        "nullFlavor" => text null_flavor,
        "unit" => text unit,
        "value" => decimal value,
        "operator" => text operator,
    ],
    children: [
        v3 "translation" => many translations: Pqr,
        v3 "low" => one low: IvxbPq,
        v3 "center" => one center: Pq,
        v3 "width" => one width: Pq,
        v3 "high" => one high: IvxbPq,
    ],
});

element_schema!(St {
    attributes: [
        "nullFlavor" => text null_flavor,
        "representation" => text representation,
        "mediaType" => text media_type,
        "language" => text language,
    ],
    children: [],
    text: text,
});

element_schema!(Sc {
    attributes: [
        "nullFlavor" => text null_flavor,
        "representation" => text representation,
        "mediaType" => text media_type,
        "language" => text language,
        "code" => text code,
        "codeSystem" => text code_system,
        "codeSystemName" => text code_system_name,
        "codeSystemVersion" => text code_system_version,
        "displayName" => text display_name,
    ],
    children: [],
    text: text,
});

element_schema!(Cs {
    attributes: [
        "nullFlavor" => text null_flavor,
        "code" => text code,
        "codeSystem" => text code_system,
        "codeSystemName" => text code_system_name,
        "codeSystemVersion" => text code_system_version,
        "displayName" => text display_name,
    ],
    children: [],
});

element_schema!(Cv {
    attributes: [
        "nullFlavor" => text null_flavor,
        "code" => text code,
        "codeSystem" => text code_system,
        "codeSystemName" => text code_system_name,
        "codeSystemVersion" => text code_system_version,
        "displayName" => text display_name,
        @sdtc "valueSet" => text value_set,
        @sdtc "valueSetVersion" => text value_set_version,
    ],
    children: [
        v3 "originalText" => one original_text: Ed,
    ],
});

element_schema!(Ce {
    attributes: [
        "nullFlavor" => text null_flavor,
        "code" => text code,
        "codeSystem" => text code_system,
        "codeSystemName" => text code_system_name,
        "codeSystemVersion" => text code_system_version,
        "displayName" => text display_name,
        @sdtc "valueSet" => text value_set,
        @sdtc "valueSetVersion" => text value_set_version,
    ],
    children: [
        v3 "originalText" => one original_text: Ed,
        v3 "translation" => many translations: Cd,
    ],
});

element_schema!(Cd {
    attributes: [
        "nullFlavor" => text null_flavor,
        "code" => text code,
        "codeSystem" => text code_system,
        "codeSystemName" => text code_system_name,
        "codeSystemVersion" => text code_system_version,
        "displayName" => text display_name,
        @sdtc "valueSet" => text value_set,
        @sdtc "valueSetVersion" => text value_set_version,
    ],
    children: [
        v3 "originalText" => one original_text: Ed,
        v3 "qualifier" => many qualifiers: Cr,
        v3 "translation" => many translations: Cd,
    ],
});

element_schema!(Cr {
    attributes: [
        "nullFlavor" => text null_flavor,
        "inverted" => flag inverted,
    ],
    children: [
        v3 "name" => one name: Cv,
        v3 "value" => one value: Cd,
    ],
});

element_schema!(Ed {
    attributes: [
        "nullFlavor" => text null_flavor,
        "compression" => text compression,
        "integrityCheck" => text integrity_check,
        "integrityCheckAlgorithm" => text integrity_check_algorithm,
        "language" => text language,
        "mediaType" => text media_type,
        "representation" => text representation,
    ],
    children: [
        v3 "reference" => one reference: Tel,
        v3 "thumbnail" => boxed thumbnail: Ed,
    ],
    text: text,
});

element_schema!(Ii {
    attributes: [
        "nullFlavor" => text null_flavor,
        "assigningAuthorityName" => text assigning_authority_name,
        "displayable" => flag displayable,
        "root" => text root,
        "extension" => text extension,
    ],
    children: [],
});

element_schema!(Tel {
    attributes: [
        "nullFlavor" => text null_flavor,
        "value" => text value,
        "use" => tokens uses,
    ],
    children: [
        v3 "useablePeriod" => timing useable_periods,
    ],
});

element_schema!(Ts {
    attributes: [
        "nullFlavor" => text null_flavor,
        "value" => text value,
    ],
    children: [],
});

element_schema!(IvxbTs {
    attributes: [
        "nullFlavor" => text null_flavor,
        "value" => text value,
        "inclusive" => flag inclusive,
    ],
    children: [],
});

element_schema!(Adxp {
    attributes: [
        "nullFlavor" => text null_flavor,
        "representation" => text representation,
        "mediaType" => text media_type,
        "language" => text language,
        "partType" => text part_type,
    ],
    children: [],
    text: text,
});

element_schema!(Ad {
    attributes: [
        "nullFlavor" => text null_flavor,
        "isNotOrdered" => flag is_not_ordered,
        "use" => tokens uses,
    ],
    children: [
        v3 "delimiter" => one delimiter: Adxp,
        v3 "country" => one country: Adxp,
        v3 "state" => one state: Adxp,
        v3 "county" => one county: Adxp,
        v3 "city" => one city: Adxp,
        v3 "postalCode" => one postal_code: Adxp,
        v3 "streetAddressLine" => many street_address_lines: Adxp,
        v3 "houseNumber" => one house_number: Adxp,
        v3 "houseNumberNumeric" => one house_number_numeric: Adxp,
        v3 "direction" => one direction: Adxp,
        v3 "streetName" => one street_name: Adxp,
        v3 "streetNameBase" => one street_name_base: Adxp,
        v3 "streetNameType" => one street_name_type: Adxp,
        v3 "additionalLocator" => one additional_locator: Adxp,
        v3 "unitID" => one unit_id: Adxp,
        v3 "unitType" => one unit_type: Adxp,
        v3 "careOf" => one care_of: Adxp,
        v3 "censusTract" => one census_tract: Adxp,
        v3 "deliveryAddressLine" => one delivery_address_line: Adxp,
        v3 "deliveryInstallationType" => one delivery_installation_type: Adxp,
        v3 "deliveryInstallationArea" => one delivery_installation_area: Adxp,
        v3 "deliveryInstallationQualifier" => one delivery_installation_qualifier: Adxp,
        v3 "deliveryMode" => one delivery_mode: Adxp,
        v3 "deliveryModeIdentifier" => one delivery_mode_identifier: Adxp,
        v3 "buildingNumberSuffix" => one building_number_suffix: Adxp,
        v3 "postBox" => one post_box: Adxp,
        v3 "precinct" => one precinct: Adxp,
        v3 "useablePeriod" => timing useable_periods,
    ],
    text: text,
});

element_schema!(Enxp {
    attributes: [
        "nullFlavor" => text null_flavor,
        "representation" => text representation,
        "mediaType" => text media_type,
        "language" => text language,
        "partType" => text part_type,
        "qualifier" => tokens qualifier,
    ],
    children: [],
    text: text,
});

element_schema!(En {
    attributes: [
        "nullFlavor" => text null_flavor,
        "use" => tokens uses,
    ],
    children: [
        v3 "delimiter" => many delimiter: Enxp,
        v3 "family" => many family: Enxp,
        v3 "given" => many given: Enxp,
        v3 "prefix" => many prefix: Enxp,
        v3 "suffix" => many suffix: Enxp,
        v3 "validTime" => one valid_time: IvlTs,
    ],
    text: text,
});

element_schema!(On {
    attributes: [
        "nullFlavor" => text null_flavor,
        "use" => tokens uses,
    ],
    children: [
        v3 "delimiter" => many delimiter: Enxp,
        v3 "prefix" => many prefix: Enxp,
        v3 "suffix" => many suffix: Enxp,
        v3 "validTime" => one valid_time: IvlTs,
    ],
    text: text,
});
