//! Schemas for the timing datatypes.
//!
//! `SxprTs` members go back through the resolver, so composites nest.

use crate::types::{Ce, EivlTs, IvlPq, IvlTs, IvxbTs, PivlTs, Pq, Pqr, SxcmTs, SxprTs, Ts};

element_schema!(IvlTs {
    attributes: [
        "nullFlavor" => text null_flavor,
        "unit" => text unit,
        "value" => text value,
        "operator" => text operator,
    ],
    children: [
        v3 "translation" => many translations: Pqr,
        v3 "low" => one low: IvxbTs,
        v3 "center" => one center: Ts,
        v3 "width" => one width: Pq,
        v3 "high" => one high: IvxbTs,
    ],
});

element_schema!(PivlTs {
    attributes: [
        "nullFlavor" => text null_flavor,
        "operator" => text operator,
        "alignment" => text alignment,
        "institutionSpecified" => flag institution_specified,
    ],
    children: [
        v3 "phase" => one phase: IvlTs,
        v3 "period" => one period: Pq,
    ],
});

element_schema!(EivlTs {
    attributes: [
        "nullFlavor" => text null_flavor,
        "operator" => text operator,
        "value" => text value,
    ],
    children: [
        v3 "event" => one event: Ce,
        v3 "offset" => one offset: IvlPq,
    ],
});

element_schema!(SxprTs {
    attributes: [
        "nullFlavor" => text null_flavor,
        "value" => text value,
        "operator" => text operator,
    ],
    children: [
        v3 "comp" => member comp,
    ],
});

element_schema!(SxcmTs {
    attributes: [
        "nullFlavor" => text null_flavor,
        "value" => text value,
        "operator" => text operator,
    ],
    children: [],
});
