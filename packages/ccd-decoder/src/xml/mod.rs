//! XML helpers shared by the gate and the dispatch engine.

mod utils;

pub use utils::{
    classify_child, describe, element_children, get_namespace, get_tag_name, has_attributes,
    split_tokens, ChildKind,
};
