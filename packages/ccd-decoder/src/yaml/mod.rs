//! YAML projection of decoded documents, used by the CLI.

mod writer;

pub use writer::{generate_yaml, save_yaml};
