//! YAML writer for decoded documents.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_yaml_ng::{Mapping, Value};

use crate::error::Result;

/// Drop nulls and empty collections, bottom-up.
fn prune(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Sequence(items) => {
            let items: Vec<Value> = items.into_iter().filter_map(prune).collect();
            (!items.is_empty()).then_some(Value::Sequence(items))
        }
        Value::Mapping(mapping) => {
            let mapping: Mapping = mapping
                .into_iter()
                .filter_map(|(key, value)| prune(value).map(|value| (key, value)))
                .collect();
            (!mapping.is_empty()).then_some(Value::Mapping(mapping))
        }
        other => Some(other),
    }
}

/// Render any serializable value as a YAML document without absent fields.
pub fn generate_yaml<T: Serialize>(value: &T) -> Result<String> {
    let value = prune(serde_yaml_ng::to_value(value)?).unwrap_or(Value::Mapping(Mapping::new()));
    let yaml_string = serde_yaml_ng::to_string(&value)?;

    let lines: Vec<&str> = yaml_string.lines().map(str::trim_end).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

/// Save a value as `<stem>.yaml` in `output_dir`.
///
/// Writes to a temp file, syncs, then renames, so a crash never leaves a
/// partial file behind.
pub fn save_yaml<T: Serialize>(value: &T, stem: &str, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let output_file = output_dir.join(format!("{stem}.yaml"));
    let temp_file = output_dir.join(format!(".{stem}.yaml.tmp"));

    let content = generate_yaml(value)?;

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(&output_file)?;
    }

    fs::rename(&temp_file, &output_file)?;

    tracing::debug!(path = %output_file.display(), "Wrote YAML");
    Ok(output_file)
}
