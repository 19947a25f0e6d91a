//! Step inputs loaded from a TOML file, for running outside a CI runner.
//!
//! ```toml
//! access_key = "AK"
//! secret_key = "SK"
//! bucket = "artifacts"
//! include = ["*.tar.gz", "*.sha256"]
//! concurrency = 4
//! dry_run = true
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use toml::{Table, Value};
use tracing::debug;

use crate::io::memory::MemoryHost;

/// Load an inputs file into an in-memory host.
///
/// Values are turned into the text a CI runner would have supplied: scalars
/// are formatted, and arrays of strings are joined with `,`.
pub fn load_inputs_file(path: &Path) -> Result<MemoryHost> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let host = parse_inputs(&contents).with_context(|| format!("parse {}", path.display()))?;
    debug!(path = %path.display(), "inputs file loaded");
    Ok(host)
}

fn parse_inputs(contents: &str) -> Result<MemoryHost> {
    let table: Table = toml::from_str(contents).context("parse inputs toml")?;
    let mut host = MemoryHost::new();
    for (name, value) in &table {
        host.set_input(name.as_str(), input_text(name, value)?);
    }
    Ok(host)
}

fn input_text(name: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Integer(number) => Ok(number.to_string()),
        Value::Float(number) => Ok(number.to_string()),
        Value::Boolean(flag) => Ok(flag.to_string()),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(text) => parts.push(text.as_str()),
                    _ => bail!("input {name}: array entries must be strings"),
                }
            }
            Ok(parts.join(","))
        }
        _ => bail!("input {name}: unsupported value type {}", value.type_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::host::InputSource;

    #[test]
    fn scalars_and_lists_become_text() {
        let host = parse_inputs(
            r#"
            bucket = "artifacts"
            concurrency = 4
            dry_run = true
            include = ["a", "b c"]
            "#,
        )
        .expect("parse");
        assert_eq!(host.input("bucket").as_deref(), Some("artifacts"));
        assert_eq!(host.input("concurrency").as_deref(), Some("4"));
        assert_eq!(host.input("dry_run").as_deref(), Some("true"));
        assert_eq!(host.input("include").as_deref(), Some("a,b c"));
        assert_eq!(host.input("region"), None);
    }

    #[test]
    fn nested_tables_are_rejected() {
        let err = parse_inputs("[bucket]\nname = \"x\"\n").expect_err("table input");
        assert!(format!("{err:#}").contains("unsupported value type"));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("inputs.toml");
        fs::write(&path, "region = \"\"\n").expect("write inputs");
        let host = load_inputs_file(&path).expect("load");
        assert_eq!(host.input("region").as_deref(), Some(""));
    }

    #[test]
    fn load_missing_file_fails_with_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("missing.toml");
        let err = load_inputs_file(&path).expect_err("missing file");
        assert!(format!("{err:#}").contains("missing.toml"));
    }
}
