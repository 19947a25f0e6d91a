//! Resolution of raw host inputs into [`ActionInputs`].

use tracing::debug;

use crate::core::parse::{parse_bool, parse_int, parse_string_list};
use crate::core::types::{ActionInputs, DEFAULT_REGION, Operation, StorageClass};
use crate::io::host::{InputError, InputSource};

/// Build the step configuration from `source`.
///
/// `access_key`, `secret_key`, `region` and `bucket` are looked up with
/// [`InputSource::required`] and the first absent one aborts resolution.
/// Every other input falls back to its default when missing or malformed.
pub fn resolve_inputs(source: &dyn InputSource) -> Result<ActionInputs, InputError> {
    let access_key = source.required("access_key")?;
    let secret_key = source.required("secret_key")?;
    let region = non_empty(source.required("region")?).unwrap_or_else(|| DEFAULT_REGION.into());
    let bucket_name = source.required("bucket")?;

    let operation = non_empty(source.optional("operation"))
        .map(|raw| Operation::from(raw.as_str()))
        .unwrap_or_default();
    let storage_class = non_empty(source.optional("storage_class"))
        .map(|raw| StorageClass::from(raw.as_str()))
        .unwrap_or_default();

    let inputs = ActionInputs {
        access_key,
        secret_key,
        region,
        bucket_name,
        operation,
        local_path: non_empty(source.optional("local_path")),
        obs_path: non_empty(source.optional("obs_path")),
        include: parse_string_list(&source.optional("include")),
        exclude: parse_string_list(&source.optional("exclude")),
        preserve_structure: parse_bool(&source.optional("preserve_structure"), true),
        concurrency: parse_int(&source.optional("concurrency"), 10),
        retry_count: parse_int(&source.optional("retry_count"), 3),
        dry_run: parse_bool(&source.optional("dry_run"), false),
        progress: parse_bool(&source.optional("progress"), true),
        checksum_validation: parse_bool(&source.optional("checksum_validation"), false),
        storage_class,
        public_read: parse_bool(&source.optional("public_read"), false),
        timeout: parse_int(&source.optional("timeout"), 300),
    };
    debug!(
        region = %inputs.region,
        bucket = %inputs.bucket_name,
        operation = %inputs.operation,
        "inputs resolved"
    );
    Ok(inputs)
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::memory::MemoryHost;
    use crate::test_support::required_inputs;

    #[test]
    fn defaults_fill_every_optional_field() {
        let inputs = resolve_inputs(&required_inputs()).expect("resolve");
        assert_eq!(inputs.access_key, "AKID");
        assert_eq!(inputs.secret_key, "SECRET");
        assert_eq!(inputs.region, "eu-west-1");
        assert_eq!(inputs.bucket_name, "artifacts");
        assert_eq!(inputs.operation, Operation::Upload);
        assert_eq!(inputs.local_path, None);
        assert_eq!(inputs.obs_path, None);
        assert!(inputs.include.is_empty());
        assert!(inputs.exclude.is_empty());
        assert!(inputs.preserve_structure);
        assert_eq!(inputs.concurrency, 10);
        assert_eq!(inputs.retry_count, 3);
        assert!(!inputs.dry_run);
        assert!(inputs.progress);
        assert!(!inputs.checksum_validation);
        assert_eq!(inputs.storage_class, StorageClass::Standard);
        assert!(!inputs.public_read);
        assert_eq!(inputs.timeout, 300);
    }

    #[test]
    fn empty_region_uses_default() {
        let host = required_inputs().with_input("region", "");
        let inputs = resolve_inputs(&host).expect("resolve");
        assert_eq!(inputs.region, "cn-north-4");
    }

    #[test]
    fn missing_region_fails_before_building_record() {
        let host = MemoryHost::new()
            .with_input("access_key", "AKID")
            .with_input("secret_key", "SECRET")
            .with_input("bucket", "artifacts");
        let err = resolve_inputs(&host).expect_err("region missing");
        assert_eq!(
            err,
            InputError::MissingRequired {
                name: "region".to_string()
            }
        );
    }

    #[test]
    fn first_missing_required_input_is_reported() {
        let host = MemoryHost::new().with_input("bucket", "artifacts");
        let err = resolve_inputs(&host).expect_err("credentials missing");
        assert_eq!(err.to_string(), "Input required and not supplied: access_key");
    }

    #[test]
    fn empty_credentials_are_not_rejected_here() {
        let host = required_inputs()
            .with_input("access_key", "")
            .with_input("bucket", "");
        let inputs = resolve_inputs(&host).expect("resolve");
        assert_eq!(inputs.access_key, "");
        assert_eq!(inputs.bucket_name, "");
    }

    #[test]
    fn explicit_values_are_parsed() {
        let host = required_inputs()
            .with_input("operation", "download")
            .with_input("local_path", "./dist")
            .with_input("obs_path", "releases/v1/")
            .with_input("include", "*.tar.gz, *.sha256")
            .with_input("exclude", " tmp/** ")
            .with_input("preserve_structure", "false")
            .with_input("concurrency", "4")
            .with_input("retry_count", "0")
            .with_input("dry_run", "1")
            .with_input("progress", "FALSE")
            .with_input("checksum_validation", "true")
            .with_input("storage_class", "WARM")
            .with_input("public_read", "True")
            .with_input("timeout", "60");
        let inputs = resolve_inputs(&host).expect("resolve");
        assert_eq!(inputs.operation, Operation::Download);
        assert_eq!(inputs.local_path.as_deref(), Some("./dist"));
        assert_eq!(inputs.obs_path.as_deref(), Some("releases/v1/"));
        assert_eq!(inputs.include, vec!["*.tar.gz", "*.sha256"]);
        assert_eq!(inputs.exclude, vec!["tmp/**"]);
        assert!(!inputs.preserve_structure);
        assert_eq!(inputs.concurrency, 4);
        assert_eq!(inputs.retry_count, 0);
        assert!(inputs.dry_run);
        assert!(!inputs.progress);
        assert!(inputs.checksum_validation);
        assert_eq!(inputs.storage_class, StorageClass::Warm);
        assert!(inputs.public_read);
        assert_eq!(inputs.timeout, 60);
    }

    #[test]
    fn malformed_values_degrade_to_defaults() {
        let host = required_inputs()
            .with_input("preserve_structure", "sometimes")
            .with_input("concurrency", "lots")
            .with_input("timeout", "")
            .with_input("dry_run", "yes")
            .with_input("local_path", "");
        let inputs = resolve_inputs(&host).expect("resolve");
        assert!(inputs.preserve_structure);
        assert_eq!(inputs.concurrency, 10);
        assert_eq!(inputs.timeout, 300);
        assert!(!inputs.dry_run);
        assert_eq!(inputs.local_path, None);
    }

    #[test]
    fn unrecognized_enum_values_flow_through() {
        let host = required_inputs()
            .with_input("operation", "sync")
            .with_input("storage_class", "glacier");
        let inputs = resolve_inputs(&host).expect("resolve");
        assert_eq!(inputs.operation.as_str(), "sync");
        assert!(!inputs.operation.is_recognized());
        assert_eq!(inputs.storage_class.as_str(), "glacier");
    }

    #[test]
    fn debug_output_hides_credentials() {
        let inputs = resolve_inputs(&required_inputs()).expect("resolve");
        let rendered = format!("{inputs:?}");
        assert!(!rendered.contains("AKID"));
        assert!(!rendered.contains("SECRET"));
        let json = serde_json::to_string(&inputs).expect("serialize");
        assert!(!json.contains("AKID"));
        assert!(json.contains("\"bucket_name\":\"artifacts\""));
    }
}
