//! Projection of an [`OperationResult`] into host output pairs.

use serde_json::Value;

use crate::core::types::OperationResult;

pub const FILES_PROCESSED: &str = "files_processed";
pub const BYTES_TRANSFERRED: &str = "bytes_transferred";
pub const OPERATION_TIME: &str = "operation_time";
pub const SUCCESS_COUNT: &str = "success_count";
pub const ERROR_COUNT: &str = "error_count";
pub const FILE_LIST: &str = "file_list";
pub const UPLOAD_URLS: &str = "upload_urls";
pub const FIRST_UPLOAD_URL: &str = "first_upload_url";

/// Build the ordered `(name, value)` output pairs for a result.
///
/// `first_upload_url` is always present; it is empty when there are no
/// upload URLs, and `upload_urls` is then `[]`.
pub fn project_outputs(result: &OperationResult) -> Vec<(&'static str, String)> {
    let mut outputs = vec![
        (FILES_PROCESSED, result.files_processed.to_string()),
        (BYTES_TRANSFERRED, result.bytes_transferred.to_string()),
        (OPERATION_TIME, format_number(result.operation_time)),
        (SUCCESS_COUNT, result.success_count.to_string()),
        (ERROR_COUNT, result.error_count.to_string()),
        (FILE_LIST, json_array(&result.file_list)),
    ];

    match result.upload_urls.as_deref() {
        Some(urls) if !urls.is_empty() => {
            outputs.push((UPLOAD_URLS, json_array(urls)));
            outputs.push((FIRST_UPLOAD_URL, urls[0].clone()));
        }
        _ => {
            outputs.push((UPLOAD_URLS, json_array(&[])));
            outputs.push((FIRST_UPLOAD_URL, String::new()));
        }
    }
    outputs
}

/// Decimal text for a number, switching to exponent form outside
/// `[1e-6, 1e21)` (`1e+21`, `1.5e-7`) the way JavaScript prints numbers.
fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Compact JSON array of strings, e.g. `["a","b"]`.
fn json_array(items: &[String]) -> String {
    Value::Array(items.iter().cloned().map(Value::String).collect()).to_string()
}
