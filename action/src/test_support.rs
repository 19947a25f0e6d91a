//! Test-only helpers for building hosts and results.

use crate::core::types::OperationResult;
use crate::io::memory::MemoryHost;

/// Host carrying only the four required inputs, with a non-default region.
pub fn required_inputs() -> MemoryHost {
    MemoryHost::new()
        .with_input("access_key", "AKID")
        .with_input("secret_key", "SECRET")
        .with_input("region", "eu-west-1")
        .with_input("bucket", "artifacts")
}

/// Deterministic two-file result with the given upload URLs.
///
/// An empty `urls` slice yields `upload_urls: Some(vec![])`.
pub fn sample_result(urls: &[&str]) -> OperationResult {
    OperationResult {
        files_processed: 2,
        bytes_transferred: 3072,
        operation_time: 1.25,
        success_count: 2,
        error_count: 0,
        file_list: vec!["dist/app.tar.gz".to_string(), "dist/app.sha256".to_string()],
        upload_urls: Some(urls.iter().map(|url| url.to_string()).collect()),
    }
}
