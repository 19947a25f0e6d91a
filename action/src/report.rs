//! Publishing results back to the host: outputs and marker-prefixed log lines.

use anyhow::Result;
use tracing::debug;

use crate::core::outputs::project_outputs;
use crate::core::types::OperationResult;
use crate::io::host::{LogLevel, LogSink, OutputSink};

pub const PROGRESS_MARKER: &str = "🔄";
pub const SUCCESS_MARKER: &str = "✅";
pub const ERROR_MARKER: &str = "❌";
pub const WARNING_MARKER: &str = "⚠️";

/// Write every projected output of `result` to the host.
///
/// Only a failing sink can make this return an error.
pub fn set_outputs(sink: &mut dyn OutputSink, result: &OperationResult) -> Result<()> {
    let outputs = project_outputs(result);
    debug!(count = outputs.len(), "writing outputs");
    for (name, value) in &outputs {
        sink.set_output(name, value)?;
    }
    Ok(())
}

/// Info line with the progress marker, emitted only when `enabled`.
pub fn log_progress(sink: &mut dyn LogSink, message: &str, enabled: bool) {
    if enabled {
        sink.log(LogLevel::Info, &format!("{PROGRESS_MARKER} {message}"));
    }
}

pub fn log_success(sink: &mut dyn LogSink, message: &str) {
    sink.log(LogLevel::Info, &format!("{SUCCESS_MARKER} {message}"));
}

pub fn log_error(sink: &mut dyn LogSink, message: &str) {
    sink.log(LogLevel::Error, &format!("{ERROR_MARKER} {message}"));
}

pub fn log_warning(sink: &mut dyn LogSink, message: &str) {
    sink.log(LogLevel::Warning, &format!("{WARNING_MARKER} {message}"));
}

/// One-line human summary of a finished operation.
pub fn summarize(result: &OperationResult) -> String {
    format!(
        "Processed {} file(s), {} byte(s) in {}s ({} succeeded, {} failed)",
        result.files_processed,
        result.bytes_transferred,
        result.operation_time,
        result.success_count,
        result.error_count
    )
}
