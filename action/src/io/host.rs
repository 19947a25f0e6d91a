//! Capabilities the step needs from its host automation environment.
//!
//! Resolution and reporting take these as trait objects so that a CI runner,
//! a local inputs file, or an in-memory fake can stand behind them.

use anyhow::Result;

/// Error raised by an [`InputSource`] for a required input it does not have.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Input required and not supplied: {name}")]
    MissingRequired { name: String },
}

/// String-keyed lookup of raw step inputs.
pub trait InputSource {
    /// Raw value of `name`, or `None` when the host does not define it.
    fn input(&self, name: &str) -> Option<String>;

    /// Value of `name`, or an empty string when absent.
    fn optional(&self, name: &str) -> String {
        self.input(name).unwrap_or_default()
    }

    /// Value of `name`, failing when absent.
    ///
    /// Only presence is checked: a defined but empty value is returned as is.
    fn required(&self, name: &str) -> Result<String, InputError> {
        self.input(name).ok_or_else(|| InputError::MissingRequired {
            name: name.to_string(),
        })
    }
}

/// String-keyed write of step outputs.
pub trait OutputSink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;
}

/// Severity of a host log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

/// Line-oriented host log stream. Writing a line never fails the step.
pub trait LogSink {
    fn log(&mut self, level: LogLevel, message: &str);
}
