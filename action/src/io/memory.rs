//! In-memory host used for local inputs files and tests.

use std::collections::BTreeMap;

use anyhow::Result;

use crate::io::host::{InputSource, LogLevel, LogSink, OutputSink};

/// Host backed by plain maps.
///
/// Inputs are looked up verbatim (no trimming). Outputs and log lines are
/// recorded in the order they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHost {
    inputs: BTreeMap<String, String>,
    outputs: Vec<(String, String)>,
    lines: Vec<(LogLevel, String)>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a raw input value.
    pub fn with_input(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_input(name, value);
        self
    }

    pub fn set_input(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inputs.insert(name.into(), value.into());
    }

    /// Outputs in write order.
    pub fn outputs(&self) -> &[(String, String)] {
        &self.outputs
    }

    /// Most recent value written for `name`.
    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn lines(&self) -> &[(LogLevel, String)] {
        &self.lines
    }
}

impl InputSource for MemoryHost {
    fn input(&self, name: &str) -> Option<String> {
        self.inputs.get(name).cloned()
    }
}

impl OutputSink for MemoryHost {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        self.outputs.push((name.to_string(), value.to_string()));
        Ok(())
    }
}

impl LogSink for MemoryHost {
    fn log(&mut self, level: LogLevel, message: &str) {
        self.lines.push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_output_wins_on_lookup() {
        let mut host = MemoryHost::new();
        host.set_output("file_list", "[]").expect("set");
        host.set_output("file_list", r#"["a"]"#).expect("set");
        assert_eq!(host.output("file_list"), Some(r#"["a"]"#));
        assert_eq!(host.outputs().len(), 2);
    }

    #[test]
    fn inputs_are_not_trimmed() {
        let host = MemoryHost::new().with_input("include", " a ");
        assert_eq!(host.input("include").as_deref(), Some(" a "));
        assert_eq!(host.input("exclude"), None);
    }
}
