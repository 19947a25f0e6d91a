//! GitHub Actions host: `INPUT_*` variables, `$GITHUB_OUTPUT`, workflow commands.

use std::fs::OpenOptions;
use std::io::{Stdout, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::io::host::{InputSource, LogLevel, LogSink, OutputSink};

const OUTPUT_FILE_VAR: &str = "GITHUB_OUTPUT";

/// Host adapter for a GitHub Actions runner.
///
/// Inputs are read from the process environment at lookup time. Outputs go to
/// the file named by `GITHUB_OUTPUT` when set, otherwise to the legacy
/// `::set-output` command on `out`. Log lines are written to `out`.
pub struct GithubHost<W: Write = Stdout> {
    output_file: Option<PathBuf>,
    out: W,
}

impl GithubHost<Stdout> {
    pub fn from_env() -> Self {
        let output_file = std::env::var_os(OUTPUT_FILE_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        debug!(output_file = ?output_file, "github host initialized");
        Self::with_writer(output_file, std::io::stdout())
    }
}

impl<W: Write> GithubHost<W> {
    pub fn with_writer(output_file: Option<PathBuf>, out: W) -> Self {
        Self { output_file, out }
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Register `value` as a secret so the runner redacts it from logs.
    pub fn mask(&mut self, value: &str) {
        if value.is_empty() {
            return;
        }
        self.command("add-mask", &[], value);
    }

    fn command(&mut self, name: &str, properties: &[(&str, &str)], message: &str) {
        let line = format_command(name, properties, message);
        let _ = writeln!(self.out, "{line}");
    }
}

impl<W: Write> InputSource for GithubHost<W> {
    /// Non-UTF-8 values are kept, with invalid bytes replaced by U+FFFD.
    fn input(&self, name: &str) -> Option<String> {
        std::env::var_os(input_env_name(name))
            .map(|value| value.to_string_lossy().trim().to_string())
    }
}

impl<W: Write> OutputSink for GithubHost<W> {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        debug!(name, "setting output");
        match &self.output_file {
            Some(path) => append_output_file(path, name, value),
            None => {
                writeln!(self.out).context("write output command")?;
                writeln!(
                    self.out,
                    "{}",
                    format_command("set-output", &[("name", name)], value)
                )
                .context("write output command")?;
                Ok(())
            }
        }
    }
}

impl<W: Write> LogSink for GithubHost<W> {
    fn log(&mut self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => {
                let _ = writeln!(self.out, "{message}");
            }
            LogLevel::Warning => self.command("warning", &[], message),
            LogLevel::Error => self.command("error", &[], message),
        }
    }
}

fn append_output_file(path: &Path, name: &str, value: &str) -> Result<()> {
    let delimiter = format!("ghadelimiter_{:032x}", rand::random::<u128>());
    if name.contains(&delimiter) || value.contains(&delimiter) {
        bail!("output {name} contains the generated delimiter {delimiter}");
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))?;
    write!(file, "{name}<<{delimiter}\n{value}\n{delimiter}\n")
        .with_context(|| format!("write output {name} to {}", path.display()))
}

/// Environment variable carrying the input `name` (`INPUT_` + upper-cased
/// name with spaces replaced by underscores).
pub fn input_env_name(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Render a `::name key=value,...::message` workflow command.
pub fn format_command(name: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("::{name}");
    if !properties.is_empty() {
        let rendered: Vec<String> = properties
            .iter()
            .map(|(key, value)| format!("{key}={}", escape_property(value)))
            .collect();
        line.push(' ');
        line.push_str(&rendered.join(","));
    }
    line.push_str("::");
    line.push_str(&escape_data(message));
    line
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
