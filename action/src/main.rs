//! Object storage transfer step for CI pipelines.
//!
//! `resolve` turns the step's inputs into the transfer configuration, and
//! `report` publishes a finished transfer's result as step outputs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use obs_action::core::parse::parse_bool;
use obs_action::core::types::{ActionInputs, OperationResult};
use obs_action::exit_codes;
use obs_action::inputs::resolve_inputs;
use obs_action::io::github::GithubHost;
use obs_action::io::host::InputSource;
use obs_action::io::inputs_file::load_inputs_file;
use obs_action::logging;
use obs_action::report::{log_error, log_progress, log_success, log_warning, set_outputs, summarize};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "obs-action",
    version,
    about = "Object storage transfer step for CI pipelines"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve step inputs and print the configuration as JSON (credentials omitted).
    Resolve {
        /// Read inputs from a TOML file instead of `INPUT_*` variables.
        #[arg(long)]
        inputs: Option<PathBuf>,
    },
    /// Publish a transfer result as step outputs.
    Report {
        /// Result JSON document written by the transfer engine (`-` for stdin).
        #[arg(long)]
        result: PathBuf,
        /// Read inputs from a TOML file instead of `INPUT_*` variables.
        #[arg(long)]
        inputs: Option<PathBuf>,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let mut host = GithubHost::from_env();
    let code = match run(cli, &mut host) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            log_error(&mut host, &format!("{err:#}"));
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli, host: &mut GithubHost) -> Result<()> {
    match cli.command {
        Command::Resolve { inputs } => cmd_resolve(host, inputs.as_deref()),
        Command::Report { result, inputs } => cmd_report(host, &result, inputs.as_deref()),
    }
}

fn cmd_resolve(host: &mut GithubHost, inputs_file: Option<&Path>) -> Result<()> {
    let inputs = resolve(host, inputs_file)?;
    host.mask(&inputs.access_key);
    host.mask(&inputs.secret_key);
    log_progress(
        host,
        &format!(
            "Resolved {} on bucket {} ({})",
            inputs.operation, inputs.bucket_name, inputs.region
        ),
        inputs.progress,
    );
    let payload = serde_json::to_string_pretty(&inputs).context("serialize inputs")?;
    println!("{payload}");
    Ok(())
}

fn cmd_report(host: &mut GithubHost, result_path: &Path, inputs_file: Option<&Path>) -> Result<()> {
    let raw = read_result(result_path)?;
    let result: OperationResult = serde_json::from_str(&raw)
        .with_context(|| format!("parse operation result {}", result_path.display()))?;
    debug!(files = result.files_processed, "result loaded");

    let progress = match inputs_file {
        Some(path) => progress_enabled(&load_inputs_file(path)?),
        None => progress_enabled(&*host),
    };
    log_progress(host, "Publishing operation outputs", progress);
    set_outputs(host, &result)?;
    if result.error_count > 0 {
        log_warning(
            host,
            &format!("{} file(s) failed to transfer", result.error_count),
        );
    }
    log_success(host, &summarize(&result));
    Ok(())
}

fn resolve(host: &GithubHost, inputs_file: Option<&Path>) -> Result<ActionInputs> {
    let inputs = match inputs_file {
        Some(path) => resolve_inputs(&load_inputs_file(path)?)?,
        None => resolve_inputs(host)?,
    };
    Ok(inputs)
}

fn progress_enabled(source: &dyn InputSource) -> bool {
    parse_bool(&source.optional("progress"), true)
}

fn read_result(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return std::io::read_to_string(std::io::stdin()).context("read result from stdin");
    }
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}
