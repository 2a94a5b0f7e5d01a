//! Command-line interface definitions for the `kaptcha` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;

/// Command-line interface for the `kaptcha` binary.
#[derive(Parser, Debug)]
#[command(
    name = "kaptcha",
    about = "Render captcha images and check kaptcha configurations",
    version
)]
pub struct Cli {
    /// Logging controls shared across kaptcha binaries.
    #[command(flatten)]
    pub log: LogArgs,

    /// What to do.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one captcha to a JPEG file and print its answer.
    Render(RenderArgs),
    /// Resolve every setting and report the first invalid value.
    Check(CheckArgs),
}

/// Configuration sources shared by all commands.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Properties file with `key=value` entries.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override a single entry; may be repeated. Applied after `--config`.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_override)]
    pub overrides: Vec<(String, String)>,
}

/// Arguments for the `render` subcommand.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Configuration sources.
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output path for the JPEG image.
    #[arg(long, short, value_name = "PATH", default_value = "captcha.jpg")]
    pub out: PathBuf,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Configuration sources.
    #[command(flatten)]
    pub source: SourceArgs,

    /// Dump the resolved settings as JSON to stdout.
    #[arg(long)]
    pub json: bool,
}

/// Parse a `KEY=VALUE` override. The value may be empty.
fn parse_override(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, found '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
