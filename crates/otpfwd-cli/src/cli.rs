//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// otpfwd - Classify and reformat OTP messages.
#[derive(Debug, Parser)]
#[command(name = "otpfwd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "OTPFWD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Country table file (overrides the configured path)
    #[arg(long, global = true, env = "OTPFWD_COUNTRIES")]
    pub countries: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (codes only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify one message
    Classify(TextArgs),

    /// Classify a batch of messages separated by a delimiter line
    Scan(ScanArgs),

    /// List the country table
    Countries,

    /// Strip links and mentions from a file caption
    Caption(TextArgs),

    /// Render the forward message for one OTP message
    Render(TextArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Message text given inline or on stdin.
#[derive(Debug, Parser)]
pub struct TextArgs {
    /// Message text (joined with spaces)
    pub text: Vec<String>,

    /// Read the message from stdin
    #[arg(long, conflicts_with = "text")]
    pub stdin: bool,
}

/// Arguments for the scan command.
#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// File containing the messages (stdin if omitted)
    #[arg(short = 'i', long)]
    pub file: Option<PathBuf>,

    /// Line separating two messages
    #[arg(short, long, default_value = "---")]
    pub delimiter: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
