//! otpfwd CLI library.
//!
//! Configuration, command execution, forward-message rendering and output
//! formatting for the `otpfwd` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod forward;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use context::AppContext;
pub use error::{CliError, Result};
pub use output::Formatter;
