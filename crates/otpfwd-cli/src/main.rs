//! otpfwd CLI - classify OTP messages and render forward messages.

use clap::Parser;
use otpfwd_cli::commands;
use otpfwd_cli::repl;
use otpfwd_cli::{AppContext, Cli, Command, Config, Formatter};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> otpfwd_cli::Result<()> {
    // An explicit config file must load; the default one falls back to defaults
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            warn!("Ignoring unreadable configuration: {}", e);
            Config::default()
        }),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    // Caption cleaning needs no country data, everything else does
    let build_context = || AppContext::build(&config, cli.countries.as_deref());

    match cli.command.unwrap_or(Command::Repl) {
        Command::Caption(args) => commands::execute_caption(args, &formatter),
        Command::Repl => repl::run_repl(&build_context()?, &formatter),
        Command::Classify(args) => commands::execute_classify(args, &build_context()?, &formatter),
        Command::Scan(args) => commands::execute_scan(args, &build_context()?, &formatter).await,
        Command::Countries => commands::execute_countries(&build_context()?, &formatter),
        Command::Render(args) => commands::execute_render(args, &build_context()?, &formatter),
    }
}
