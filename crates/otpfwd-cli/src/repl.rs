//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::TextArgs;
use crate::commands;
use crate::config::Config;
use crate::context::AppContext;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub fn run_repl(ctx: &AppContext, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("otpfwd REPL - Paste a message, or type 'help' for commands"));
    println!();

    // Initialize readline editor
    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e)))
    })?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("otpfwd> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, ctx, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Exit,
    Help,
    Classify(String),
    Render(String),
    Caption(String),
    Countries,
}

/// Parse a REPL command line; anything that is not a command is classified.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let require_text = |usage: &str| {
        if rest.is_empty() {
            Err(CliError::InvalidInput(format!("Usage: {}", usage)))
        } else {
            Ok(rest.to_string())
        }
    };

    match word {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "countries" => Ok(ReplCommand::Countries),
        "classify" => require_text("classify <message>").map(ReplCommand::Classify),
        "render" => require_text("render <message>").map(ReplCommand::Render),
        "caption" => require_text("caption <text>").map(ReplCommand::Caption),
        _ => Ok(ReplCommand::Classify(line.to_string())),
    }
}

/// Execute a REPL command.
fn execute_repl_command(cmd: ReplCommand, ctx: &AppContext, formatter: &Formatter) -> Result<()> {
    let text_args = |text: String| TextArgs {
        text: vec![text],
        stdin: false,
    };

    match cmd {
        ReplCommand::Classify(text) => commands::execute_classify(text_args(text), ctx, formatter),
        ReplCommand::Render(text) => commands::execute_render(text_args(text), ctx, formatter),
        ReplCommand::Caption(text) => commands::execute_caption(text_args(text), formatter),
        ReplCommand::Countries => commands::execute_countries(ctx, formatter),
        ReplCommand::Exit | ReplCommand::Help => Ok(()),
    }
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <message>                      - Classify a pasted message");
    println!("  classify <message>             - Classify a message");
    println!("  render <message>               - Show the forward message");
    println!("  caption <text>                 - Clean a file caption");
    println!("  countries                      - List the country table");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}
