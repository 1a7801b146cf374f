//! Scan command implementation.

use crate::cli::ScanArgs;
use crate::context::AppContext;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use otpfwd_domain::{Classification, CountryDirectory};
use otpfwd_extractor::Pipeline;
use std::fs;
use std::io::{self, Read};
use std::sync::Arc;
use tracing::info;

/// Execute the scan command.
pub async fn execute_scan(args: ScanArgs, ctx: &AppContext, formatter: &Formatter) -> Result<()> {
    let input = match &args.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let messages = split_messages(&input, &args.delimiter)?;
    info!("Scanning {} message(s)", messages.len());

    let results = classify_all(ctx.pipeline(), messages).await?;
    println!("{}", formatter.format_scan(&results)?);
    Ok(())
}

/// Split `input` on lines equal to `delimiter`, dropping empty messages.
pub fn split_messages(input: &str, delimiter: &str) -> Result<Vec<String>> {
    let delimiter = delimiter.trim();
    if delimiter.is_empty() {
        return Err(CliError::InvalidInput("Delimiter cannot be empty".to_string()));
    }

    let mut messages = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in input.lines() {
        if line.trim() == delimiter {
            push_message(&mut messages, &current);
            current.clear();
        } else {
            current.push(line);
        }
    }
    push_message(&mut messages, &current);
    Ok(messages)
}

fn push_message(messages: &mut Vec<String>, lines: &[&str]) {
    let message = lines.join("\n");
    let message = message.trim();
    if !message.is_empty() {
        messages.push(message.to_string());
    }
}

/// Classify messages on the blocking pool, returning results in input order.
pub async fn classify_all<C>(pipeline: &Arc<Pipeline<C>>, messages: Vec<String>) -> Result<Vec<Classification>>
where
    C: CountryDirectory + Send + Sync + 'static,
{
    let handles: Vec<_> = messages
        .into_iter()
        .map(|message| {
            let pipeline = Arc::clone(pipeline);
            tokio::task::spawn_blocking(move || pipeline.classify(&message))
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await?);
    }
    Ok(results)
}
