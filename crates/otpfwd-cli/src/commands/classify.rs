//! Classify command implementation.

use crate::cli::TextArgs;
use crate::commands::read_text;
use crate::context::AppContext;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the classify command.
pub fn execute_classify(args: TextArgs, ctx: &AppContext, formatter: &Formatter) -> Result<()> {
    let text = read_text(&args)?;
    let classification = ctx.pipeline().classify(&text);

    let output = formatter.format_classification(&classification)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
