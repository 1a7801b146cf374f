//! Render command implementation.

use crate::cli::TextArgs;
use crate::commands::read_text;
use crate::context::AppContext;
use crate::error::Result;
use crate::forward;
use crate::output::Formatter;
use chrono::Local;

/// Execute the render command.
pub fn execute_render(args: TextArgs, ctx: &AppContext, formatter: &Formatter) -> Result<()> {
    let text = read_text(&args)?;
    let rendered = forward::render(ctx.pipeline().as_ref(), &text, &Local::now().naive_local());

    let output = formatter.format_rendered(&rendered)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
