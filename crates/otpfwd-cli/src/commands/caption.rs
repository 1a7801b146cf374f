//! Caption command implementation.

use crate::cli::TextArgs;
use crate::commands::read_text;
use crate::error::Result;
use crate::output::Formatter;
use otpfwd_gatekeeper::CaptionSanitizer;

/// Execute the caption command.
pub fn execute_caption(args: TextArgs, formatter: &Formatter) -> Result<()> {
    let text = read_text(&args)?;
    let cleaned = CaptionSanitizer::new().clean(&text);
    println!("{}", formatter.format_caption(cleaned.as_deref())?);
    Ok(())
}
