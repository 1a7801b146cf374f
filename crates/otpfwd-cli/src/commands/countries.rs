//! Countries command implementation.

use crate::config::OutputFormat;
use crate::context::AppContext;
use crate::error::Result;
use crate::output::Formatter;
use otpfwd_store::LoadOutcome;

/// Execute the countries command.
pub fn execute_countries(ctx: &AppContext, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_countries(ctx.table())?);

    if formatter.format() == OutputFormat::Table {
        let path = ctx.table_path().display();
        let note = match ctx.table_outcome() {
            LoadOutcome::Loaded => formatter.info(&format!("Loaded from {}", path)),
            LoadOutcome::Created => formatter.success(&format!("Created {} with built-in countries", path)),
            LoadOutcome::Fallback => {
                formatter.warning(&format!("{} could not be parsed; showing built-in countries", path))
            }
        };
        println!("{}", note);
    }
    Ok(())
}
