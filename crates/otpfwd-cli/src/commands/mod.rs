//! Command implementations.

pub mod caption;
pub mod classify;
pub mod countries;
pub mod render;
pub mod scan;

pub use self::caption::execute_caption;
pub use self::classify::execute_classify;
pub use self::countries::execute_countries;
pub use self::render::execute_render;
pub use self::scan::execute_scan;

use crate::cli::TextArgs;
use crate::error::{CliError, Result};
use std::io::{self, Read};

/// Message text from the arguments or stdin.
pub(crate) fn read_text(args: &TextArgs) -> Result<String> {
    let text = if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        args.text.join(" ")
    };

    if text.trim().is_empty() {
        return Err(CliError::InvalidInput(
            "Provide message text or use --stdin".to_string(),
        ));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_text_joins_words() {
        let args = TextArgs {
            text: vec!["OTP:".to_string(), "123456".to_string()],
            stdin: false,
        };
        assert_eq!(read_text(&args).unwrap(), "OTP: 123456");
    }

    #[test]
    fn test_read_text_requires_input() {
        let args = TextArgs {
            text: vec![],
            stdin: false,
        };
        assert!(matches!(read_text(&args), Err(CliError::InvalidInput(_))));
    }
}
