//! otpfwd Storage Layer
//!
//! Implements the `CountryDirectory` trait over a JSON-backed country table.
//!
//! # Architecture
//!
//! - One JSON object on disk: lowercase country key → `{ flag, dial_code, name? }`
//! - Loaded once at startup into an immutable [`CountryTable`]
//! - Flag and dial-code reverse indexes derived after load
//! - A missing file is synthesized from the built-in defaults and written back
//!
//! # Examples
//!
//! ```no_run
//! use otpfwd_store::CountryTable;
//! use otpfwd_domain::CountryDirectory;
//!
//! let table = CountryTable::load_or_init("country_flags.json").unwrap();
//! let sudan = table.by_flag("🇸🇩");
//! ```

#![warn(missing_docs)]

mod defaults;
mod table;

pub use defaults::default_records;
pub use table::{CountryFileEntry, CountryTable, LoadOutcome};

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the table file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The table could not be (de)serialized
    #[error("Invalid table data: {0}")]
    InvalidData(#[from] serde_json::Error),
}
