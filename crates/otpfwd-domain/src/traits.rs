//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the matching logic and the
//! reference data it consults. Implementations live in other crates.

use crate::CountryInfo;

/// Read-only country lookups
///
/// Implemented by the storage layer (otpfwd-store). Every method returns
/// `None` on a miss; callers substitute [`CountryInfo::unknown`].
pub trait CountryDirectory {
    /// Case-insensitive match against each record's key or alternative name
    fn by_name(&self, name: &str) -> Option<CountryInfo>;

    /// Exact match against the flag index
    fn by_flag(&self, flag: &str) -> Option<CountryInfo>;

    /// Exact match against the dial-code index (`"+880"`)
    fn by_dial_code(&self, dial_code: &str) -> Option<CountryInfo>;
}

impl<T: CountryDirectory + ?Sized> CountryDirectory for &T {
    fn by_name(&self, name: &str) -> Option<CountryInfo> {
        (**self).by_name(name)
    }

    fn by_flag(&self, flag: &str) -> Option<CountryInfo> {
        (**self).by_flag(flag)
    }

    fn by_dial_code(&self, dial_code: &str) -> Option<CountryInfo> {
        (**self).by_dial_code(dial_code)
    }
}

impl<T: CountryDirectory + ?Sized> CountryDirectory for std::sync::Arc<T> {
    fn by_name(&self, name: &str) -> Option<CountryInfo> {
        (**self).by_name(name)
    }

    fn by_flag(&self, flag: &str) -> Option<CountryInfo> {
        (**self).by_flag(flag)
    }

    fn by_dial_code(&self, dial_code: &str) -> Option<CountryInfo> {
        (**self).by_dial_code(dial_code)
    }
}
