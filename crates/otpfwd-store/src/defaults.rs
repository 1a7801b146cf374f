//! Built-in country set used when no table file exists

use otpfwd_domain::CountryRecord;

/// The minimal default table: key, flag, dial code
const DEFAULT_COUNTRIES: &[(&str, &str, &str)] = &[
    ("sudan", "🇸🇩", "+249"),
    ("venezuela", "🇻🇪", "+58"),
    ("nepal", "🇳🇵", "+977"),
    ("madagascar", "🇲🇬", "+261"),
    ("bangladesh", "🇧🇩", "+880"),
    ("india", "🇮🇳", "+91"),
    ("pakistan", "🇵🇰", "+92"),
    ("united states", "🇺🇸", "+1"),
    ("uk", "🇬🇧", "+44"),
];

/// Records of the built-in default table
pub fn default_records() -> Vec<CountryRecord> {
    DEFAULT_COUNTRIES
        .iter()
        .map(|(key, flag, dial_code)| CountryRecord::new(*key, *flag, *dial_code))
        .collect()
}
