//! Origin-country resolution

use otpfwd_domain::{title_case, CountryDirectory, CountryInfo, DEFAULT_COUNTRY_NAME, DEFAULT_DIAL_CODE};
use regex::Captures;
use tracing::debug;

use crate::rules::{Rule, RuleSet};

/// Directory handle as seen by the resolution stages
type Directory = dyn CountryDirectory;

/// Shortest and longest subscriber part following the dial code
const SUBSCRIBER_DIGITS: std::ops::RangeInclusive<usize> = 7..=15;

/// Longest dial code tried, in digits
const MAX_DIAL_CODE_DIGITS: usize = 4;

/// Resolves the origin country of a message against a [`CountryDirectory`]
///
/// Stages run in order and the first one that produces a country wins:
///
/// 1. `full`: country name followed by a flag (`Country: Sudan 🇸🇩`)
/// 2. `label`: `Country: <name>`
/// 3. `flag`: any flag glyph pair
/// 4. `dial-code`: an international number `+<code><subscriber>`
///
/// A country found by flag or name without a dial code has it filled in
/// from a name lookup. Nothing found means `Unknown` / `🌍` / `Unknown`.
#[derive(Debug)]
pub struct CountryResolver {
    stages: RuleSet<Directory, CountryInfo>,
}

impl CountryResolver {
    /// Create a resolver with the standard stages
    pub fn new() -> Self {
        let stages = RuleSet::new(vec![
            Rule::new(
                "full",
                r"(?:Country:\s*)?([A-Za-z\s]+)\s*([\x{1F1E6}-\x{1F1FF}]{2,})",
                name_and_flag,
            ),
            Rule::new("label", r"(?i)Country:\s*([A-Za-z\s]+)", labeled_name),
            Rule::new("flag", r"([\x{1F1E6}-\x{1F1FF}]{2,})", flag_only),
            Rule::new("dial-code", r"\+([0-9]{8,19})", dial_code),
        ]);
        Self { stages }
    }

    /// Resolve the country of `text`
    pub fn resolve<D>(&self, text: &str, directory: &D) -> CountryInfo
    where
        D: CountryDirectory + 'static,
    {
        self.resolve_with_stage(text, directory).0
    }

    /// Resolve the country of `text`, also reporting which stage decided it
    pub fn resolve_with_stage<D>(&self, text: &str, directory: &D) -> (CountryInfo, Option<&'static str>)
    where
        D: CountryDirectory + 'static,
    {
        let directory: &Directory = directory;
        let Some(found) = self.stages.first_match(text, directory) else {
            return (CountryInfo::unknown(), None);
        };

        let mut info = found.value;
        if info.is_resolved() && !info.has_dial_code() {
            if let Some(known) = directory.by_name(&info.name).filter(CountryInfo::has_dial_code) {
                debug!("Backfilled dial code {} for {}", known.dial_code, info.name);
                info.dial_code = known.dial_code;
            }
        }
        (info, Some(found.id))
    }
}

impl Default for CountryResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse whitespace runs (including newlines) into single spaces
fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Look up a run of regional indicators: the whole run first, then each pair
fn lookup_flag_run(directory: &Directory, run: &str) -> Option<CountryInfo> {
    directory.by_flag(run).or_else(|| {
        let glyphs: Vec<char> = run.chars().collect();
        if glyphs.len() <= 2 {
            return None;
        }
        glyphs
            .chunks_exact(2)
            .find_map(|pair| directory.by_flag(&pair.iter().collect::<String>()))
    })
}

fn name_and_flag(caps: &Captures<'_>, directory: &Directory) -> Option<CountryInfo> {
    let name = normalize_name(caps.get(1)?.as_str());
    let flag = caps.get(2)?.as_str();

    if let Some(info) = directory.by_name(&name) {
        return Some(info);
    }
    if let Some(info) = lookup_flag_run(directory, flag) {
        return Some(info);
    }
    let name = if name.is_empty() {
        DEFAULT_COUNTRY_NAME.to_string()
    } else {
        title_case(&name)
    };
    Some(CountryInfo {
        name,
        flag: flag.to_string(),
        dial_code: DEFAULT_DIAL_CODE.to_string(),
    })
}

fn labeled_name(caps: &Captures<'_>, directory: &Directory) -> Option<CountryInfo> {
    directory.by_name(&normalize_name(caps.get(1)?.as_str()))
}

fn flag_only(caps: &Captures<'_>, directory: &Directory) -> Option<CountryInfo> {
    lookup_flag_run(directory, caps.get(1)?.as_str())
}

fn dial_code(caps: &Captures<'_>, directory: &Directory) -> Option<CountryInfo> {
    let digits = caps.get(1)?.as_str();
    let longest = MAX_DIAL_CODE_DIGITS.min(digits.len().saturating_sub(*SUBSCRIBER_DIGITS.start()));

    (1..=longest)
        .rev()
        .filter(|prefix_len| SUBSCRIBER_DIGITS.contains(&(digits.len() - prefix_len)))
        .find_map(|prefix_len| directory.by_dial_code(&format!("+{}", &digits[..prefix_len])))
}
