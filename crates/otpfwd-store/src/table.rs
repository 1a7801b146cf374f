//! JSON-backed country table with flag and dial-code reverse indexes

use crate::{default_records, StoreError};
use otpfwd_domain::{CountryDirectory, CountryInfo, CountryRecord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

/// On-disk shape of one country entry (the key is the JSON object key)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryFileEntry {
    /// Flag glyph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,

    /// Dial code including the `+`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dial_code: Option<String>,

    /// Alternative name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// How [`CountryTable::load_or_init_with_outcome`] obtained its table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Parsed from the existing file
    Loaded,
    /// File was missing; defaults were written to it
    Created,
    /// File could not be parsed; defaults are used in memory, file left untouched
    Fallback,
}

/// Immutable country reference data
///
/// Built once at startup and shared read-only for the life of the process.
/// `key` is unique; the flag and dial-code indexes keep the first key (in key
/// order) when two records share a value.
#[derive(Debug, Clone)]
pub struct CountryTable {
    records: BTreeMap<String, CountryRecord>,
    flag_index: HashMap<String, String>,
    dial_code_index: HashMap<String, String>,
}

impl CountryTable {
    /// Build a table from records, deriving both reverse indexes
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CountryRecord>,
    {
        let mut by_key = BTreeMap::new();
        for mut record in records {
            record.key = record.key.to_lowercase();
            if by_key.contains_key(&record.key) {
                warn!("Duplicate country key '{}' ignored", record.key);
                continue;
            }
            by_key.insert(record.key.clone(), record);
        }

        let mut flag_index = HashMap::new();
        let mut dial_code_index = HashMap::new();
        for (key, record) in &by_key {
            if let Some(flag) = record.flag.as_deref().filter(|f| !f.is_empty()) {
                insert_unique(&mut flag_index, flag, key, "flag");
            }
            if let Some(code) = record.dial_code.as_deref().filter(|c| !c.is_empty()) {
                insert_unique(&mut dial_code_index, code, key, "dial code");
            }
        }

        Self {
            records: by_key,
            flag_index,
            dial_code_index,
        }
    }

    /// The built-in default table
    pub fn builtin() -> Self {
        Self::from_records(default_records())
    }

    /// Parse a table from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let entries: BTreeMap<String, CountryFileEntry> = serde_json::from_str(json)?;
        Ok(Self::from_records(entries.into_iter().map(|(key, entry)| {
            CountryRecord {
                key,
                flag: entry.flag,
                dial_code: entry.dial_code,
                name: entry.name,
            }
        })))
    }

    /// Serialize to pretty-printed JSON (4-space indent, non-ASCII kept verbatim)
    pub fn to_json(&self) -> Result<String, StoreError> {
        let entries: BTreeMap<&str, CountryFileEntry> = self
            .records
            .iter()
            .map(|(key, record)| {
                (
                    key.as_str(),
                    CountryFileEntry {
                        flag: record.flag.clone(),
                        dial_code: record.dial_code.clone(),
                        name: record.name.clone(),
                    },
                )
            })
            .collect();

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        entries.serialize(&mut serializer)?;
        // serde_json only ever emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Load a table from a file, failing on any I/O or parse error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    /// Write the table to a file, creating parent directories as needed
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load the table, or synthesize and persist the defaults when the file is missing
    pub fn load_or_init<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Self::load_or_init_with_outcome(path).map(|(table, _)| table)
    }

    /// Like [`load_or_init`](Self::load_or_init), also reporting where the table came from
    ///
    /// An unparseable file is treated as absent: the defaults are used, but the
    /// file is not overwritten.
    pub fn load_or_init_with_outcome<P: AsRef<Path>>(
        path: P,
    ) -> Result<(Self, LoadOutcome), StoreError> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(table) => {
                    info!("Country data loaded from {} ({} entries)", path.display(), table.len());
                    Ok((table, LoadOutcome::Loaded))
                }
                Err(e) => {
                    warn!(
                        "Country data in {} could not be parsed ({}); using built-in defaults",
                        path.display(),
                        e
                    );
                    Ok((Self::builtin(), LoadOutcome::Fallback))
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("{} not found; creating built-in country data", path.display());
                let table = Self::builtin();
                table.save(path)?;
                info!("Built-in country data saved to {}", path.display());
                Ok((table, LoadOutcome::Created))
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Number of countries
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no countries
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record by canonical key
    pub fn get(&self, key: &str) -> Option<&CountryRecord> {
        self.records.get(&key.to_lowercase())
    }

    /// All records in key order
    pub fn records(&self) -> impl Iterator<Item = &CountryRecord> {
        self.records.values()
    }

    fn info_for_key(&self, key: &str) -> Option<CountryInfo> {
        self.records.get(key).map(CountryRecord::to_info)
    }
}

impl PartialEq for CountryTable {
    fn eq(&self, other: &Self) -> bool {
        // Indexes are derived from the records
        self.records == other.records
    }
}

impl Eq for CountryTable {}

impl Default for CountryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CountryDirectory for CountryTable {
    fn by_name(&self, name: &str) -> Option<CountryInfo> {
        let found = self.records.values().find(|record| record.answers_to(name));
        debug!("Name lookup '{}': {}", name, found.is_some());
        found.map(CountryRecord::to_info)
    }

    fn by_flag(&self, flag: &str) -> Option<CountryInfo> {
        self.flag_index
            .get(flag)
            .and_then(|key| self.info_for_key(key))
    }

    fn by_dial_code(&self, dial_code: &str) -> Option<CountryInfo> {
        self.dial_code_index
            .get(dial_code)
            .and_then(|key| self.info_for_key(key))
    }
}

fn insert_unique(index: &mut HashMap<String, String>, value: &str, key: &str, what: &str) {
    if let Some(existing) = index.get(value) {
        warn!(
            "{} '{}' shared by '{}' and '{}'; keeping '{}'",
            what, value, existing, key, existing
        );
        return;
    }
    index.insert(value.to_string(), key.to_string());
}
