//! Shop records and the import/export wire shape.

use super::ShopId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Label shown next to the secondary (МИР network) code.
pub const MIR_LABEL: &str = "МИР";

/// A stored shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopRecord {
    /// Stable identifier, generated when missing.
    #[serde(default)]
    pub id: ShopId,
    /// Shop display name.
    pub name: String,
    /// Merchant category code.
    pub mcc: String,
    /// Alternate code for the МИР card network.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcc_mir: Option<String>,
    /// When the record entered the store.
    #[serde(default = "Utc::now")]
    pub added_at: DateTime<Utc>,
}

impl ShopRecord {
    /// Create a record with a fresh id.
    pub fn new(name: impl Into<String>, mcc: impl Into<String>) -> Self {
        Self {
            id: ShopId::new(),
            name: name.into(),
            mcc: mcc.into(),
            mcc_mir: None,
            added_at: Utc::now(),
        }
    }

    /// Set the МИР code.
    pub fn with_mir(mut self, mcc_mir: Option<String>) -> Self {
        self.mcc_mir = mcc_mir;
        self
    }

    /// Placeholder row used when a 4-digit code search finds no shop.
    pub fn probe(code: &str) -> Self {
        Self::new(format!("MCC {}", code), code)
    }

    /// All codes of this shop: `mcc`, then `mccMir` if present.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.mcc.as_str()).chain(self.mcc_mir.as_deref())
    }

    /// Whether `code` equals `mcc` or `mccMir` exactly.
    pub fn has_code(&self, code: &str) -> bool {
        self.codes().any(|c| c == code)
    }

    /// Identity used for duplicate detection.
    pub fn same_identity(&self, name: &str, mcc: &str) -> bool {
        self.name == name && self.mcc == mcc
    }

    /// Code column text, e.g. `5812 (5814 МИР)`.
    pub fn display_codes(&self) -> String {
        match &self.mcc_mir {
            Some(mir) => format!("{} ({} {})", self.mcc, mir, MIR_LABEL),
            None => self.mcc.clone(),
        }
    }
}

/// A shop as it appears in import and export files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopEntry {
    pub name: String,
    pub mcc: String,
    #[serde(rename = "mccMir", default, skip_serializing_if = "Option::is_none")]
    pub mcc_mir: Option<String>,
}

impl ShopEntry {
    /// Validate one element of an import array.
    ///
    /// Values are kept verbatim; only emptiness is judged after trimming.
    pub fn from_value(value: &Value) -> Result<Self, String> {
        let obj = value
            .as_object()
            .ok_or_else(|| "expected an object".to_string())?;

        let name = required_str(obj, "name")?;
        let mcc = required_str(obj, "mcc")?;
        let mcc_mir = match obj.get("mccMir") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.trim().is_empty() => {
                return Err("`mccMir` is empty".to_string())
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => return Err("`mccMir` must be a string".to_string()),
        };

        Ok(Self { name, mcc, mcc_mir })
    }

    /// Turn the entry into a stored record with a fresh id.
    pub fn into_record(self) -> ShopRecord {
        ShopRecord::new(self.name, self.mcc).with_mir(self.mcc_mir)
    }
}

impl From<&ShopRecord> for ShopEntry {
    fn from(record: &ShopRecord) -> Self {
        Self {
            name: record.name.clone(),
            mcc: record.mcc.clone(),
            mcc_mir: record.mcc_mir.clone(),
        }
    }
}

fn required_str(obj: &Map<String, Value>, field: &str) -> Result<String, String> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(format!("missing field `{}`", field)),
        Some(Value::String(s)) if s.trim().is_empty() => Err(format!("`{}` is empty", field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(format!("`{}` must be a string", field)),
    }
}

/// A problem found in one element of an import file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIssue {
    /// Zero-based position in the imported array.
    pub index: usize,
    pub problem: String,
}

impl RecordIssue {
    pub fn new(index: usize, problem: impl Into<String>) -> Self {
        Self {
            index,
            problem: problem.into(),
        }
    }
}

impl fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record #{}: {}", self.index + 1, self.problem)
    }
}

/// Validate every element, collecting all issues rather than stopping at the first.
pub fn validate_entries(values: &[Value]) -> Result<Vec<ShopEntry>, Vec<RecordIssue>> {
    let mut entries = Vec::with_capacity(values.len());
    let mut issues = Vec::new();

    for (index, value) in values.iter().enumerate() {
        match ShopEntry::from_value(value) {
            Ok(entry) => entries.push(entry),
            Err(problem) => issues.push(RecordIssue::new(index, problem)),
        }
    }

    if issues.is_empty() {
        Ok(entries)
    } else {
        Err(issues)
    }
}
