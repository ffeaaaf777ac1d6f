use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Format of `created_at`, local time to the second.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format of the default display date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One published report as stored in `reports/index.json`.
///
/// Every field is a plain string. Fields missing from a hand-edited index
/// load as empty strings, `null` loads as empty, and numbers or booleans load
/// as their JSON text. Keys this tool does not know are kept in `extra` and
/// written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportRecord {
    /// Display date (user-supplied, not validated)
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    /// Display title
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    /// Short identifier such as a ticker, may be empty
    #[serde(default, deserialize_with = "lenient_string")]
    pub symbol: String,
    /// Free-text note, may be empty
    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: String,
    /// Archived file relative to the site root (e.g. `reports/20240115-093000-q1.html`)
    #[serde(default, deserialize_with = "lenient_string")]
    pub path: String,
    /// Insertion time, audit only
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
    /// Hand-added keys, preserved across saves
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

impl ReportRecord {
    /// Card subtitle: `"{symbol} · {date}"`, or just the date without a symbol.
    pub fn subtitle(&self) -> String {
        if self.symbol.is_empty() {
            self.date.clone()
        } else {
            format!("{} · {}", self.symbol, self.date)
        }
    }
}

/// Inputs of a single publish run, before the archive path is known.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub title: String,
    pub symbol: String,
    pub date: String,
    pub notes: String,
}

impl NewReport {
    pub fn into_record(self, path: String, created_at: NaiveDateTime) -> ReportRecord {
        ReportRecord {
            date: self.date,
            title: self.title,
            symbol: self.symbol,
            notes: self.notes,
            path,
            created_at: created_at.format(CREATED_AT_FORMAT).to_string(),
            extra: Map::new(),
        }
    }
}
