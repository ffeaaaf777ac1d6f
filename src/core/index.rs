//! The persisted report index (`reports/index.json`), newest record first.

use super::record::ReportRecord;
use anyhow::Context;
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct ReportIndex {
    records: Vec<ReportRecord>,
}

impl ReportIndex {
    pub fn new(records: Vec<ReportRecord>) -> Self {
        Self { records }
    }

    /// Load the index from `path`.
    ///
    /// A missing file is an empty index. So is a file whose content is not a
    /// JSON array: the bad document is logged and discarded, and the next save
    /// replaces it. Only I/O failures are errors.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No index at {}, starting empty", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read index {}", path.display()))
            }
        };

        match Self::parse(&bytes) {
            Ok(index) => {
                log::debug!("Loaded {} records from {}", index.len(), path.display());
                Ok(index)
            }
            Err(e) => {
                log::warn!(
                    "Index {} is not a JSON list ({}); treating it as empty",
                    path.display(),
                    e
                );
                Ok(Self::default())
            }
        }
    }

    /// Decode an index document.
    ///
    /// Only a document that is not a JSON array is an error. Entries are
    /// decoded one at a time, and an entry that is not an object is skipped
    /// without affecting the rest.
    pub fn parse(bytes: &[u8]) -> serde_json::Result<Self> {
        let items: Vec<Value> = serde_json::from_slice(bytes)?;
        let mut records = Vec::with_capacity(items.len());
        for (position, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<ReportRecord>(item) {
                Ok(record) => records.push(record),
                Err(e) => log::warn!("Skipping index entry {} ({})", position, e),
            }
        }
        Ok(Self::new(records))
    }

    /// Pretty JSON with two-space indent, non-ASCII written as-is.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Overwrite `path` with the full index.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).with_context(|| format!("failed to write index {}", path.display()))?;
        log::debug!("Saved {} records to {}", self.len(), path.display());
        Ok(())
    }

    /// Insert `record` as the most recent entry.
    pub fn prepend(&mut self, record: ReportRecord) {
        self.records.insert(0, record);
    }

    pub fn records(&self) -> &[ReportRecord] {
        &self.records
    }

    pub fn latest(&self) -> Option<&ReportRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
