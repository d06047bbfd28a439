use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::types::{Summary, Term};

/// Key the context map lives under; doubles as the file stem here.
pub const CONTEXT_MAP_KEY: &str = "hyperContextMap";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One remembered lookup: the summary shown and when it was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMapEntry {
    pub summary: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

/// Term-keyed map of remembered lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextMap {
    entries: BTreeMap<String, ContextMapEntry>,
}

impl ContextMap {
    pub fn get(&self, term: &str) -> Option<&ContextMapEntry> {
        self.entries.get(term)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ContextMapEntry)> {
        self.entries.iter()
    }
}

/// File-backed context map. A collaborator for future extension; nothing in
/// the selection flow calls into it.
///
/// `record` is read-modify-write without locking: concurrent recorders are
/// last-writer-wins at file granularity.
#[derive(Debug, Clone)]
pub struct ContextMapStore {
    path: PathBuf,
}

impl ContextMapStore {
    /// Store rooted at `dir`, addressing `<dir>/hyperContextMap.json`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        ContextMapStore {
            path: dir.as_ref().join(format!("{CONTEXT_MAP_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored map; empty when nothing has been recorded yet.
    pub fn load(&self) -> Result<ContextMap, StoreError> {
        if !self.path.exists() {
            return Ok(ContextMap::default());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Remember `summary` for `term`, stamped now. Replaces any prior entry
    /// for the same term.
    pub fn record(&self, term: &Term, summary: &Summary) -> Result<(), StoreError> {
        let mut map = self.load()?;
        map.entries.insert(
            term.as_str().to_string(),
            ContextMapEntry {
                summary: summary.text().to_string(),
                timestamp: Utc::now().timestamp_millis(),
            },
        );
        self.persist(&map)
    }

    fn persist(&self, map: &ContextMap) -> Result<(), StoreError> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(&temp);
            serde_json::to_writer_pretty(&mut writer, map)?;
            writer.flush()?;
        }
        temp.persist(&self.path)
            .map_err(|err| StoreError::Io(err.error))?;
        Ok(())
    }
}
