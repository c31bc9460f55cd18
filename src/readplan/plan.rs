//! # Reading Plan
//!
//! [`ReadingPlan`] is the immutable, date-ordered catalog of daily readings. It is built
//! once at startup by concatenating month datasets in the order they are supplied;
//! it never sorts, so callers must hand the months over in calendar order.
//!
//! Lookups by date are exact string matches against each entry's `id`. When the data
//! repeats an `id`, the first occurrence wins.
//!
//! Two data sources exist:
//! - [`ReadingPlan::bundled`]: the January–March 2026 plan compiled into the binary.
//! - [`ReadingPlan::from_dir`]: every `*.json` file of a directory, in file-name order
//!   (name them `01-january.json`, `02-february.json`, ... to keep calendar order).

use crate::error::{ReadplanError, Result};
use crate::model::DailyReading;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const BUNDLED_MONTHS: [(&str, &str); 3] = [
    ("january", include_str!("../../data/01-january.json")),
    ("february", include_str!("../../data/02-february.json")),
    ("march", include_str!("../../data/03-march.json")),
];

#[derive(Debug, Clone, Default)]
pub struct ReadingPlan {
    entries: Vec<DailyReading>,
    by_id: HashMap<String, usize>,
}

impl ReadingPlan {
    /// Concatenates month datasets, preserving the order given.
    pub fn from_months<I>(months: I) -> Self
    where
        I: IntoIterator<Item = Vec<DailyReading>>,
    {
        let entries: Vec<DailyReading> = months.into_iter().flatten().collect();
        let mut by_id = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if let Some(first) = by_id.get(&entry.id) {
                warn!(id = %entry.id, first, duplicate = index, "duplicate plan entry ignored for lookup");
                continue;
            }
            by_id.insert(entry.id.clone(), index);
        }
        debug!(entries = entries.len(), "reading plan built");
        Self { entries, by_id }
    }

    /// Parses one month dataset (a JSON array of daily readings).
    pub fn parse_month(json: &str) -> Result<Vec<DailyReading>> {
        serde_json::from_str(json).map_err(ReadplanError::Serialization)
    }

    /// The plan shipped with the binary.
    pub fn bundled() -> Result<Self> {
        let months = BUNDLED_MONTHS
            .iter()
            .map(|(name, json)| {
                Self::parse_month(json)
                    .map_err(|e| ReadplanError::Plan(format!("bundled {} data: {}", name, e)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_months(months))
    }

    /// Loads every `*.json` month dataset found in `dir`, sorted by file name.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read_dir = fs::read_dir(dir).map_err(|e| {
            ReadplanError::Plan(format!("cannot read plan directory {}: {}", dir.display(), e))
        })?;

        let mut files = Vec::new();
        for entry in read_dir {
            let path = entry.map_err(ReadplanError::Io)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                files.push(path);
            }
        }
        files.sort();

        if files.is_empty() {
            return Err(ReadplanError::Plan(format!(
                "no .json month files in {}",
                dir.display()
            )));
        }

        let mut months = Vec::with_capacity(files.len());
        for path in files {
            let json = fs::read_to_string(&path).map_err(ReadplanError::Io)?;
            let month = Self::parse_month(&json)
                .map_err(|e| ReadplanError::Plan(format!("{}: {}", path.display(), e)))?;
            debug!(file = %path.display(), days = month.len(), "loaded month dataset");
            months.push(month);
        }
        Ok(Self::from_months(months))
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn at(&self, index: usize) -> Option<&DailyReading> {
        self.entries.get(index)
    }

    /// Index of the entry whose `id` is exactly `iso_date`; `None` when no entry matches.
    pub fn find_index_by_date(&self, iso_date: &str) -> Option<usize> {
        self.by_id.get(iso_date).copied()
    }

    pub fn entries(&self) -> &[DailyReading] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &DailyReading> {
        self.entries.iter()
    }
}
