//! Data structures and helpers for accuracy observation tables.
//!
//! This module defines `AccuracyRecord` and `AccuracyTable` and contains the
//! CSV reader that feeds the plot builders. Column names are a fixed contract
//! with the caller; a file that does not match it fails at deserialization
//! time rather than being repaired here.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One observation: a method's estimated accuracy against the measured truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyRecord {
    /// Accuracy measured on held-out labels.
    pub true_accs: f64,
    /// Accuracy predicted by the estimation method.
    pub estim_accs: f64,
    /// Estimation method name, used for color grouping.
    pub method: String,
    /// Source dataset, used for facet selection in grid plots.
    #[serde(default)]
    pub dataset: Option<String>,
}

/// Ordered collection of accuracy observations.
#[derive(Debug, Clone, Default)]
pub struct AccuracyTable {
    records: Vec<AccuracyRecord>,
}

impl AccuracyTable {
    pub fn new(records: Vec<AccuracyRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AccuracyRecord] {
        &self.records
    }

    pub fn push(&mut self, record: AccuracyRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct method names in order of first appearance.
    pub fn methods(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.method.as_str()) {
                seen.push(record.method.as_str());
            }
        }
        seen
    }

    /// Distinct dataset names in order of first appearance, skipping rows
    /// that carry none.
    pub fn datasets(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for record in &self.records {
            if let Some(dataset) = record.dataset.as_deref() {
                if !seen.contains(&dataset) {
                    seen.push(dataset);
                }
            }
        }
        seen
    }

    /// Rows belonging to one method.
    pub fn rows_for_method<'a>(
        &'a self,
        method: &'a str,
    ) -> impl Iterator<Item = &'a AccuracyRecord> {
        self.records.iter().filter(move |r| r.method == method)
    }
}

impl FromIterator<AccuracyRecord> for AccuracyTable {
    fn from_iter<I: IntoIterator<Item = AccuracyRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Read an accuracy observation table from a headed CSV file.
///
/// Expected columns are `true_accs`, `estim_accs`, `method`, and optionally
/// `dataset`. Rows are kept in file order.
pub fn read_accuracy_csv<P: AsRef<Path>>(path: P) -> Result<AccuracyTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(&path)
        .with_context(|| format!("Failed to open table: {}", path.as_ref().display()))?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: AccuracyRecord = result
            .with_context(|| format!("Failed to parse row in {}", path.as_ref().display()))?;
        records.push(record);
    }

    log::info!(
        "Loaded {} accuracy observations from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(AccuracyTable::new(records))
}
