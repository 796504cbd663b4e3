use serde::{Serialize, Deserialize};
use crate::core::error::{Error, Result};
use crate::core::types::FieldIndex;

/// Length accounting for one field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldStats {
    pub sum_lengths: u64,
    pub avg_length: f64,
}

/// One `FieldStats` slot per registered field.
///
/// Sums cover every document whose lengths have not been purged yet, so
/// removed documents stay counted until the next vacuum.
#[derive(Debug, Clone, Default)]
pub struct FieldStatistics {
    fields: Vec<FieldStats>,
}

impl FieldStatistics {
    pub fn new(field_count: usize) -> Self {
        FieldStatistics {
            fields: vec![FieldStats::default(); field_count],
        }
    }

    pub fn push_field(&mut self) -> FieldIndex {
        self.fields.push(FieldStats::default());
        self.fields.len() - 1
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: FieldIndex) -> Option<&FieldStats> {
        self.fields.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldStats> {
        self.fields.iter()
    }

    pub fn add_lengths(&mut self, lengths: &[u32]) {
        for (stats, &len) in self.fields.iter_mut().zip(lengths) {
            stats.sum_lengths += u64::from(len);
        }
    }

    pub fn subtract_lengths(&mut self, lengths: &[u64]) -> Result<()> {
        for (field, (stats, &len)) in self.fields.iter_mut().zip(lengths).enumerate() {
            stats.sum_lengths = stats.sum_lengths.checked_sub(len).ok_or_else(|| {
                Error::internal(format!(
                    "field {} length sum {} smaller than purged length {}",
                    field, stats.sum_lengths, len
                ))
            })?;
        }
        Ok(())
    }

    /// Recomputes every average over `doc_count` documents.
    pub fn recompute(&mut self, doc_count: usize) {
        for stats in &mut self.fields {
            stats.avg_length = if doc_count == 0 {
                0.0
            } else {
                stats.sum_lengths as f64 / doc_count as f64
            };
        }
    }
}
