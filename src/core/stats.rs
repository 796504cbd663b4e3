use serde::{Serialize, Deserialize};

/// Index statistics for monitoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    pub live_documents: usize,
    pub tombstoned_documents: usize,
    pub term_count: usize,
    pub fields: Vec<FieldReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldReport {
    pub name: String,
    pub boost: f64,
    // Includes tombstoned documents until the next vacuum
    pub sum_lengths: u64,
    pub avg_length: f64,
}

impl IndexStats {
    /// True when removed documents are waiting for a vacuum.
    pub fn needs_vacuum(&self) -> bool {
        self.tombstoned_documents > 0
    }
}
