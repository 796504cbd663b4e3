use std::cmp::Ordering;
use serde::{Serialize, Deserialize};
use crate::core::types::DocKey;

/// Document with relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit<I> {
    pub id: I,
    pub key: DocKey,
    pub score: f64,
}

/// Descending score, then ascending key.
pub fn rank_order(a: (DocKey, f64), b: (DocKey, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Options for a single search call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Keep only the best `limit` hits.
    pub limit: Option<usize>,
    /// Overrides the index-wide BM25 constants for this query.
    pub bm25: Option<crate::scoring::bm25::Bm25Params>,
    /// When false, only exact term matches are scored.
    pub expand_prefixes: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            limit: None,
            bm25: None,
            expand_prefixes: true,
        }
    }
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn exact(mut self) -> Self {
        self.expand_prefixes = false;
        self
    }
}
