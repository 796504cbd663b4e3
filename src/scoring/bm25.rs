use serde::{Serialize, Deserialize};
use crate::core::error::{Error, Result};

/// BM25 constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Params {
    pub k1: f64,  // Term frequency saturation (default: 1.2)
    pub b: f64,   // Length normalization strength (default: 0.75)
}

impl Default for Bm25Params {
    fn default() -> Self {
        Bm25Params {
            k1: 1.2,
            b: 0.75,
        }
    }
}

impl Bm25Params {
    pub fn new(k1: f64, b: f64) -> Self {
        Bm25Params { k1, b }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.k1.is_finite() && self.k1 >= 0.0) {
            return Err(Error::invalid_argument(format!("k1 must be non-negative, got {}", self.k1)));
        }
        if !(0.0..=1.0).contains(&self.b) {
            return Err(Error::invalid_argument(format!("b must lie in [0, 1], got {}", self.b)));
        }
        Ok(())
    }
}

/// `ln(1 + (N - n + 0.5) / (n + 0.5))`, always positive.
pub fn idf(total_docs: usize, doc_freq: usize) -> f64 {
    let n = doc_freq as f64;
    let total = total_docs as f64;
    (1.0 + (total - n + 0.5) / (n + 0.5)).ln()
}

/// Statistics of the field a posting lives in.
#[derive(Debug, Clone, Copy)]
pub struct FieldNorm {
    pub field_length: f64,
    pub avg_field_length: f64,
}

/// Per-field BM25 scorer for one term. `weight` folds in field boost and idf.
#[derive(Debug, Clone, Copy)]
pub struct Bm25Scorer {
    pub params: Bm25Params,
    pub weight: f64,
}

impl Bm25Scorer {
    pub fn new(params: Bm25Params, boost: f64, idf: f64) -> Self {
        Bm25Scorer {
            params,
            weight: boost * idf,
        }
    }

    pub fn score(&self, term_freq: u32, norm: FieldNorm) -> f64 {
        let tf = term_freq as f64;
        let Bm25Params { k1, b } = self.params;

        // An all-empty field has no meaningful average; treat the length ratio as 1.
        let ratio = if norm.avg_field_length > 0.0 {
            norm.field_length / norm.avg_field_length
        } else {
            1.0
        };

        let numerator = tf * (k1 + 1.0);
        let denominator = tf + k1 * (1.0 - b + b * ratio);

        self.weight * numerator / denominator
    }
}
