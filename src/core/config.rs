use serde::{Serialize, Deserialize};
use crate::core::error::{Error, Result};
use crate::scoring::bm25::Bm25Params;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub bm25: Bm25Params,
    /// Multiplier applied to terms reached through prefix expansion.
    pub expansion_penalty: f64,
    /// Boost for fields registered without an explicit one.
    pub default_boost: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bm25: Bm25Params::default(),
            expansion_penalty: 0.5,
            default_boost: 1.0,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.bm25.validate()?;
        if !(self.expansion_penalty > 0.0 && self.expansion_penalty < 1.0) {
            return Err(Error::invalid_argument(format!(
                "expansion_penalty must lie in (0, 1), got {}",
                self.expansion_penalty
            )));
        }
        validate_boost(self.default_boost)
    }
}

pub(crate) fn validate_boost(boost: f64) -> Result<()> {
    if boost.is_finite() && boost > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!("boost must be positive, got {}", boost)))
    }
}
