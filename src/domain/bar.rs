use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Which price of a bar a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum BarField {
    Close,
    High,
    Low,
}

// One price observation. Position in the series is its only identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub close: f64,
    pub high: f64,
    pub low: f64,
}

impl Bar {
    // A constructor for convenience
    pub fn new(close: f64, high: f64, low: f64) -> Self {
        Bar { close, high, low }
    }

    /// Rejects non-finite or non-positive prices and bars whose high sits below their low.
    /// `close` may lie outside `[low, high]`.
    pub fn validate(&self, index: usize) -> Result<()> {
        for (field, value) in self.fields() {
            if !value.is_finite() || value <= 0.0 {
                return Err(AnalysisError::InvalidPrice {
                    index,
                    field,
                    value,
                });
            }
        }
        if self.high < self.low {
            return Err(AnalysisError::InvertedBar {
                index,
                high: self.high,
                low: self.low,
            });
        }
        Ok(())
    }

    fn fields(&self) -> [(BarField, f64); 3] {
        [
            (BarField::Close, self.close),
            (BarField::High, self.high),
            (BarField::Low, self.low),
        ]
    }
}
