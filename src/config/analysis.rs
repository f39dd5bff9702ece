//! Analysis and computation configuration

use serde::{Deserialize, Serialize};

use crate::domain::ForexPair;
use crate::error::{AnalysisError, Result};

/// Bounds for the pip threshold the CLI accepts
pub struct ThresholdBounds {
    pub min_pips: u32,
    pub max_pips: u32,
}

/// The Master Analysis Defaults
pub struct AnalysisDefaults {
    // Trailing window (in bars) for support/resistance
    pub window: usize,
    // Minimum distance beyond a level, in pips, for a breakout to count
    pub pip_threshold: f64,
    // Price difference -> pips. Conventional 4-decimal quote scaling.
    pub pips_per_unit: f64,

    pub threshold_bounds: ThresholdBounds,
}

pub const ANALYSIS: AnalysisDefaults = AnalysisDefaults {
    window: 50,
    pip_threshold: 20.0,
    pips_per_unit: 10_000.0,

    threshold_bounds: ThresholdBounds {
        min_pips: 10,
        max_pips: 50,
    },
};

/// Parameters for one evaluation. Passed into every core call; the core reads no ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub pair: ForexPair,
    pub window: usize,
    pub pip_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            pair: ForexPair::default(),
            window: ANALYSIS.window,
            pip_threshold: ANALYSIS.pip_threshold,
        }
    }
}

impl AnalysisConfig {
    pub fn new(pair: ForexPair, window: usize, pip_threshold: f64) -> Self {
        Self {
            pair,
            window,
            pip_threshold,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(AnalysisError::InvalidWindow(self.window));
        }
        if !self.pip_threshold.is_finite() || self.pip_threshold < 0.0 {
            return Err(AnalysisError::InvalidThreshold(self.pip_threshold));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_source_controls() {
        let config = AnalysisConfig::default();
        assert_eq!(config.pair, ForexPair::EurUsd);
        assert_eq!(config.window, 50);
        assert_eq!(config.pip_threshold, 20.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_window() {
        let config = AnalysisConfig::new(ForexPair::EurUsd, 0, 20.0);
        assert_eq!(config.validate(), Err(AnalysisError::InvalidWindow(0)));
    }

    #[test]
    fn rejects_negative_or_nan_threshold() {
        let negative = AnalysisConfig::new(ForexPair::EurUsd, 10, -5.0);
        assert_eq!(
            negative.validate(),
            Err(AnalysisError::InvalidThreshold(-5.0))
        );

        let nan = AnalysisConfig::new(ForexPair::EurUsd, 10, f64::NAN);
        assert!(matches!(
            nan.validate(),
            Err(AnalysisError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn zero_threshold_is_accepted() {
        assert!(AnalysisConfig::new(ForexPair::GbpUsd, 1, 0.0).validate().is_ok());
    }
}
