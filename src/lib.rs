#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod models;
pub mod ui;
pub mod utils;

use std::path::PathBuf;

// Re-export commonly used types
pub use analysis::{
    AggregateSentiment, BreakoutReading, LexiconScorer, PolarityScorer, SentimentLabel,
    aggregate_sentiment, classify_breakout,
};
pub use config::AnalysisConfig;
pub use data::{SeriesSource, SyntheticSeries};
pub use domain::{Bar, Classification, ForexPair, Signal};
pub use engine::{Evaluation, evaluate};
pub use error::{AnalysisError, Result};
pub use models::{RollingLevels, Series, compute_levels};

// CLI argument parsing
use clap::Parser;
use clap::builder::TypedValueParser;

use crate::config::{ANALYSIS, DEMO};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Currency pair to analyse
    #[arg(long, value_enum, default_value_t = ForexPair::EurUsd)]
    pub pair: ForexPair,

    /// Number of bars to analyse
    #[arg(
        long,
        default_value_t = DEMO.candles.default,
        value_parser = clap::value_parser!(u64)
            .range(DEMO.candles.min as u64..=DEMO.candles.max as u64)
            .map(|v| v as usize)
    )]
    pub candles: usize,

    /// Trailing window for support/resistance, in bars
    #[arg(long, default_value_t = ANALYSIS.window)]
    pub window: usize,

    /// Minimum breakout distance in pips
    #[arg(
        long,
        default_value_t = ANALYSIS.pip_threshold as u32,
        value_parser = clap::value_parser!(u32)
            .range(ANALYSIS.threshold_bounds.min_pips as i64..=ANALYSIS.threshold_bounds.max_pips as i64)
    )]
    pub pips: u32,

    /// Seed for the synthetic series
    #[arg(long, default_value_t = DEMO.seed)]
    pub seed: u64,

    /// Load bars from a saved snapshot (.bin or .json) instead of generating them
    #[arg(long)]
    pub series: Option<PathBuf>,

    /// Newline-delimited headlines file, or `-` for stdin
    #[arg(long)]
    pub headlines: Option<PathBuf>,

    /// Print the evaluation as JSON instead of the text report
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Cli {
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::new(self.pair, self.window, f64::from(self.pips))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_source_controls() {
        let cli = Cli::parse_from(["pip-sentiment"]);
        assert_eq!(cli.pair, ForexPair::EurUsd);
        assert_eq!(cli.candles, 200);
        assert_eq!(cli.window, 50);
        assert_eq!(cli.pips, 20);
        assert_eq!(cli.seed, 42);
        assert!(!cli.json);
        assert_eq!(cli.analysis_config(), AnalysisConfig::default());
    }

    #[test]
    fn parses_pair_and_limits() {
        let cli = Cli::parse_from([
            "pip-sentiment",
            "--pair",
            "GBPUSD",
            "--candles",
            "500",
            "--pips",
            "10",
        ]);
        assert_eq!(cli.pair, ForexPair::GbpUsd);
        assert_eq!(cli.candles, 500);
        assert_eq!(cli.analysis_config().pip_threshold, 10.0);
    }

    #[test]
    fn rejects_out_of_range_controls() {
        assert!(Cli::try_parse_from(["pip-sentiment", "--candles", "20"]).is_err());
        assert!(Cli::try_parse_from(["pip-sentiment", "--pips", "60"]).is_err());
    }
}
