use serde::Serialize;

use crate::analysis::{
    AggregateSentiment, PolarityScorer, aggregate_sentiment, classify_breakout, combine,
};
use crate::config::AnalysisConfig;
use crate::domain::{ForexPair, Signal};
use crate::error::Result;
use crate::models::{RollingLevels, Series, compute_levels};

/// Everything the presentation layer needs for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub pair: ForexPair,
    pub window: usize,
    pub pip_threshold: f64,
    pub candles: usize,
    /// One entry per bar, undefined before the window fills
    pub levels: Vec<RollingLevels>,
    pub signal: Signal,
    /// Shown next to the signal; not an input to it
    pub sentiment: AggregateSentiment,
}

/// Runs one stateless evaluation: levels, breakout, signal, then sentiment on its own.
///
/// The same inputs always give the same `Evaluation`.
pub fn evaluate<S, P>(
    series: &Series,
    headlines: &[S],
    config: &AnalysisConfig,
    scorer: &P,
) -> Result<Evaluation>
where
    S: AsRef<str>,
    P: PolarityScorer + ?Sized,
{
    config.validate()?;

    let levels = compute_levels(series, config.window)?;
    let reading = classify_breakout(series, config)?;
    let signal = combine(&reading);
    let sentiment = aggregate_sentiment(headlines, scorer);

    log::info!(
        "{} | {} bars, window {}, threshold {} pips -> {}",
        config.pair,
        series.len(),
        config.window,
        config.pip_threshold,
        signal.classification
    );

    Ok(Evaluation {
        pair: config.pair,
        window: config.window,
        pip_threshold: config.pip_threshold,
        candles: series.len(),
        levels,
        signal,
        sentiment,
    })
}
