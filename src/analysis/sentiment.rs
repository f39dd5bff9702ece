use serde::{Deserialize, Serialize};

use crate::config::DEBUG_FLAGS;
use crate::utils::maths_utils::mean;

/// Anything that maps a line of text to a polarity in [-1, 1].
/// Lexical, statistical and model-backed scorers are interchangeable behind this.
pub trait PolarityScorer {
    fn score_text(&self, text: &str) -> f64;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> f64,
{
    fn score_text(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Market mood shown next to the aggregate score
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
pub enum SentimentLabel {
    /// Bullish
    Alcista,
    /// Bearish
    Bajista,
}

impl SentimentLabel {
    // Strictly positive is bullish; exactly 0.0 falls on the bearish side.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            SentimentLabel::Alcista
        } else {
            SentimentLabel::Bajista
        }
    }
}

/// Result of scoring a headline batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AggregateSentiment {
    /// Nothing left to score once blank lines are dropped
    NoData,
    Scored {
        /// Arithmetic mean of `scores`
        score: f64,
        label: SentimentLabel,
        headline_count: usize,
        /// Per-headline polarity, in input order
        scores: Vec<f64>,
    },
}

impl AggregateSentiment {
    pub fn score(&self) -> Option<f64> {
        match self {
            AggregateSentiment::NoData => None,
            AggregateSentiment::Scored { score, .. } => Some(*score),
        }
    }

    pub fn label(&self) -> Option<SentimentLabel> {
        match self {
            AggregateSentiment::NoData => None,
            AggregateSentiment::Scored { label, .. } => Some(*label),
        }
    }
}

/// Scores every non-blank headline and reduces the batch to its mean polarity.
///
/// Blank and whitespace-only lines are skipped before scoring. A batch with
/// nothing left yields `NoData`, never a silent 0.0.
pub fn aggregate_sentiment<S, P>(headlines: &[S], scorer: &P) -> AggregateSentiment
where
    S: AsRef<str>,
    P: PolarityScorer + ?Sized,
{
    let scores: Vec<f64> = headlines
        .iter()
        .map(|headline| headline.as_ref())
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let score = checked_polarity(scorer.score_text(line), line);
            if DEBUG_FLAGS.print_headline_scores {
                log::debug!("Headline {:?} -> {:.3}", line, score);
            }
            score
        })
        .collect();

    let Some(score) = mean(&scores) else {
        return AggregateSentiment::NoData;
    };

    AggregateSentiment::Scored {
        score,
        label: SentimentLabel::from_score(score),
        headline_count: scores.len(),
        scores,
    }
}

// Keep scorer output inside the polarity contract.
fn checked_polarity(raw: f64, line: &str) -> f64 {
    if !raw.is_finite() {
        log::warn!("Scorer returned {} for {:?}; treating as neutral", raw, line);
        return 0.0;
    }
    if !(-1.0..=1.0).contains(&raw) {
        log::warn!("Scorer returned {} for {:?}; clamping to [-1, 1]", raw, line);
        return raw.clamp(-1.0, 1.0);
    }
    raw
}
