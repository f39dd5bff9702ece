use crate::analysis::breakout::BreakoutReading;
use crate::domain::Signal;
use crate::utils::maths_utils::price_to_pips;

/// Turns a breakout reading into the final `Signal`.
///
/// Sentiment is not an input: the aggregate is computed alongside for display
/// and has no say in the decision.
pub fn combine(reading: &BreakoutReading) -> Signal {
    let close = reading.trigger_price;

    Signal {
        classification: reading.classification,
        bar_index: reading.index,
        trigger_price: close,
        support: reading.support,
        resistance: reading.resistance,
        level: reading.level,
        pip_distance: reading.pip_distance,
        resistance_gap_pips: reading.resistance.map(|r| price_to_pips(close - r)),
        support_gap_pips: reading.support.map(|s| price_to_pips(s - close)),
    }
}
