use serde::{Deserialize, Serialize};

/// Outcome of checking the latest bar against its rolling levels
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum_macros::Display,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Classification {
    Buy,
    Sell,
    #[default]
    None,
}

/// The decision record handed to the presentation layer.
///
/// Only the combiner builds these. A signal is never stored: every evaluation
/// recomputes it from the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub classification: Classification,
    /// Index of the bar the signal is attached to (always the last bar)
    pub bar_index: usize,
    /// Close of the triggering bar
    pub trigger_price: f64,
    pub support: Option<f64>,
    pub resistance: Option<f64>,
    /// Resistance for BUY, support for SELL, absent for NONE
    pub level: Option<f64>,
    /// Distance beyond `level` that justified the signal
    pub pip_distance: Option<f64>,

    // Display gaps, signed the way the metric panel shows them
    pub resistance_gap_pips: Option<f64>,
    pub support_gap_pips: Option<f64>,
}

impl Signal {
    pub fn is_actionable(&self) -> bool {
        self.classification != Classification::None
    }
}
