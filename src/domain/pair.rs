use serde::{Deserialize, Serialize};

/// Currency pairs offered for analysis.
/// Pip scaling is the same 4-decimal convention for every pair, USD/JPY included.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
pub enum ForexPair {
    #[default]
    #[strum(serialize = "EUR/USD")]
    #[value(name = "EURUSD", alias = "EUR/USD")]
    EurUsd,
    #[strum(serialize = "GBP/USD")]
    #[value(name = "GBPUSD", alias = "GBP/USD")]
    GbpUsd,
    #[strum(serialize = "USD/JPY")]
    #[value(name = "USDJPY", alias = "USD/JPY")]
    UsdJpy,
}

impl ForexPair {
    pub fn base(&self) -> &'static str {
        self.split().0
    }

    pub fn quote(&self) -> &'static str {
        self.split().1
    }

    // Split the pair into base and quote currencies.
    pub fn split(&self) -> (&'static str, &'static str) {
        match self {
            ForexPair::EurUsd => ("EUR", "USD"),
            ForexPair::GbpUsd => ("GBP", "USD"),
            ForexPair::UsdJpy => ("USD", "JPY"),
        }
    }

    /// Name without separator, safe for filenames (e.g. `EURUSD`)
    pub fn code(&self) -> String {
        format!("{}{}", self.base(), self.quote())
    }
}
