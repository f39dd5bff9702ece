//! config/demo.rs Demo specific configuration knobs.
//!
//! The synthetic series stands in for a market-data feed. Every knob here is
//! deterministic given the seed, so two runs with the same settings produce
//! the same bars.

/// Random-walk parameters for the synthetic close series
pub struct WalkParams {
    pub start_price: f64,
    /// Mean of the per-bar close increment
    pub drift: f64,
    /// Standard deviation of the per-bar close increment
    pub volatility: f64,
    /// Half-open range `[min, max)` for the distance from close to high (and to low)
    pub wick_min: f64,
    pub wick_max: f64,
}

/// How many bars the demo may generate
pub struct CandleBounds {
    pub min: usize,
    pub max: usize,
    pub default: usize,
}

/// The Master Demo Configuration
pub struct DemoConfig {
    pub seed: u64,
    pub walk: WalkParams,
    pub candles: CandleBounds,
    /// Headline batch used when the user supplies none
    pub headlines: &'static [&'static str],
}

pub const DEMO: DemoConfig = DemoConfig {
    seed: 42,

    walk: WalkParams {
        start_price: 1.1000,
        drift: 0.0001,
        volatility: 0.0005,
        wick_min: 0.0002,
        wick_max: 0.0004,
    },

    candles: CandleBounds {
        min: 50,
        max: 500,
        default: 200,
    },

    headlines: &[
        "La Fed sube tasas",
        "El euro se fortalece",
        "Inflación en máximos",
    ],
};
