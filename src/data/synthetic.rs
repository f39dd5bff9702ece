use anyhow::{Context, Result, bail};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::Normal;

use crate::config::DEMO;
use crate::config::demo::WalkParams;
use crate::data::SeriesSource;
use crate::models::Series;

/// Seeded random-walk bars for demos and tests.
///
/// Closes follow `start + cumsum(N(drift, volatility))`; each bar's high and low
/// sit a uniform wick offset above and below its close. Draw order is fixed
/// (all closes, then all highs, then all lows), so a seed always yields the same bars.
pub struct SyntheticSeries {
    pub seed: u64,
    pub walk: WalkParams,
}

impl SyntheticSeries {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            walk: DEMO.walk,
        }
    }

    pub fn with_walk(seed: u64, walk: WalkParams) -> Self {
        Self { seed, walk }
    }
}

impl Default for SyntheticSeries {
    fn default() -> Self {
        Self::new(DEMO.seed)
    }
}

impl SeriesSource for SyntheticSeries {
    fn generate(&self, count: usize) -> Result<Series> {
        if count == 0 {
            bail!("Cannot generate an empty series");
        }
        let walk = &self.walk;
        if walk.wick_min > walk.wick_max || walk.wick_min < 0.0 {
            bail!(
                "Invalid wick range [{}, {})",
                walk.wick_min,
                walk.wick_max
            );
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let step = Normal::new(walk.drift, walk.volatility)
            .context("Invalid drift/volatility for synthetic series")?;

        let closes: Vec<f64> = (0..count)
            .scan(walk.start_price, |price, _| {
                *price += rng.sample(step);
                Some(*price)
            })
            .collect();
        let highs: Vec<f64> = closes
            .iter()
            .map(|c| c + wick(&mut rng, walk))
            .collect();
        let lows: Vec<f64> = closes
            .iter()
            .map(|c| c - wick(&mut rng, walk))
            .collect();

        Series::from_columns(&closes, &highs, &lows)
            .context("Synthetic walk produced an invalid series")
    }

    fn signature(&self) -> &'static str {
        "synthetic"
    }
}

fn wick(rng: &mut StdRng, walk: &WalkParams) -> f64 {
    if walk.wick_min == walk.wick_max {
        return walk.wick_min;
    }
    rng.gen_range(walk.wick_min..walk.wick_max)
}
