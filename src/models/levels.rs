use serde::{Deserialize, Serialize};

use crate::config::DEBUG_FLAGS;
use crate::error::{AnalysisError, Result};
use crate::models::Series;
use crate::utils::maths_utils::{get_max, get_min};

/// Support and resistance at one bar of the series.
///
/// Both are `None` until `window` bars exist: an absent level is never compared
/// against price.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RollingLevels {
    /// Lowest low over the trailing window
    pub support: Option<f64>,
    /// Highest high over the trailing window
    pub resistance: Option<f64>,
}

impl RollingLevels {
    pub fn is_defined(&self) -> bool {
        self.support.is_some() && self.resistance.is_some()
    }
}

/// Trailing levels for bar `index`, using bars `[index + 1 - window, index]` only.
///
/// Returns undefined levels when fewer than `window` bars end at `index` or the
/// index is past the end of the series.
pub fn levels_at(series: &Series, window: usize, index: usize) -> Result<RollingLevels> {
    if window == 0 {
        return Err(AnalysisError::InvalidWindow(window));
    }
    if index >= series.len() || index + 1 < window {
        return Ok(RollingLevels::default());
    }

    let trailing = &series.bars()[index + 1 - window..=index];
    let lows: Vec<f64> = trailing.iter().map(|b| b.low).collect();
    let highs: Vec<f64> = trailing.iter().map(|b| b.high).collect();

    Ok(RollingLevels {
        support: Some(get_min(&lows)),
        resistance: Some(get_max(&highs)),
    })
}

/// Levels for every bar of the series. Entries before index `window - 1` are undefined.
///
/// Cost is O(N·W); each entry depends only on its own trailing window.
pub fn compute_levels(series: &Series, window: usize) -> Result<Vec<RollingLevels>> {
    let levels = (0..series.len())
        .map(|index| levels_at(series, window, index))
        .collect::<Result<Vec<_>>>()?;

    if DEBUG_FLAGS.print_levels {
        for (index, level) in levels.iter().enumerate().filter(|(_, l)| l.is_defined()) {
            log::debug!(
                "levels[{}]: support {:?} resistance {:?}",
                index,
                level.support,
                level.resistance
            );
        }
    }

    Ok(levels)
}
