//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so runs
//! stay quiet. Output goes through `log::debug!`, so `RUST_LOG=debug` is
//! needed as well.

pub struct DebugFlags {
    /// Emit the polarity assigned to each headline.
    pub print_headline_scores: bool,
    /// Emit the support/resistance pair for every bar once levels are computed.
    pub print_levels: bool,
    /// Emit the inputs and outcome of each breakout classification.
    pub print_breakout_checks: bool,
    /// Emit snapshot load/save details.
    pub print_series_io: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_headline_scores: false,
    print_levels: false,
    print_breakout_checks: false,
    print_series_io: false,
};
