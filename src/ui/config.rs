pub use crate::ui::text::{UI_TEXT, UiText};

/// Layout settings for the text report
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    /// Width the metric labels are padded to
    pub label_width: usize,
    /// Decimals shown for prices and levels
    pub price_decimals: usize,
    /// Length of the rule under the title
    pub rule_width: usize,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    label_width: 22,
    price_decimals: 5,
    rule_width: 60,
};
