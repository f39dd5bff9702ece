use crate::ui::config::{UI_CONFIG, UI_TEXT};

/// Uppercase heading followed by a rule
pub fn heading(text: impl Into<String>) -> String {
    let uppercase_text = text.into().to_uppercase();
    format!("{}\n{}", uppercase_text, "─".repeat(UI_CONFIG.rule_width))
}

/// Forex quote precision (5 decimals, e.g. 1.10342)
pub fn format_price(price: f64) -> String {
    format!("{:.*}", UI_CONFIG.price_decimals, price)
}

pub fn format_level(level: Option<f64>) -> String {
    match level {
        Some(price) => format_price(price),
        None => UI_TEXT.levels_pending.to_string(),
    }
}

/// Whole pips with explicit sign, as shown under a metric ("+65 pips")
pub fn format_pips(pips: Option<f64>) -> String {
    match pips {
        Some(p) => format!("{:+.0} pips", p),
        None => UI_TEXT.levels_pending.to_string(),
    }
}

/// `label` padded to the metric column width
pub fn metric_line(label: &str, value: &str, delta: Option<&str>) -> String {
    let mut line = format!("{:<width$} {}", label, value, width = UI_CONFIG.label_width);
    if let Some(delta) = delta {
        line.push_str(&format!("  ({})", delta));
    }
    line
}
