use itertools::Itertools;

use crate::analysis::AggregateSentiment;
use crate::domain::Classification;
use crate::engine::Evaluation;
use crate::ui::config::UI_TEXT;
use crate::ui::utils::{format_level, format_pips, format_price, heading, metric_line};

/// Plain-text panel for one evaluation: metrics, sentiment, then the signal banner.
pub fn render_report(evaluation: &Evaluation) -> String {
    let signal = &evaluation.signal;

    let resistance_delta = format_pips(signal.resistance_gap_pips);
    let support_delta = format_pips(signal.support_gap_pips);

    let lines = vec![
        heading(UI_TEXT.title),
        format!(
            "{} | {} velas | ventana {} | umbral {} pips",
            evaluation.pair, evaluation.candles, evaluation.window, evaluation.pip_threshold
        ),
        String::new(),
        metric_line(UI_TEXT.price_label, &format_price(signal.trigger_price), None),
        metric_line(
            UI_TEXT.resistance_label,
            &format_level(signal.resistance),
            Some(resistance_delta.as_str()),
        ),
        metric_line(
            UI_TEXT.support_label,
            &format_level(signal.support),
            Some(support_delta.as_str()),
        ),
        render_sentiment(&evaluation.sentiment),
        String::new(),
        render_banner(evaluation),
    ];

    lines.into_iter().join("\n")
}

fn render_sentiment(sentiment: &AggregateSentiment) -> String {
    match sentiment {
        AggregateSentiment::NoData => {
            metric_line(UI_TEXT.sentiment_label, UI_TEXT.sentiment_no_data, None)
        }
        AggregateSentiment::Scored {
            score,
            label,
            headline_count,
            ..
        } => metric_line(
            UI_TEXT.sentiment_label,
            &format!("{:.2}", score),
            Some(format!("{}, {} titulares", label, headline_count).as_str()),
        ),
    }
}

fn render_banner(evaluation: &Evaluation) -> String {
    match evaluation.signal.classification {
        Classification::Buy => format!("{} {}+ pips", UI_TEXT.buy_banner, evaluation.pip_threshold),
        Classification::Sell => {
            format!("{} {}+ pips", UI_TEXT.sell_banner, evaluation.pip_threshold)
        }
        Classification::None => UI_TEXT.waiting_banner.to_string(),
    }
}
