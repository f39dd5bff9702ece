//! Rule-based polarity scorer over a small bilingual (English/Spanish) market lexicon.

use std::collections::{HashMap, HashSet};

use super::sentiment::PolarityScorer;

// Entries are lowercase without diacritics; tokens are folded the same way before lookup.
const POSITIVE_WORDS: &[(&str, f64)] = &[
    // English
    ("bullish", 0.8),
    ("surge", 0.7),
    ("surges", 0.7),
    ("rally", 0.7),
    ("rallies", 0.7),
    ("soar", 0.8),
    ("soars", 0.8),
    ("gain", 0.5),
    ("gains", 0.5),
    ("growth", 0.6),
    ("rise", 0.3),
    ("rises", 0.3),
    ("strong", 0.5),
    ("stronger", 0.5),
    ("strengthens", 0.5),
    ("optimistic", 0.6),
    ("confident", 0.5),
    ("recovery", 0.5),
    ("rebound", 0.5),
    ("upgrade", 0.6),
    ("beat", 0.4),
    ("beats", 0.4),
    ("record", 0.3),
    ("boost", 0.5),
    ("stable", 0.2),
    ("good", 0.7),
    ("positive", 0.5),
    // Spanish
    ("alcista", 0.8),
    ("sube", 0.3),
    ("suben", 0.3),
    ("subida", 0.3),
    ("dispara", 0.6),
    ("fortalece", 0.5),
    ("fortalecen", 0.5),
    ("fuerte", 0.5),
    ("gana", 0.5),
    ("ganancias", 0.5),
    ("crecimiento", 0.6),
    ("recuperacion", 0.5),
    ("repunta", 0.5),
    ("maximos", 0.2),
    ("optimismo", 0.6),
    ("estable", 0.2),
    ("positivo", 0.5),
    ("mejora", 0.5),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    // English
    ("bearish", -0.8),
    ("crash", -0.9),
    ("plunge", -0.8),
    ("plunges", -0.8),
    ("drop", -0.6),
    ("drops", -0.6),
    ("fall", -0.5),
    ("falls", -0.5),
    ("decline", -0.6),
    ("loss", -0.6),
    ("losses", -0.6),
    ("weak", -0.5),
    ("weaker", -0.5),
    ("weakens", -0.5),
    ("fear", -0.6),
    ("fears", -0.6),
    ("crisis", -0.8),
    ("recession", -0.8),
    ("inflation", -0.3),
    ("uncertainty", -0.5),
    ("downgrade", -0.6),
    ("miss", -0.5),
    ("misses", -0.5),
    ("default", -0.7),
    ("bad", -0.7),
    ("negative", -0.5),
    // Spanish
    ("bajista", -0.8),
    ("baja", -0.3),
    ("bajan", -0.3),
    ("cae", -0.5),
    ("caen", -0.5),
    ("caida", -0.6),
    ("desplome", -0.9),
    ("debilita", -0.5),
    ("debil", -0.5),
    ("perdidas", -0.6),
    ("recesion", -0.8),
    ("inflacion", -0.3),
    ("minimos", -0.2),
    ("temor", -0.6),
    ("incertidumbre", -0.5),
    ("negativo", -0.5),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "without", "nor", "cannot", "dont", "doesnt", "isnt", "wont", "nunca",
    "sin", "ni", "jamas", "tampoco",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("sharply", 1.4),
    ("strongly", 1.3),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("muy", 1.3),
    ("fuertemente", 1.4),
    ("extremadamente", 1.5),
    ("ligeramente", 0.5),
    ("levemente", 0.5),
];

// A negated word keeps half its strength with the sign flipped.
const NEGATION_FACTOR: f64 = -0.5;

/// Averages the polarity of every lexicon word found in the text.
///
/// A negator flips and halves the next scored word; an intensifier scales it.
/// Text with no lexicon words scores 0.0.
pub struct LexiconScorer {
    words: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            words: POSITIVE_WORDS
                .iter()
                .chain(NEGATIVE_WORDS)
                .copied()
                .collect(),
            negations: NEGATIONS.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    /// Add or override a lexicon entry. `word` must already be lowercase and unaccented.
    pub fn with_word(mut self, word: &'static str, polarity: f64) -> Self {
        self.words.insert(word, polarity.clamp(-1.0, 1.0));
        self
    }

    pub fn polarity(&self, text: &str) -> f64 {
        let mut matched: Vec<f64> = Vec::new();
        let mut negate_next = false;
        let mut intensity = 1.0;

        for token in text.split_whitespace().map(normalize_token) {
            if token.is_empty() {
                continue;
            }
            if self.negations.contains(token.as_str()) {
                negate_next = true;
                continue;
            }
            if let Some(&mult) = self.intensifiers.get(token.as_str()) {
                intensity = mult;
                continue;
            }
            if let Some(&score) = self.words.get(token.as_str()) {
                let mut adjusted = score * intensity;
                if negate_next {
                    adjusted *= NEGATION_FACTOR;
                }
                matched.push(adjusted.clamp(-1.0, 1.0));
                negate_next = false;
                intensity = 1.0;
            }
        }

        if matched.is_empty() {
            return 0.0;
        }
        let total: f64 = matched.iter().sum();
        (total / matched.len() as f64).clamp(-1.0, 1.0)
    }
}

impl PolarityScorer for LexiconScorer {
    fn score_text(&self, text: &str) -> f64 {
        self.polarity(text)
    }
}

// Lowercase, drop surrounding punctuation and apostrophes, fold Spanish diacritics.
fn normalize_token(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter_map(|c| match c {
            'á' | 'à' | 'ä' => Some('a'),
            'é' | 'è' | 'ë' => Some('e'),
            'í' | 'ì' | 'ï' => Some('i'),
            'ó' | 'ò' | 'ö' => Some('o'),
            'ú' | 'ù' | 'ü' => Some('u'),
            'ñ' => Some('n'),
            c if c.is_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn unknown_text_is_neutral() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.polarity("The committee meets on Tuesday"), 0.0);
        assert_eq!(scorer.polarity(""), 0.0);
    }

    #[test]
    fn averages_matched_words() {
        let scorer = LexiconScorer::new();
        // rally 0.7, fears -0.6
        assert!(approx_eq(scorer.polarity("Stocks rally despite fears"), 0.05));
    }

    #[test]
    fn folds_case_punctuation_and_accents() {
        let scorer = LexiconScorer::new();
        assert!(approx_eq(scorer.polarity("¡INFLACIÓN!"), -0.3));
        assert!(approx_eq(scorer.polarity("Recuperación, fuerte."), 0.5));
    }

    #[test]
    fn negation_flips_and_halves() {
        let scorer = LexiconScorer::new();
        assert!(approx_eq(scorer.polarity("not bullish"), -0.4));
        assert!(approx_eq(scorer.polarity("sin crisis"), 0.4));
    }

    #[test]
    fn intensifier_scales_next_word() {
        let scorer = LexiconScorer::new();
        assert!(approx_eq(scorer.polarity("very weak"), -0.65));
        assert!(approx_eq(scorer.polarity("slightly weak"), -0.25));
        // bearish capped at -1.0, crash -0.9
        assert!(approx_eq(scorer.polarity("extremely bearish crash"), -0.95));
    }

    #[test]
    fn default_headlines_lean_bullish() {
        let scorer = LexiconScorer::new();
        assert!(approx_eq(scorer.polarity("La Fed sube tasas"), 0.3));
        assert!(approx_eq(scorer.polarity("El euro se fortalece"), 0.5));
        // inflacion -0.3, maximos 0.2
        assert!(approx_eq(scorer.polarity("Inflación en máximos"), -0.05));
    }

    #[test]
    fn custom_words_override_lexicon() {
        let scorer = LexiconScorer::new().with_word("hawkish", 0.4);
        assert!(approx_eq(scorer.score_text("Hawkish Fed"), 0.4));
        let clamped = LexiconScorer::new().with_word("moon", 5.0);
        assert!(approx_eq(clamped.score_text("moon"), 1.0));
    }

    #[test]
    fn output_stays_in_range() {
        let scorer = LexiconScorer::new();
        for text in [
            "extremely extremely bullish soar surge",
            "never never crash",
            "muy fuertemente desplome",
        ] {
            let p = scorer.polarity(text);
            assert!((-1.0..=1.0).contains(&p), "{} -> {}", text, p);
        }
    }
}
