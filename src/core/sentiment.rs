use crate::models::Mood;
use regex::Regex;
use std::collections::HashMap;

/// Text → polarity in `[-1.0, 1.0]`.
pub trait SentimentAnalyzer {
    fn polarity(&self, text: &str) -> f64;
}

const POSITIVE: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("wonderful", 1.0),
    ("fantastic", 0.4),
    ("happy", 0.8),
    ("glad", 0.5),
    ("joy", 0.8),
    ("love", 0.5),
    ("like", 0.3),
    ("nice", 0.6),
    ("fine", 0.4),
    ("calm", 0.3),
    ("relaxed", 0.4),
    ("excited", 0.4),
    ("productive", 0.5),
    ("motivated", 0.5),
    ("energetic", 0.4),
    ("confident", 0.5),
    ("proud", 0.8),
    ("grateful", 0.6),
    ("thankful", 0.5),
    ("better", 0.5),
    ("best", 1.0),
    ("fun", 0.3),
    ("positive", 0.2),
    ("satisfied", 0.5),
    ("cheerful", 0.6),
];

const NEGATIVE: &[(&str, f64)] = &[
    ("bad", -0.7),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("sad", -0.5),
    ("unhappy", -0.6),
    ("angry", -0.5),
    ("annoyed", -0.4),
    ("upset", -0.5),
    ("tired", -0.4),
    ("exhausted", -0.6),
    ("stressed", -0.6),
    ("stress", -0.5),
    ("anxious", -0.5),
    ("worried", -0.5),
    ("afraid", -0.6),
    ("scared", -0.6),
    ("overwhelmed", -0.7),
    ("frustrated", -0.6),
    ("hate", -0.8),
    ("lonely", -0.5),
    ("bored", -0.5),
    ("sick", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("difficult", -0.5),
    ("hard", -0.3),
    ("problem", -0.3),
    ("negative", -0.3),
    ("miserable", -1.0),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "nothing", "neither", "nor"];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("extremely", 1.3),
    ("super", 1.3),
];

/// Small lexicon scorer: averages word polarities, with negation and
/// intensifier handling for the word that follows them.
pub struct LexiconAnalyzer {
    lexicon: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
    token_re: Regex,
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconAnalyzer {
    pub fn new() -> Self {
        let lexicon = POSITIVE.iter().chain(NEGATIVE.iter()).copied().collect();
        let intensifiers = INTENSIFIERS.iter().copied().collect();
        // Literal pattern, compiling it cannot fail.
        let token_re = Regex::new(r"[a-z]+(?:'[a-z]+)?").unwrap();

        Self {
            lexicon,
            intensifiers,
            token_re,
        }
    }

    fn is_negation(word: &str) -> bool {
        NEGATIONS.contains(&word) || word.ends_with("n't")
    }
}

impl SentimentAnalyzer for LexiconAnalyzer {
    fn polarity(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();

        let mut scores: Vec<f64> = Vec::new();
        let mut negate = false;
        let mut boost = 1.0;

        for m in self.token_re.find_iter(&lower) {
            let word = m.as_str();

            if Self::is_negation(word) {
                negate = true;
                continue;
            }
            if let Some(factor) = self.intensifiers.get(word) {
                boost *= factor;
                continue;
            }
            if let Some(base) = self.lexicon.get(word) {
                let mut score = base * boost;
                if negate {
                    score *= -0.5;
                }
                scores.push(score);
                negate = false;
                boost = 1.0;
            }
        }

        if scores.is_empty() {
            return 0.0;
        }

        let avg = scores.iter().sum::<f64>() / scores.len() as f64;
        avg.clamp(-1.0, 1.0)
    }
}

/// Positive → Happy, negative → Sad, exactly neutral → Fear.
pub fn mood_from_polarity(polarity: f64) -> Mood {
    if polarity > 0.0 {
        Mood::Happy
    } else if polarity < 0.0 {
        Mood::Sad
    } else {
        Mood::Fear
    }
}
