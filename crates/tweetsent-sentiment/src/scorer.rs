//! Lexicon-based polarity scorer.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Maps text to a polarity score in `[-1.0, 1.0]`.
///
/// Implementations must be pure with respect to their inputs so a classifier
/// can share one scorer across threads.
pub trait Scorer: Send + Sync {
    fn score(&self, text: &str) -> f64;
}

/// General-purpose word weights.
///
/// Keys are lowercase words. Positive weights signal positive sentiment,
/// negative weights negative sentiment.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("fantastic", 0.4),
    ("great", 0.8),
    ("good", 0.7),
    ("nice", 0.6),
    ("happy", 0.8),
    ("glad", 0.5),
    ("excited", 0.375),
    ("exciting", 0.3),
    ("best", 1.0),
    ("better", 0.5),
    ("excellent", 1.0),
    ("wonderful", 1.0),
    ("perfect", 1.0),
    ("beautiful", 0.85),
    ("easy", 0.43),
    ("enjoy", 0.4),
    ("fun", 0.3),
    ("special", 0.36),
    ("powerful", 0.3),
    ("sure", 0.25),
    ("recommend", 0.4),
    ("thanks", 0.2),
    ("win", 0.4),
    ("okay", 0.05),
    ("ok", 0.05),
    // Negative signals
    ("hate", -0.8),
    ("terrible", -1.0),
    ("worst", -1.0),
    ("worse", -0.4),
    ("bad", -0.7),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("sad", -0.5),
    ("angry", -0.5),
    ("poor", -0.4),
    ("boring", -1.0),
    ("ugly", -0.7),
    ("annoying", -0.8),
    ("broken", -0.4),
    ("useless", -0.5),
    ("stupid", -0.8),
    ("wrong", -0.5),
    ("difficult", -0.5),
    ("failed", -0.4),
    ("problem", -0.3),
    ("scared", -0.4),
    ("confused", -0.4),
    ("corruption", -0.5),
    ("slow", -0.3),
    ("waste", -0.2),
    ("long", -0.05),
];

/// Words that scale the weight of the sentiment word right after them.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("too", 1.3),
    ("super", 1.4),
    ("extremely", 1.5),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "nothing"];

/// Applied to a sentiment weight preceded by a negation.
const NEGATION_FACTOR: f64 = -0.5;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}]+(?:'[\p{L}]+)*").expect("valid token regex"));

static DEFAULT_SCORER: LazyLock<LexiconScorer> = LazyLock::new(LexiconScorer::new);

/// Scores text as the mean weight of its lexicon words, adjusted for a
/// preceding intensifier or negation.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    weights: HashMap<&'static str, f64>,
}

impl LexiconScorer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: LEXICON.iter().copied().collect(),
        }
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        let mut sum = 0.0_f64;
        let mut matched = 0_usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&weight) = self.weights.get(token.as_str()) else {
                continue;
            };

            let mut value = weight;
            // Index of the first token of the modified phrase.
            let mut start = i;
            if let Some(factor) = i
                .checked_sub(1)
                .and_then(|prev| intensifier_factor(&tokens[prev]))
            {
                value = (value * factor).clamp(-1.0, 1.0);
                start = i - 1;
            }
            if start > 0 && is_negation(&tokens[start - 1]) {
                value *= NEGATION_FACTOR;
            }

            sum += value;
            matched += 1;
        }

        if matched == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let mean = sum / matched as f64;
        mean.clamp(-1.0, 1.0)
    }
}

/// Score a text string with the built-in lexicon.
///
/// Returns `0.0` for empty text or text with no lexicon words.
#[must_use]
pub fn lexicon_score(text: &str) -> f64 {
    DEFAULT_SCORER.score(text)
}

/// Lowercase word tokens; apostrophes inside words are kept so `don't`
/// stays one token.
fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.to_lowercase().replace('\u{2019}', "'");
    TOKEN_RE
        .find_iter(&normalized)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn intensifier_factor(token: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|&(_, factor)| factor)
}

fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.ends_with("n't")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(lexicon_score(""), 0.0);
    }

    #[test]
    fn whitespace_only_returns_zero() {
        assert_eq!(lexicon_score("   "), 0.0);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert_eq!(lexicon_score("the quick brown fox"), 0.0);
    }

    #[test]
    fn love_is_positive() {
        let score = lexicon_score("I love this!");
        assert!(score > 0.1, "expected positive score, got {score}");
    }

    #[test]
    fn hate_is_negative() {
        let score = lexicon_score("I hate this.");
        assert!(score < -0.1, "expected negative score, got {score}");
    }

    #[test]
    fn okay_is_neutral() {
        let score = lexicon_score("It is okay.");
        assert!(
            (-0.1..=0.1).contains(&score),
            "expected neutral score, got {score}"
        );
    }

    #[test]
    fn score_is_mean_of_matched_words() {
        // great (0.8) + bad (-0.7) => mean 0.05
        let score = lexicon_score("great start, bad ending");
        assert!((score - 0.05).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn negation_flips_and_dampens() {
        // not + bad (-0.7) => 0.35
        let score = lexicon_score("not bad");
        assert!((score - 0.35).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn contraction_counts_as_negation() {
        let score = lexicon_score("I don't like waiting, it isn't good");
        assert!(score < 0.0, "expected negated score, got {score}");
    }

    #[test]
    fn curly_apostrophe_contraction_counts_as_negation() {
        let score = lexicon_score("it isn\u{2019}t good");
        assert!(score < 0.0, "expected negated score, got {score}");
    }

    #[test]
    fn intensifier_scales_weight() {
        let plain = lexicon_score("good");
        let boosted = lexicon_score("very good");
        assert!(boosted > plain, "expected {boosted} > {plain}");
    }

    #[test]
    fn negated_intensified_phrase() {
        // not very good => 0.7 * 1.3 * -0.5
        let score = lexicon_score("not very good");
        assert!((score - (-0.455)).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn intensified_weight_is_clamped() {
        assert_eq!(lexicon_score("extremely awesome"), 1.0);
        assert_eq!(lexicon_score("so terrible"), -1.0);
    }

    #[test]
    fn punctuation_and_case_ignored() {
        assert_eq!(lexicon_score("GREAT!!!"), lexicon_score("great"));
    }

    #[test]
    fn scores_stay_in_range() {
        for text in [
            "best best best awesome perfect",
            "worst terrible awful horrible",
            "never not no",
        ] {
            let score = lexicon_score(text);
            assert!((-1.0..=1.0).contains(&score), "{text:?} => {score}");
        }
    }

    #[test]
    fn scorer_trait_matches_free_function() {
        let scorer = LexiconScorer::default();
        let text = "This app is fantastic and easy to use!";
        assert_eq!(scorer.score(text), lexicon_score(text));
    }
}
