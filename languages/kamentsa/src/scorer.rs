use std::collections::{HashMap, HashSet};

use kamentsa_core::dictionary::DictionaryEntry;
use kamentsa_core::preprocess::fold;
use kamentsa_core::types::QualityAssessment;
use serde::Serialize;

pub const BASE_SCORE: f64 = 0.7;

const STRUCTURE_WEIGHT: f64 = 0.1;
const CONCORDANCE_WEIGHT: f64 = 0.1;
const LENGTH_WEIGHT: f64 = 0.2;
const SENTENCE_COUNT_WEIGHT: f64 = 0.1;
const COVERAGE_WEIGHT: f64 = 0.15;
const DIVERSITY_WEIGHT: f64 = 0.05;
const REPETITION_WEIGHT: f64 = 0.1;
const CONNECTOR_WEIGHT: f64 = 0.05;
const CONTEXT_WEIGHT: f64 = 0.1;

/// Length bonus only applies from this many characters on
const MIN_LENGTH_FOR_BONUS: usize = 30;
const FULL_LENGTH: f64 = 150.0;
const FULL_SENTENCE_COUNT: f64 = 3.0;
/// Words seen more than this many times count as repeated
const REPEAT_LIMIT: usize = 2;
const FULL_REPETITION: f64 = 5.0;

pub const CONNECTORS: [&str; 6] = ["y", "pero", "o", "si", "cuando", "porque"];
const TERMINATORS: [char; 3] = ['.', '?', '!'];

pub const FEEDBACK_POOR: &str =
    "El texto necesita mejoras significativas en estructura y vocabulario.";
pub const FEEDBACK_FAIR: &str =
    "El texto es comprensible, pero puede mejorar su estructura y vocabulario.";
pub const FEEDBACK_GOOD: &str = "Buen texto: la estructura y el vocabulario son adecuados.";
pub const FEEDBACK_EXCELLENT: &str = "Excelente texto: estructura clara y vocabulario rico.";

/// Contribution of every factor; `total` is the clamped final score
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub structure: f64,
    pub concordance: f64,
    pub length: f64,
    pub sentence_count: f64,
    pub coverage: f64,
    pub diversity: f64,
    pub repetition_penalty: f64,
    pub connectors: f64,
    pub context: f64,
    pub total: f64,
}

pub fn feedback_for(score: f64) -> &'static str {
    if score < 0.5 {
        FEEDBACK_POOR
    } else if score < 0.7 {
        FEEDBACK_FAIR
    } else if score < 0.9 {
        FEEDBACK_GOOD
    } else {
        FEEDBACK_EXCELLENT
    }
}

/// Heuristic quality score.
///
/// Starts from `BASE_SCORE` and adds bounded bonuses for structure,
/// vocabulary and relevance, minus a bounded repetition penalty.
/// "Concordance" only compares word endings.
pub struct QualityScorer<'a> {
    entries: &'a [DictionaryEntry],
}

impl<'a> QualityScorer<'a> {
    pub fn new(entries: &'a [DictionaryEntry]) -> Self {
        Self { entries }
    }

    pub fn score(&self, text: &str, context: Option<&str>) -> QualityAssessment {
        let breakdown = self.breakdown(text, context);
        QualityAssessment {
            score: breakdown.total,
            feedback: vec![feedback_for(breakdown.total).to_string()],
        }
    }

    pub fn breakdown(&self, text: &str, context: Option<&str>) -> ScoreBreakdown {
        let sentences = sentences(text);
        let words = scoring_words(text);

        let mut breakdown = ScoreBreakdown {
            structure: STRUCTURE_WEIGHT * structure_ratio(&sentences),
            concordance: CONCORDANCE_WEIGHT * concordance_ratio(&words),
            sentence_count: SENTENCE_COUNT_WEIGHT
                * (sentences.len() as f64 / FULL_SENTENCE_COUNT).min(1.0),
            ..ScoreBreakdown::default()
        };

        // Raw length, surrounding whitespace included
        let length = text.chars().count();
        if length >= MIN_LENGTH_FOR_BONUS {
            breakdown.length = LENGTH_WEIGHT * (length as f64 / FULL_LENGTH).min(1.0);
        }

        if !words.is_empty() {
            let total = words.len() as f64;

            let headwords: HashSet<String> =
                self.entries.iter().map(|e| fold(&e.headword)).collect();
            let known = words.iter().filter(|w| headwords.contains(*w)).count();
            breakdown.coverage = COVERAGE_WEIGHT * known as f64 / total;

            let mut counts: HashMap<&str, usize> = HashMap::new();
            for word in &words {
                *counts.entry(word.as_str()).or_insert(0) += 1;
            }
            breakdown.diversity = DIVERSITY_WEIGHT * (counts.len() as f64 / total).min(1.0);

            let repeated = counts.values().filter(|&&n| n > REPEAT_LIMIT).count();
            breakdown.repetition_penalty =
                REPETITION_WEIGHT * (repeated as f64 / FULL_REPETITION).min(1.0);

            let used = CONNECTORS
                .iter()
                .filter(|c| counts.contains_key(**c))
                .count();
            breakdown.connectors = CONNECTOR_WEIGHT * used as f64 / CONNECTORS.len() as f64;

            if let Some(context) = context.filter(|c| !c.trim().is_empty()) {
                let context_words: HashSet<String> = scoring_words(context).into_iter().collect();
                let relevant = words.iter().filter(|w| context_words.contains(*w)).count();
                breakdown.context = CONTEXT_WEIGHT * relevant as f64 / total;
            }
        }

        let raw = BASE_SCORE
            + breakdown.structure
            + breakdown.concordance
            + breakdown.length
            + breakdown.sentence_count
            + breakdown.coverage
            + breakdown.diversity
            + breakdown.connectors
            + breakdown.context
            - breakdown.repetition_penalty;
        breakdown.total = raw.clamp(0.0, 1.0);

        tracing::debug!(
            "Quality {:.3} for {} words in {} sentences",
            breakdown.total,
            words.len(),
            sentences.len()
        );

        breakdown
    }
}

/// Sentences with their terminator kept; fragments without letters or
/// digits are dropped
fn sentences(text: &str) -> Vec<&str> {
    text.split_inclusive(TERMINATORS)
        .map(str::trim)
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .collect()
}

fn structure_ratio(sentences: &[&str]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let well_formed = sentences
        .iter()
        .filter(|s| {
            s.chars().next().is_some_and(char::is_uppercase)
                && s.ends_with(TERMINATORS)
        })
        .count();
    well_formed as f64 / sentences.len() as f64
}

/// Adjacent word pairs sharing an "a" or an "o" ending
fn concordance_ratio(words: &[String]) -> f64 {
    if words.len() < 2 {
        return 0.0;
    }
    let agreeing = words
        .windows(2)
        .filter(|pair| {
            (pair[0].ends_with('a') && pair[1].ends_with('a'))
                || (pair[0].ends_with('o') && pair[1].ends_with('o'))
        })
        .count();
    agreeing as f64 / (words.len() - 1) as f64
}

/// Folded whitespace tokens with surrounding punctuation removed
fn scoring_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| fold(w.trim_matches(|c: char| !c.is_alphanumeric())))
        .filter(|w| !w.is_empty())
        .collect()
}
