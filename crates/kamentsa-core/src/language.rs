use std::collections::HashMap;

use crate::types::{QualityAssessment, ValidationResult};

/// Text processing and lookup interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-3 code, e.g. "kbh")
    fn language_code(&self) -> &str;

    /// Normalize text for diacritic-insensitive comparison
    fn normalize(&self, text: &str) -> String;

    /// Break text into processable tokens
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Look up a token in the dictionary
    fn lookup(&self, token: &Token) -> Vec<LookupResult>;
}

/// Optional trait for languages with orthography and quality validation
pub trait TextValidator: Send + Sync {
    /// Validate text against orthography rules, quality heuristics and the lexicon
    fn validate_text(&self, text: &str, context: Option<&str>) -> ValidationResult;

    /// Heuristic quality of the text, optionally relative to a context
    fn score(&self, text: &str, context: Option<&str>) -> QualityAssessment;
}

#[derive(Debug, Clone)]
pub struct Token {
    pub surface: String,
    pub normalized: String,
    /// Character offset of the token in the source text
    pub position: usize,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct LookupResult {
    pub term: String,
    pub readings: Vec<String>,
    pub definitions: Vec<String>,
    pub metadata: HashMap<String, String>,
}
