use std::sync::Arc;

use kamentsa_config::Config;
use kamentsa_config::validation::ValidationConfig;
use kamentsa_core::dictionary::{Dictionary, DictionaryEntry, DictionaryMetadata};
use kamentsa_core::language::{LanguageProcessor, LookupResult, Token, TextValidator};
use kamentsa_core::preprocess::{DefaultPreprocessor, Preprocessor, fold, normalize};
use kamentsa_core::types::{QualityAssessment, ValidationResult};

use crate::dictionary::{DictionarySource, KamentsaDictionary};
use crate::matcher::Matcher;
use crate::scorer::ScoreBreakdown;
use crate::search;
use crate::validator::KamentsaValidator;

/// Kamëntsá language processor: the entry point callers use for validation
/// and lookup
pub struct KamentsaProcessor {
    dictionary: Arc<KamentsaDictionary>,
    validator: KamentsaValidator,
}

impl KamentsaProcessor {
    /// Processor over the embedded lexicon with default settings
    pub fn new() -> Self {
        Self::with_dictionary(
            KamentsaDictionary::load(DictionarySource::Embedded),
            ValidationConfig::default(),
        )
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_dictionary(
            KamentsaDictionary::from_config(&config.dictionary),
            config.validation.clone(),
        )
    }

    pub fn with_dictionary(dictionary: KamentsaDictionary, config: ValidationConfig) -> Self {
        let dictionary = Arc::new(dictionary);
        tracing::info!(
            "Kamëntsá processor ready with {} entries from {}",
            dictionary.entry_count(),
            dictionary.source().describe()
        );
        Self {
            validator: KamentsaValidator::new(Arc::clone(&dictionary), config),
            dictionary,
        }
    }

    pub fn dictionary(&self) -> &KamentsaDictionary {
        &self.dictionary
    }

    pub fn metadata(&self) -> DictionaryMetadata {
        self.dictionary.metadata()
    }

    /// First entry matching `query`, directly or through an equivalent
    pub fn search(&self, query: &str) -> Option<DictionaryEntry> {
        self.dictionary.ensure_loaded();
        let query = DefaultPreprocessor.process(query);
        search::search(&self.dictionary.entries(), &query)
    }

    pub fn suggest(&self, text: &str) -> Vec<String> {
        self.dictionary.ensure_loaded();
        let entries = self.dictionary.entries();
        Matcher::new(&entries, self.validator.config().max_edit_distance).suggest(text)
    }

    pub fn translate(&self, word: &str) -> String {
        self.dictionary.ensure_loaded();
        let entries = self.dictionary.entries();
        Matcher::new(&entries, self.validator.config().max_edit_distance).translate(word)
    }

    pub fn explain(&self, text: &str, context: Option<&str>) -> ScoreBreakdown {
        self.validator.explain(text, context)
    }
}

impl Default for KamentsaProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextValidator for KamentsaProcessor {
    fn validate_text(&self, text: &str, context: Option<&str>) -> ValidationResult {
        self.validator.validate_text(text, context)
    }

    fn score(&self, text: &str, context: Option<&str>) -> QualityAssessment {
        self.validator.score(text, context)
    }
}

impl LanguageProcessor for KamentsaProcessor {
    fn language_code(&self) -> &str {
        "kbh"
    }

    fn normalize(&self, text: &str) -> String {
        normalize(text)
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut current = String::new();
        let mut start = 0;

        for c in text.chars() {
            if c.is_whitespace() {
                if !current.is_empty() {
                    tokens.push(Token {
                        normalized: fold(&current),
                        surface: std::mem::take(&mut current),
                        position: start,
                    });
                }
            } else {
                if current.is_empty() {
                    start = position;
                }
                current.push(c);
            }
            position += 1;
        }

        if !current.is_empty() {
            tokens.push(Token {
                normalized: fold(&current),
                surface: current,
                position: start,
            });
        }

        tokens
    }

    fn lookup(&self, token: &Token) -> Vec<LookupResult> {
        self.dictionary.ensure_loaded();
        self.dictionary
            .entries()
            .iter()
            .filter(|entry| fold(&entry.headword) == token.normalized)
            .map(DictionaryEntry::to_lookup_result)
            .collect()
    }
}
