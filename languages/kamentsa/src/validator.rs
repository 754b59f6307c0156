use std::sync::Arc;

use kamentsa_config::ValidityPolicy;
use kamentsa_config::validation::ValidationConfig;
pub use kamentsa_config::validation::MIN_VALID_QUALITY;
use kamentsa_core::dictionary::{Dictionary, DictionaryEntry};
use kamentsa_core::language::TextValidator;
use kamentsa_core::preprocess::fold;
use kamentsa_core::types::{QualityAssessment, ValidationResult};

use crate::dictionary::KamentsaDictionary;
use crate::matcher::Matcher;
use crate::orthography;
use crate::scorer::{QualityScorer, ScoreBreakdown};

/// Runs orthography rules, the quality scorer and the matcher over one text
pub struct KamentsaValidator {
    dictionary: Arc<KamentsaDictionary>,
    config: ValidationConfig,
}

impl KamentsaValidator {
    pub fn new(dictionary: Arc<KamentsaDictionary>, config: ValidationConfig) -> Self {
        Self { dictionary, config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Per-factor quality contributions, for diagnostics
    pub fn explain(&self, text: &str, context: Option<&str>) -> ScoreBreakdown {
        self.dictionary.ensure_loaded();
        let entries = self.dictionary.entries();
        QualityScorer::new(&entries).breakdown(text, context)
    }

    /// The whole input, untrimmed, must fold to a headword
    fn headword_matches(entries: &[DictionaryEntry], text: &str) -> bool {
        let key = fold(text);
        entries.iter().any(|e| fold(&e.headword) == key)
    }
}

impl TextValidator for KamentsaValidator {
    fn validate_text(&self, text: &str, context: Option<&str>) -> ValidationResult {
        self.dictionary.ensure_loaded();
        let entries = self.dictionary.entries();

        let errors = orthography::check(text);

        let quality = QualityScorer::new(&entries).score(text, context);
        let mut suggestions = quality.feedback.clone();

        if !errors.is_empty() || orthography::needs_diacritic_review(text) {
            let matcher = Matcher::new(&entries, self.config.max_edit_distance);
            suggestions.extend(matcher.suggest(text));
        }

        let headword_ok = match self.config.policy {
            ValidityPolicy::WholeTextHeadword => Self::headword_matches(&entries, text),
            ValidityPolicy::GrammarAndQuality => true,
        };
        let is_valid =
            errors.is_empty() && quality.score >= self.config.min_quality && headword_ok;

        tracing::debug!(
            "Validated {} chars: valid={} errors={} quality={:.3}",
            text.chars().count(),
            is_valid,
            errors.len(),
            quality.score
        );

        ValidationResult {
            is_valid,
            errors,
            suggestions,
        }
    }

    fn score(&self, text: &str, context: Option<&str>) -> QualityAssessment {
        self.dictionary.ensure_loaded();
        let entries = self.dictionary.entries();
        QualityScorer::new(&entries).score(text, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orthography::{ERR_S_DIAERESIS, ERR_TS_DIAERESIS};
    use crate::scorer::FEEDBACK_EXCELLENT;

    fn validator(policy: ValidityPolicy) -> KamentsaValidator {
        let dictionary = Arc::new(KamentsaDictionary::from_entries(vec![
            DictionaryEntry::new("mama").with_meaning("madre"),
            DictionaryEntry::new("tsabe").with_meaning("bueno"),
            DictionaryEntry::new("bëngbe").with_meaning("nuestro"),
        ]));
        let config = ValidationConfig {
            policy,
            ..ValidationConfig::default()
        };
        KamentsaValidator::new(dictionary, config)
    }

    #[test]
    fn headword_with_clean_orthography_is_valid() {
        let result = validator(ValidityPolicy::WholeTextHeadword).validate_text("mama", None);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.suggestions, vec![FEEDBACK_EXCELLENT.to_string()]);
    }

    #[test]
    fn headword_match_ignores_case_and_diacritics() {
        let result = validator(ValidityPolicy::WholeTextHeadword).validate_text("Bengbe", None);
        assert!(result.is_valid);
    }

    #[test]
    fn surrounding_whitespace_breaks_headword_match() {
        let v = validator(ValidityPolicy::WholeTextHeadword);
        let result = v.validate_text(" mama ", None);
        assert!(result.errors.is_empty());
        assert!(!result.is_valid);

        let relaxed = validator(ValidityPolicy::GrammarAndQuality).validate_text(" mama ", None);
        assert!(relaxed.is_valid);
    }

    #[test]
    fn sentence_is_invalid_under_whole_text_policy() {
        let v = validator(ValidityPolicy::WholeTextHeadword);
        let result = v.validate_text("mama bëngbe", None);
        assert!(result.errors.is_empty());
        assert!(!result.is_valid);

        let relaxed = validator(ValidityPolicy::GrammarAndQuality).validate_text("mama bëngbe", None);
        assert!(relaxed.is_valid);
    }

    #[test]
    fn errors_come_with_suggestions() {
        let result = validator(ValidityPolicy::WholeTextHeadword).validate_text("tsabe", None);
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![ERR_TS_DIAERESIS.to_string(), ERR_S_DIAERESIS.to_string()]
        );
        assert_eq!(result.suggestions.len(), 2);
        assert_eq!(result.suggestions[1], "Corrección: tsabe");
    }

    #[test]
    fn quality_threshold_applies() {
        let mut v = validator(ValidityPolicy::WholeTextHeadword);
        assert_eq!(v.config().min_quality, MIN_VALID_QUALITY);
        v.config.min_quality = 0.99;
        assert!(!v.validate_text("mama", None).is_valid);
    }

    #[test]
    fn empty_text_is_invalid_without_panicking() {
        let result = validator(ValidityPolicy::WholeTextHeadword).validate_text("", None);
        assert!(!result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn empty_store_is_refilled_before_validation() {
        let dictionary = Arc::new(KamentsaDictionary::from_entries(Vec::new()));
        let v = KamentsaValidator::new(Arc::clone(&dictionary), ValidationConfig::default());
        let result = v.validate_text("mama", None);
        assert!(!dictionary.is_empty());
        // "mama" is part of the seed lexicon
        assert!(result.is_valid);
    }
}
