use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default input cleanup
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Compose so "e" + U+0308 and "ë" compare equal, keeping the marks
        text = canonical(&text);

        text = text.replace(['\n', '\r'], " ").trim().to_string();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Combining Diacritical Marks block (U+0300..=U+036F)
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Canonical decomposition followed by removal of combining diacritics.
///
/// Only for diacritic-insensitive comparison. Orthography checks must run on
/// the raw text, since this erases exactly the marks they look for.
pub fn normalize(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_diacritic(*c)).collect()
}

/// Comparison key: `normalize` plus lowercasing
pub fn fold(text: &str) -> String {
    normalize(text).to_lowercase()
}

/// NFC composition; keeps diacritics
pub fn canonical(text: &str) -> String {
    text.nfc().collect()
}

/// Whitespace tokenization
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_diaeresis() {
        assert_eq!(normalize("ts̈ëngbe"), "tsengbe");
        assert_eq!(normalize("Bëtscnaté"), "Betscnate");
        assert_eq!(normalize("jajañ"), "jajan");
    }

    #[test]
    fn normalize_is_idempotent() {
        for text in ["ts̈ëngbe", "Ñuñoa", "", "s\u{0308}\u{0301}a", "año ÄÖÜ"] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn fold_lowercases() {
        assert_eq!(fold("BËNGBE"), "bengbe");
    }

    #[test]
    fn canonical_composes_decomposed_input() {
        assert_eq!(canonical("e\u{0308}"), "ë");
        // s̈ has no precomposed form
        assert_eq!(canonical("s\u{0308}"), "s\u{0308}");
    }

    #[test]
    fn preprocessor_trims_and_joins_lines() {
        let text = DefaultPreprocessor.process("  bëngbe\njajañ \r\n");
        assert_eq!(text, "bëngbe jajañ");
    }
}
