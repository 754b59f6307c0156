use kamentsa_core::dictionary::DictionaryEntry;
use kamentsa_core::preprocess::fold;

pub use kamentsa_config::validation::MAX_EDIT_DISTANCE;

pub const NO_SUGGESTIONS: &str = "No se encontraron sugerencias para esta palabra.";
pub const TRANSLATION_NOT_FOUND: &str = "Traducción no encontrada";

/// Levenshtein distance over chars, unit cost for insert, delete and substitute
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Fuzzy headword matching over a borrowed entry list.
///
/// `suggest` compares normalized forms while `translate` compares raw
/// strings for its fuzzy step, so the two can disagree on accented input.
pub struct Matcher<'a> {
    entries: &'a [DictionaryEntry],
    max_distance: usize,
}

impl<'a> Matcher<'a> {
    pub fn new(entries: &'a [DictionaryEntry], max_distance: usize) -> Self {
        Self {
            entries,
            max_distance,
        }
    }

    /// Correction or suggestion messages for `text`
    pub fn suggest(&self, text: &str) -> Vec<String> {
        let key = fold(text);

        let exact: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| fold(&entry.headword) == key)
            .map(|entry| format!("Corrección: {}", entry.headword))
            .collect();
        if !exact.is_empty() {
            return exact;
        }

        let close: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| levenshtein_distance(&key, &fold(&entry.headword)) <= self.max_distance)
            .map(|entry| {
                format!(
                    "Sugerencia: {} ({})",
                    entry.headword,
                    self.translate(&entry.headword)
                )
            })
            .collect();

        tracing::debug!("{} fuzzy suggestions for '{}'", close.len(), text);

        if close.is_empty() {
            vec![NO_SUGGESTIONS.to_string()]
        } else {
            close
        }
    }

    /// Spanish translation of a headword, a "did you mean" hint, or
    /// `TRANSLATION_NOT_FOUND`
    pub fn translate(&self, word: &str) -> String {
        let key = fold(word);

        if let Some(entry) = self.entries.iter().find(|e| fold(&e.headword) == key) {
            return entry
                .primary_translation()
                .unwrap_or(TRANSLATION_NOT_FOUND)
                .to_string();
        }

        let first_close = self
            .entries
            .iter()
            .find(|e| levenshtein_distance(word, &e.headword) <= self.max_distance);

        match first_close {
            Some(entry) => format!("¿Quisiste decir '{}'?", entry.headword),
            None => TRANSLATION_NOT_FOUND.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Vec<DictionaryEntry> {
        vec![
            DictionaryEntry::new("bëngbe").with_meaning("nuestro, nuestra"),
            DictionaryEntry::new("tabanok").with_meaning("pueblo"),
            DictionaryEntry::new("jajañ").with_equivalent("chagra", Some("español")),
            DictionaryEntry::new("uámana"),
        ]
    }

    #[test]
    fn distance_basics() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "ab"), 2);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("flaw", "lawn"), 2);
        assert_eq!(levenshtein_distance("jajañ", "jajan"), 1);
    }

    #[test]
    fn distance_is_a_metric() {
        let words = ["", "bëngbe", "bengbe", "tabanok", "taita", "mama", "ts̈ëngbe"];
        for a in words {
            assert_eq!(levenshtein_distance(a, a), 0);
            for b in words {
                let ab = levenshtein_distance(a, b);
                assert_eq!(ab, levenshtein_distance(b, a));
                for c in words {
                    assert!(ab <= levenshtein_distance(a, c) + levenshtein_distance(c, b));
                }
            }
        }
    }

    #[test]
    fn exact_normalized_match_is_a_correction() {
        let entries = lexicon();
        let matcher = Matcher::new(&entries, MAX_EDIT_DISTANCE);
        assert_eq!(matcher.suggest("bengbe"), vec!["Corrección: bëngbe".to_string()]);
        assert_eq!(matcher.suggest("JAJAÑ"), vec!["Corrección: jajañ".to_string()]);
    }

    #[test]
    fn close_words_are_suggested_with_translation() {
        let entries = lexicon();
        let matcher = Matcher::new(&entries, MAX_EDIT_DISTANCE);
        assert_eq!(
            matcher.suggest("tabanak"),
            vec!["Sugerencia: tabanok (pueblo)".to_string()]
        );
        assert_eq!(
            matcher.suggest("jaja"),
            vec!["Sugerencia: jajañ (chagra)".to_string()]
        );
    }

    #[test]
    fn nothing_close_yields_fallback() {
        let entries = lexicon();
        let matcher = Matcher::new(&entries, MAX_EDIT_DISTANCE);
        assert_eq!(matcher.suggest("zzzzzzzz"), vec![NO_SUGGESTIONS.to_string()]);

        let empty: Vec<DictionaryEntry> = Vec::new();
        assert_eq!(Matcher::new(&empty, 2).suggest("bëngbe"), vec![NO_SUGGESTIONS.to_string()]);
    }

    #[test]
    fn translate_exact_and_fuzzy() {
        let entries = lexicon();
        let matcher = Matcher::new(&entries, MAX_EDIT_DISTANCE);
        assert_eq!(matcher.translate("Bengbe"), "nuestro, nuestra");
        assert_eq!(matcher.translate("tabanoc"), "¿Quisiste decir 'tabanok'?");
        assert_eq!(matcher.translate("uamana"), TRANSLATION_NOT_FOUND);
        assert_eq!(matcher.translate("zzzzzzzz"), TRANSLATION_NOT_FOUND);
    }

    #[test]
    fn translate_fuzzy_step_compares_raw_forms() {
        let entries = vec![DictionaryEntry::new("ëëëb").with_meaning("x")];
        let matcher = Matcher::new(&entries, MAX_EDIT_DISTANCE);
        // Normalized distance is 1, raw distance is 4
        assert_eq!(matcher.translate("eeea"), TRANSLATION_NOT_FOUND);
        assert_eq!(matcher.suggest("eeea"), vec!["Sugerencia: ëëëb (x)".to_string()]);
    }
}
