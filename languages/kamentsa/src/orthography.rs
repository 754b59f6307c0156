use kamentsa_core::preprocess::{canonical, words};

const DIAERESIS: char = '\u{0308}';

pub const TS_WITH_DIAERESIS: &str = "ts\u{0308}";
pub const S_WITH_DIAERESIS: &str = "s\u{0308}";

pub const PERMITTED_INITIAL_VOWELS: [&str; 6] = ["a", "e", "i", "o", "u", "ë"];
pub const PERMITTED_INITIAL_CONSONANTS: [&str; 11] =
    ["b", "d", "g", "k", "m", "n", "p", "s", "t", "ts", "y"];

pub const ERR_TS_DIAERESIS: &str =
    "Falta la diéresis en 'ts': en Kamëntsá este sonido se escribe 'ts̈'.";
pub const ERR_S_DIAERESIS: &str =
    "Falta la diéresis en 's': en Kamëntsá este sonido se escribe 's̈'.";
pub const ERR_E_DIAERESIS: &str =
    "Falta la diéresis en 'e': junto a 's̈' o 'ts̈' se espera la vocal 'ë'.";
pub const ERR_TS_PLACEMENT: &str =
    "Ubicación incorrecta de la diéresis: las palabras terminadas en 'ts̈' se escriben con 'ëts̈'.";
pub const ERR_S_FOLLOWER: &str = "Después de 's̈' debe seguir la vocal 'ë' o 'ä'.";

/// Whole-text diacritic presence checks.
///
/// Each check looks at the text as a whole: one correct occurrence anywhere
/// silences the check even if other words are wrong.
pub fn check_special_characters(text: &str) -> Vec<String> {
    let text = canonical(text);
    let mut errors = Vec::new();

    if text.contains("ts") && !text.contains(TS_WITH_DIAERESIS) {
        errors.push(ERR_TS_DIAERESIS.to_string());
    }

    if text.contains('s') && !text.contains(S_WITH_DIAERESIS) {
        errors.push(ERR_S_DIAERESIS.to_string());
    }

    let has_s_diaeresis = text.contains(S_WITH_DIAERESIS) || text.contains(TS_WITH_DIAERESIS);
    if text.contains('e') && !text.contains('ë') && has_s_diaeresis {
        errors.push(ERR_E_DIAERESIS.to_string());
    }

    errors
}

/// Word-level rules: `ëts̈` endings, the vowel after `s̈`, permitted initials
pub fn check_grammar(text: &str) -> Vec<String> {
    let text = canonical(text);
    let tokens = words(&text);
    let mut errors = Vec::new();

    // Reported once no matter how many words break it
    if tokens.iter().any(|word| has_misplaced_ts_diaeresis(word)) {
        errors.push(ERR_TS_PLACEMENT.to_string());
    }

    if errors.is_empty() && has_bad_s_diaeresis_follower(&text) {
        errors.push(ERR_S_FOLLOWER.to_string());
    }

    for word in &tokens {
        if !has_permitted_initial(word) {
            errors.push(format!(
                "La palabra '{}' comienza con un sonido no permitido. Consonantes iniciales permitidas: {}.",
                word,
                PERMITTED_INITIAL_CONSONANTS.join(", ")
            ));
        }
    }

    errors
}

/// Special-character errors followed by grammar errors.
///
/// Runs on NFC text so both input forms of `ë` behave the same. Never strip
/// diacritics before calling: that removes the marks under test.
pub fn check(text: &str) -> Vec<String> {
    let mut errors = check_special_characters(text);
    errors.extend(check_grammar(text));
    errors
}

/// True when the text has an `s` without a diaeresis on it, wherever other
/// words stand.
pub fn needs_diacritic_review(text: &str) -> bool {
    let chars: Vec<char> = canonical(text).chars().collect();
    chars
        .iter()
        .enumerate()
        .any(|(i, c)| *c == 's' && chars.get(i + 1) != Some(&DIAERESIS))
}

fn has_misplaced_ts_diaeresis(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    if len < 3 || !chars.ends_with(&['t', 's', DIAERESIS]) {
        return false;
    }
    // A bare "ts̈" has nothing before the suffix, which is not an "ë" either
    len == 3 || chars[len - 4] != 'ë'
}

fn has_bad_s_diaeresis_follower(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars.windows(2).enumerate().any(|(i, pair)| {
        pair == ['s', DIAERESIS] && !matches!(chars.get(i + 2), Some('ë') | Some('ä'))
    })
}

fn has_permitted_initial(word: &str) -> bool {
    let Some(first) = word.chars().next() else {
        return true;
    };
    let first: String = first.to_lowercase().collect();
    PERMITTED_INITIAL_VOWELS.contains(&first.as_str())
        || PERMITTED_INITIAL_CONSONANTS.contains(&first.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_ts_diaeresis_passes() {
        assert!(check_special_characters("ts̈ëngbe").is_empty());
    }

    #[test]
    fn decomposed_input_is_treated_like_composed() {
        assert!(check_special_characters("ts\u{0308}e\u{0308}ngbe").is_empty());
    }

    #[test]
    fn bare_ts_is_flagged() {
        let errors = check_special_characters("tsengbe");
        assert_eq!(errors, vec![ERR_TS_DIAERESIS.to_string(), ERR_S_DIAERESIS.to_string()]);
    }

    #[test]
    fn bare_e_flagged_only_next_to_s_diaeresis() {
        assert_eq!(
            check_special_characters("s̈empre"),
            vec![ERR_E_DIAERESIS.to_string()]
        );
        assert!(check_special_characters("mame").is_empty());
    }

    #[test]
    fn one_correct_occurrence_masks_others() {
        // "tsabe" is wrong on its own, but the text also has "ts̈"
        assert!(check_special_characters("ts̈ëngbe tsabe").is_empty());
    }

    #[test]
    fn invalid_initial_is_reported_per_word() {
        let errors = check_grammar("Xyz");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("'Xyz'"));
        assert!(errors[0].contains("b, d, g, k, m, n, p, s, t, ts, y"));

        assert_eq!(check_grammar("xa ra mama").len(), 2);
    }

    #[test]
    fn permitted_initials_pass() {
        assert!(check_grammar("Bëts").is_empty());
        assert!(check_grammar("ëna uámana Tabanok").is_empty());
    }

    #[test]
    fn ts_diaeresis_needs_preceding_e_diaeresis() {
        // Correct ending; only the vowel after the final s̈ is missing
        assert_eq!(check_grammar("bëts̈"), vec![ERR_S_FOLLOWER.to_string()]);
        let errors = check_grammar("bats̈ bots̈");
        assert_eq!(
            errors.iter().filter(|e| e.as_str() == ERR_TS_PLACEMENT).count(),
            1
        );
        assert!(check_grammar("ts̈").contains(&ERR_TS_PLACEMENT.to_string()));
    }

    #[test]
    fn s_diaeresis_follower_checked_only_without_prior_errors() {
        assert_eq!(check_grammar("s̈ombre"), vec![ERR_S_FOLLOWER.to_string()]);
        assert!(check_grammar("s̈ëmbiam s̈änga").is_empty());
        // The placement error suppresses the follower check
        assert_eq!(check_grammar("bats̈"), vec![ERR_TS_PLACEMENT.to_string()]);
    }

    #[test]
    fn check_orders_special_characters_first() {
        let errors = check("Xtsa");
        assert_eq!(errors[0], ERR_TS_DIAERESIS);
        assert_eq!(errors[1], ERR_S_DIAERESIS);
        assert!(errors[2].contains("'Xtsa'"));
    }

    #[test]
    fn empty_text_has_no_errors() {
        assert!(check("").is_empty());
        assert!(!needs_diacritic_review(""));
    }

    #[test]
    fn diacritic_review_spots_any_bare_s() {
        assert!(needs_diacritic_review("s̈ëmbiam sabe"));
        assert!(!needs_diacritic_review("s̈ëmbiam ts̈ëngbe"));
    }
}
