use kamentsa_core::dictionary::DictionaryEntry;
use kamentsa_core::preprocess::fold;

/// Substring search with a cross-language bridge.
///
/// First match in stored order wins, not the best one. `None` covers both
/// "nothing matched" and "bridge target missing".
pub fn search(entries: &[DictionaryEntry], query: &str) -> Option<DictionaryEntry> {
    let key = fold(query.trim());
    if key.is_empty() {
        return None;
    }

    let direct = entries.iter().find(|entry| {
        fold(&entry.headword).contains(&key)
            || entry
                .meanings
                .iter()
                .any(|m| fold(&m.definition).contains(&key))
    });
    if let Some(entry) = direct {
        tracing::debug!("Search '{}' matched '{}'", query, entry.headword);
        return Some(entry.clone());
    }

    bridge(entries, &key)
}

/// Follow the first equivalent of the first headword containing `key`.
///
/// Any entry this can reach also satisfies the direct pass, so after a direct
/// miss it returns `None`; kept so the lookup order stays explicit.
fn bridge(entries: &[DictionaryEntry], key: &str) -> Option<DictionaryEntry> {
    let via = entries
        .iter()
        .find(|entry| !entry.equivalents.is_empty() && fold(&entry.headword).contains(key))?;
    let equivalent = &via.equivalents[0];
    let target = fold(&equivalent.word);

    let found = entries
        .iter()
        .find(|entry| fold(&entry.headword) == target)
        .cloned();

    match &found {
        Some(entry) => tracing::debug!("Bridged '{}' to '{}'", via.headword, entry.headword),
        None => tracing::debug!(
            "Bridge target '{}' of '{}' is not in the lexicon",
            equivalent.word,
            via.headword
        ),
    }

    found
}
