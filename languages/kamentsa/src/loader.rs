use std::path::{Path, PathBuf};

use kamentsa_core::dictionary::{DictionaryEntry, LoadError};
use kamentsa_core::preprocess::fold;

use crate::dictionary::{DictionarySource, parse_entries};

pub struct DictionaryLoader;

/// Entries produced by a load attempt
pub struct LoadOutcome {
    pub entries: Vec<DictionaryEntry>,
    /// Set when the seed stands in for a failed load
    pub fallback: bool,
}

impl DictionaryLoader {
    /// Load embedded dictionary data
    pub fn load_embedded() -> Result<Vec<DictionaryEntry>, LoadError> {
        let json = include_str!("../data/diccionario.json");
        tracing::info!("Loading embedded Kamëntsá lexicon...");
        let entries = parse_entries(json)?;
        tracing::info!("Loaded {} lexicon entries", entries.len());
        Ok(entries)
    }

    /// Load dictionary from file path
    pub fn load_from_file(path: &Path) -> Result<Vec<DictionaryEntry>, LoadError> {
        tracing::info!("Loading lexicon from file: {}", path.display());
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        if !path.is_file() {
            return Err(LoadError::InvalidFormat(format!(
                "{} is not a regular file",
                path.display()
            )));
        }
        let json = std::fs::read_to_string(path)?;
        let entries = parse_entries(&json)?;
        tracing::info!("Loaded {} lexicon entries from file", entries.len());
        Ok(entries)
    }

    pub fn load(source: &DictionarySource) -> Result<Vec<DictionaryEntry>, LoadError> {
        match source {
            DictionarySource::Embedded => Self::load_embedded(),
            DictionarySource::File(path) => Self::load_from_file(path),
            DictionarySource::Inline => Err(LoadError::NoSource),
        }
    }

    /// Load `source` and merge `additional` lexicons on top.
    ///
    /// Never fails: a failed main load is replaced by `seed_entries`, a failed
    /// additional lexicon is skipped.
    pub fn load_or_seed(source: &DictionarySource, additional: &[PathBuf]) -> LoadOutcome {
        let (mut entries, fallback) = match Self::load(source) {
            Ok(entries) => (entries, false),
            Err(e) => {
                tracing::error!(
                    "Failed to load lexicon from {}: {}",
                    source.describe(),
                    e
                );
                tracing::warn!("Starting with built-in seed lexicon");
                (Self::seed_entries(), true)
            }
        };

        for path in additional {
            match Self::load_from_file(path) {
                Ok(extra) => {
                    tracing::info!("Merging additional lexicon from: {}", path.display());
                    entries = Self::merge(entries, extra);
                }
                Err(e) => {
                    tracing::warn!("Failed to load lexicon from {}: {}", path.display(), e);
                }
            }
        }

        LoadOutcome { entries, fallback }
    }

    /// Merge two entry lists; an entry in `additional` replaces the base entry
    /// with the same headword in place, new headwords are appended.
    pub fn merge(
        mut base: Vec<DictionaryEntry>,
        additional: Vec<DictionaryEntry>,
    ) -> Vec<DictionaryEntry> {
        for entry in additional {
            let key = fold(&entry.headword);
            match base.iter_mut().find(|e| fold(&e.headword) == key) {
                Some(existing) => *existing = entry,
                None => base.push(entry),
            }
        }
        base
    }

    /// Minimal lexicon used when nothing could be loaded
    pub fn seed_entries() -> Vec<DictionaryEntry> {
        vec![
            DictionaryEntry::new("bëngbe")
                .with_meaning("nuestro, nuestra")
                .with_equivalent("nuestro", Some("español")),
            DictionaryEntry::new("jajañ")
                .with_meaning("chagra, huerta tradicional")
                .with_equivalent("chagra", Some("español")),
            DictionaryEntry::new("taita")
                .with_meaning("padre, autoridad tradicional")
                .with_equivalent("padre", Some("español")),
            DictionaryEntry::new("mama")
                .with_meaning("madre")
                .with_equivalent("madre", Some("español")),
        ]
    }
}
