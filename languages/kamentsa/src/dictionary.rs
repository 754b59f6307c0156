use std::path::PathBuf;
use std::sync::Arc;

use kamentsa_config::dictionary::DictionaryConfig;
use kamentsa_core::dictionary::{
    Dictionary, DictionaryEntry, DictionaryMetadata, Equivalent, LoadError, Meaning,
};
use parking_lot::RwLock;
use serde::Deserialize;

use crate::loader::DictionaryLoader;

/// Where the store reads its entries from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// Lexicon compiled into the crate
    Embedded,
    File(PathBuf),
    /// Entries handed over in memory, nothing to reload from
    Inline,
}

impl DictionarySource {
    pub fn describe(&self) -> String {
        match self {
            DictionarySource::Embedded => "embedded".to_string(),
            DictionarySource::File(path) => path.display().to_string(),
            DictionarySource::Inline => "inline".to_string(),
        }
    }
}

// JSON structures of the lexicon resource
#[derive(Debug, Deserialize)]
struct LexiconJson {
    diccionario: SectionJson,
}

#[derive(Debug, Deserialize)]
struct SectionJson {
    #[serde(default)]
    kamentsa_espanol: Vec<EntryJson>,
}

#[derive(Debug, Deserialize)]
struct EntryJson {
    #[serde(default)]
    entrada: String,
    tipo: Option<String>,
    pronunciacion: Option<String>,
    #[serde(default)]
    significados: Vec<SignificadoJson>,
    #[serde(default)]
    equivalentes: Vec<EquivalenteJson>,
    #[serde(rename = "contextoCultural")]
    contexto_cultural: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SignificadoJson {
    #[serde(default)]
    definicion: String,
    #[serde(default)]
    ejemplos: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EquivalenteJson {
    #[serde(default)]
    palabra: String,
    idioma: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl EntryJson {
    fn into_entry(self) -> Option<DictionaryEntry> {
        let headword = self.entrada.trim().to_string();
        if headword.is_empty() {
            return None;
        }

        let meanings = self
            .significados
            .into_iter()
            .map(|s| Meaning {
                definition: s.definicion,
                examples: s.ejemplos,
            })
            .collect();

        let equivalents = self
            .equivalentes
            .into_iter()
            .filter(|e| !e.palabra.trim().is_empty())
            .map(|e| Equivalent {
                word: e.palabra.trim().to_string(),
                language: non_blank(e.idioma),
            })
            .collect();

        Some(DictionaryEntry {
            headword,
            word_class: non_blank(self.tipo),
            pronunciation: non_blank(self.pronunciacion),
            meanings,
            equivalents,
            cultural_note: non_blank(self.contexto_cultural),
        })
    }
}

/// Parse the lexicon JSON into typed entries.
///
/// Records without a headword are skipped; a document with no usable entry
/// is an error.
pub fn parse_entries(json: &str) -> Result<Vec<DictionaryEntry>, LoadError> {
    let data: LexiconJson = serde_json::from_str(json)?;

    let total = data.diccionario.kamentsa_espanol.len();
    let entries: Vec<DictionaryEntry> = data
        .diccionario
        .kamentsa_espanol
        .into_iter()
        .filter_map(EntryJson::into_entry)
        .collect();

    if entries.len() < total {
        tracing::warn!(
            "Skipped {} lexicon records without headword",
            total - entries.len()
        );
    }

    if entries.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(entries)
}

#[derive(Clone)]
struct Snapshot {
    entries: Arc<[DictionaryEntry]>,
    fallback: bool,
}

/// Kamëntsá-Spanish lexicon.
///
/// Entries are immutable once loaded. The only write is a whole-snapshot
/// swap when `ensure_loaded` finds the store empty.
pub struct KamentsaDictionary {
    source: DictionarySource,
    additional: Vec<PathBuf>,
    snapshot: RwLock<Snapshot>,
}

impl KamentsaDictionary {
    /// Load from `source`, falling back to the built-in seed on failure
    pub fn load(source: DictionarySource) -> Self {
        Self::load_with_additional(source, Vec::new())
    }

    pub fn load_with_additional(source: DictionarySource, additional: Vec<PathBuf>) -> Self {
        let dict = Self {
            source,
            additional,
            snapshot: RwLock::new(Snapshot {
                entries: Arc::from(Vec::new()),
                fallback: false,
            }),
        };
        dict.reload();
        dict
    }

    pub fn from_config(config: &DictionaryConfig) -> Self {
        let source = match &config.path {
            Some(path) => DictionarySource::File(PathBuf::from(path)),
            None => DictionarySource::Embedded,
        };
        let additional = config.additional_paths.iter().map(PathBuf::from).collect();
        Self::load_with_additional(source, additional)
    }

    /// Store over the given entries, kept in order
    pub fn from_entries(entries: Vec<DictionaryEntry>) -> Self {
        Self {
            source: DictionarySource::Inline,
            additional: Vec::new(),
            snapshot: RwLock::new(Snapshot {
                entries: Arc::from(entries),
                fallback: false,
            }),
        }
    }

    /// Re-read the source and replace the whole entry set
    pub fn reload(&self) {
        let outcome = DictionaryLoader::load_or_seed(&self.source, &self.additional);
        let snapshot = Snapshot {
            entries: Arc::from(outcome.entries),
            fallback: outcome.fallback,
        };
        *self.snapshot.write() = snapshot;
    }

    /// Reload if the store is empty. Safe to race: every reload produces the
    /// same content and the last swap wins.
    pub fn ensure_loaded(&self) {
        if self.is_empty() {
            tracing::warn!(
                "Dictionary is empty, reloading from {}",
                self.source.describe()
            );
            self.reload();
        }
    }

    pub fn entry_count(&self) -> usize {
        self.snapshot.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Whether the seed entries replaced a failed load
    pub fn is_fallback(&self) -> bool {
        self.snapshot.read().fallback
    }

    pub fn source(&self) -> &DictionarySource {
        &self.source
    }
}

impl Dictionary for KamentsaDictionary {
    fn entries(&self) -> Arc<[DictionaryEntry]> {
        Arc::clone(&self.snapshot.read().entries)
    }

    fn metadata(&self) -> DictionaryMetadata {
        let snapshot = self.snapshot.read().clone();
        DictionaryMetadata {
            name: "Kamëntsá-Español".to_string(),
            source: self.source.describe(),
            language: "kbh-es".to_string(),
            entry_count: snapshot.entries.len(),
            fallback: snapshot.fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "diccionario": {
            "kamentsa_espanol": [
                {
                    "entrada": "jajañ",
                    "tipo": "sustantivo",
                    "significados": [{ "definicion": "chagra" }],
                    "equivalentes": [{ "palabra": "chagra", "idioma": "español" }, { "palabra": " " }],
                    "contextoCultural": "  "
                },
                { "entrada": "  ", "significados": [] },
                { "entrada": "mama" }
            ]
        }
    }"#;

    #[test]
    fn parse_skips_records_without_headword() {
        let entries = parse_entries(SAMPLE).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].headword, "jajañ");
        assert_eq!(entries[0].word_class.as_deref(), Some("sustantivo"));
        assert_eq!(entries[0].meanings[0].definition, "chagra");
        assert!(entries[0].meanings[0].examples.is_empty());
        assert_eq!(entries[0].equivalents.len(), 1);
        assert_eq!(entries[0].cultural_note, None);
        assert_eq!(entries[1].headword, "mama");
        assert!(entries[1].meanings.is_empty());
    }

    #[test]
    fn parse_rejects_malformed_and_empty_documents() {
        assert!(matches!(parse_entries("{ not json"), Err(LoadError::ParseError(_))));
        assert!(matches!(
            parse_entries(r#"{"diccionario": {"kamentsa_espanol": []}}"#),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn embedded_lexicon_loads() {
        let dict = KamentsaDictionary::load(DictionarySource::Embedded);
        assert!(!dict.is_fallback());
        assert!(dict.entry_count() > 4);
        assert!(dict.lookup_exact("JAJAN").is_some());
    }

    #[test]
    fn missing_file_falls_back_to_seed() {
        let dict = KamentsaDictionary::load(DictionarySource::File(PathBuf::from(
            "/nonexistent/diccionario.json",
        )));
        assert!(dict.is_fallback());
        assert_eq!(dict.entry_count(), DictionaryLoader::seed_entries().len());
        assert!(dict.metadata().fallback);
    }

    #[test]
    fn ensure_loaded_refills_empty_store() {
        let dict = KamentsaDictionary::from_entries(Vec::new());
        assert!(dict.is_empty());
        dict.ensure_loaded();
        assert!(!dict.is_empty());
        // Inline stores have nothing to read, so the seed is used
        assert!(dict.is_fallback());

        let count = dict.entry_count();
        dict.ensure_loaded();
        assert_eq!(dict.entry_count(), count);
    }

    #[test]
    fn ensure_loaded_keeps_populated_store() {
        let dict = KamentsaDictionary::from_entries(vec![DictionaryEntry::new("mama")]);
        dict.ensure_loaded();
        assert_eq!(dict.entry_count(), 1);
        assert!(!dict.is_fallback());
    }
}
