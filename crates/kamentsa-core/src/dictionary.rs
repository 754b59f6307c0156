use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::language::LookupResult;
use crate::preprocess::fold;

/// Read access to a loaded lexicon
pub trait Dictionary: Send + Sync {
    /// Snapshot of all entries in stored order
    fn entries(&self) -> Arc<[DictionaryEntry]>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;

    /// First entry whose headword equals `headword`, ignoring case and diacritics
    fn lookup_exact(&self, headword: &str) -> Option<DictionaryEntry> {
        let key = fold(headword);
        self.entries()
            .iter()
            .find(|entry| fold(&entry.headword) == key)
            .cloned()
    }
}

/// A single bilingual lexicon entry.
///
/// `headword` is never empty; loaders drop raw records that would violate this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub headword: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    #[serde(default)]
    pub equivalents: Vec<Equivalent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    pub definition: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

/// Cross-language pointer attached to a headword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equivalent {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl DictionaryEntry {
    /// Entry with a headword and nothing else
    pub fn new(headword: impl Into<String>) -> Self {
        Self {
            headword: headword.into(),
            word_class: None,
            pronunciation: None,
            meanings: Vec::new(),
            equivalents: Vec::new(),
            cultural_note: None,
        }
    }

    pub fn with_meaning(mut self, definition: impl Into<String>) -> Self {
        self.meanings.push(Meaning {
            definition: definition.into(),
            examples: Vec::new(),
        });
        self
    }

    pub fn with_equivalent(mut self, word: impl Into<String>, language: Option<&str>) -> Self {
        self.equivalents.push(Equivalent {
            word: word.into(),
            language: language.map(str::to_string),
        });
        self
    }

    /// Primary translation: first definition, else first equivalent word
    pub fn primary_translation(&self) -> Option<&str> {
        self.meanings
            .first()
            .map(|m| m.definition.as_str())
            .or_else(|| self.equivalents.first().map(|e| e.word.as_str()))
    }

    /// Convert to generic lookup result
    pub fn to_lookup_result(&self) -> LookupResult {
        let mut metadata = HashMap::new();
        if let Some(word_class) = &self.word_class {
            metadata.insert("word_class".to_string(), word_class.clone());
        }
        if let Some(note) = &self.cultural_note {
            metadata.insert("cultural_note".to_string(), note.clone());
        }
        if !self.equivalents.is_empty() {
            let words: Vec<&str> = self.equivalents.iter().map(|e| e.word.as_str()).collect();
            metadata.insert("equivalents".to_string(), words.join(", "));
        }

        LookupResult {
            term: self.headword.clone(),
            readings: self.pronunciation.iter().cloned().collect(),
            definitions: self.meanings.iter().map(|m| m.definition.clone()).collect(),
            metadata,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DictionaryMetadata {
    pub name: String,
    pub source: String,
    /// Language pair, e.g. "kbh-es"
    pub language: String,
    pub entry_count: usize,
    /// True when the built-in seed replaced a failed load
    pub fallback: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Dictionary contains no usable entries")]
    Empty,

    #[error("No resource to load from")]
    NoSource,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
