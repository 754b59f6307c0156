use std::env;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Lexicon file; the embedded lexicon is used when unset
    pub path: Option<String>,
    /// Extra lexicons merged after the main one, later entries win
    pub additional_paths: Vec<String>,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let path = env::var("KAMENTSA_DICTIONARY_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty());

        let additional_paths = env::var("KAMENTSA_ADDITIONAL_DICTIONARIES")
            .map(|v| split_paths(&v))
            .unwrap_or_default();

        Self {
            path,
            additional_paths,
        }
    }
}

fn split_paths(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
