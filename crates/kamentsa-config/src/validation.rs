use std::env;

use serde::{Deserialize, Serialize};

/// Quality a text needs before it can count as valid
pub const MIN_VALID_QUALITY: f64 = 0.7;

/// Fuzzy threshold for suggestions and translations
pub const MAX_EDIT_DISTANCE: usize = 2;

fn default_min_quality() -> f64 {
    MIN_VALID_QUALITY
}

fn default_max_edit_distance() -> usize {
    MAX_EDIT_DISTANCE
}

/// How `validate_text` decides `is_valid` once errors and quality are known
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ValidityPolicy {
    /// Additionally require the whole input to equal a headword
    #[default]
    WholeTextHeadword,
    /// Only grammar errors and the quality threshold count
    GrammarAndQuality,
}

impl ValidityPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "whole_text_headword" | "headword" => Some(Self::WholeTextHeadword),
            "grammar_and_quality" | "grammar" => Some(Self::GrammarAndQuality),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ValidationConfig {
    #[serde(default = "default_min_quality")]
    pub min_quality: f64,
    /// Fuzzy match threshold for suggestions and translation
    #[serde(default = "default_max_edit_distance")]
    pub max_edit_distance: usize,
    #[serde(default)]
    pub policy: ValidityPolicy,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_quality: default_min_quality(),
            max_edit_distance: default_max_edit_distance(),
            policy: ValidityPolicy::default(),
        }
    }
}

impl ValidationConfig {
    pub fn new() -> Self {
        let min_quality = env::var("KAMENTSA_MIN_QUALITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_min_quality);

        let max_edit_distance = env::var("KAMENTSA_MAX_EDIT_DISTANCE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_edit_distance);

        let policy = env::var("KAMENTSA_VALIDITY_POLICY")
            .ok()
            .and_then(|v| ValidityPolicy::parse(&v))
            .unwrap_or_default();

        Self {
            min_quality,
            max_edit_distance,
            policy,
        }
    }
}
