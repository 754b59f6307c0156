use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::log::LogConfig;
use self::validation::ValidationConfig;

pub mod dictionary;
pub mod log;
pub mod validation;

pub use validation::ValidityPolicy;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub validation: ValidationConfig,
    pub log: LogConfig,
}

impl Config {
    /// Build from environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
            validation: ValidationConfig::new(),
            log: LogConfig::new(),
        }
    }

    /// Load a JSON config file; missing sections take their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn from_file_fills_missing_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"dictionary": {{"path": "lexicon.json"}}, "validation": {{"min_quality": 0.8}}}}"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.dictionary.path.as_deref(), Some("lexicon.json"));
        assert!(config.dictionary.additional_paths.is_empty());
        assert_eq!(config.validation.min_quality, 0.8);
        assert_eq!(config.validation.max_edit_distance, 2);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn from_file_reports_missing_file() {
        let err = Config::from_file(Path::new("/nonexistent/kamentsa.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
