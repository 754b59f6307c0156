pub mod dictionary;
pub mod loader;
pub mod matcher;
pub mod orthography;
pub mod processor;
pub mod scorer;
pub mod search;
pub mod validator;

pub use dictionary::{DictionarySource, KamentsaDictionary};
pub use loader::DictionaryLoader;
pub use matcher::{Matcher, levenshtein_distance};
pub use processor::KamentsaProcessor;
pub use scorer::{QualityScorer, ScoreBreakdown};
pub use validator::KamentsaValidator;
