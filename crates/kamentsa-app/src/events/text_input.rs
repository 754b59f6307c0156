use kamentsa_core::language::LanguageProcessor;
use kamentsa_lang::KamentsaProcessor;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DisplayResult {
    pub token: String,
    pub term: String,
    pub reading: String,
    pub definition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural_note: Option<String>,
}

/// Look up every token of `text` by exact headword
pub fn handle_text_input(text: &str, processor: &KamentsaProcessor) -> Vec<DisplayResult> {
    let tokens = processor.tokenize(text);
    tracing::debug!("Tokenized into {} tokens", tokens.len());

    let mut display_results = Vec::new();

    for token in tokens.iter().take(50) {
        let results = processor.lookup(token);
        tracing::debug!("Token '{}': {} results", token.surface, results.len());
        for result in results.iter().take(5) {
            display_results.push(DisplayResult {
                token: token.surface.clone(),
                term: result.term.clone(),
                reading: result.readings.join(", "),
                definition: result.definitions.join("; "),
                word_class: result.metadata.get("word_class").cloned(),
                cultural_note: result.metadata.get("cultural_note").cloned(),
            });
        }
    }

    if display_results.is_empty() {
        tracing::debug!("No lexicon entries for input text");
    }

    display_results
}
