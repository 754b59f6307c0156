use serde::Deserialize;
use serde_json::{Value, json};

use kamentsa_core::language::TextValidator;

use crate::state::AppState;

pub mod text_input;

use self::text_input::handle_text_input;

/// One batch request, tagged by `op`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    Validate {
        text: String,
        #[serde(default)]
        context: Option<String>,
    },
    Search {
        query: String,
    },
    Suggest {
        text: String,
    },
    Translate {
        word: String,
    },
    Lookup {
        text: String,
    },
    Info,
}

pub fn handle_request(state: &AppState, request: Request) -> anyhow::Result<Value> {
    let processor = &state.processor;
    let response = match request {
        Request::Validate { text, context } => {
            let result = processor.validate_text(&text, context.as_deref());
            serde_json::to_value(result)?
        }
        Request::Search { query } => serde_json::to_value(processor.search(&query))?,
        Request::Suggest { text } => json!({ "suggestions": processor.suggest(&text) }),
        Request::Translate { word } => json!({ "translation": processor.translate(&word) }),
        Request::Lookup { text } => serde_json::to_value(handle_text_input(&text, processor))?,
        Request::Info => serde_json::to_value(processor.metadata())?,
    };
    Ok(response)
}
