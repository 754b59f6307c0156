use kamentsa_config::Config;
use kamentsa_lang::KamentsaProcessor;

pub struct AppState {
    pub config: Config,
    pub processor: KamentsaProcessor,
}

impl AppState {
    pub fn new(config: Config, processor: KamentsaProcessor) -> Self {
        Self { config, processor }
    }
}
