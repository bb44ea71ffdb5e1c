use crate::config::Config;
use crate::speech::SpeechEngineFactory;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Immutable service configuration, fixed at startup
    pub config: Arc<Config>,

    /// Creates one fresh speech engine pair per streaming connection
    pub engines: Arc<dyn SpeechEngineFactory>,
}

impl AppState {
    pub fn new(config: Config, engines: Arc<dyn SpeechEngineFactory>) -> Self {
        Self {
            config: Arc::new(config),
            engines,
        }
    }
}
