pub mod config;
pub mod http;
pub mod relay;
pub mod speech;
pub mod twiml;

pub use config::Config;
pub use http::{create_router, AppState};
pub use relay::{CallSession, MediaEvent, OutboundFrame};
pub use speech::{Speech, SpeechEngineFactory, SpeechToText, TextToSpeech};
