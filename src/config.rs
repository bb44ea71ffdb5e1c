use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub stream: StreamConfig,
    pub speech: SpeechConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StreamConfig {
    /// Public hostname the telephony platform connects back to
    /// (no scheme; the webhook reply prepends wss://)
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// NATS server URL for the speech engines
    pub nats_url: String,
}

impl Config {
    /// Load configuration from a file, with `VOICE_RELAY__*` environment
    /// overrides layered on top (e.g. `VOICE_RELAY__STREAM__HOST`).
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("VOICE_RELAY").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
