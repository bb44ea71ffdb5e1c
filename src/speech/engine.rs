use anyhow::Result;
use tokio::sync::mpsc;

/// Depth of the per-engine input queue. A full queue drops the item with a
/// warning rather than stalling the call's event loop.
pub const ENGINE_QUEUE_DEPTH: usize = 64;

/// One synthesized speech segment: encoded audio plus the label the
/// platform echoes back in its playback-completion mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speech {
    /// Encoded audio, opaque to the relay
    pub payload: String,
    /// Segment label for the outbound mark frame
    pub label: String,
}

/// Speech-to-text engine boundary.
///
/// Transcripts arrive asynchronously on the channel returned by `start`;
/// there is no one-to-one correspondence between submitted chunks and
/// transcripts, and no latency bound.
#[async_trait::async_trait]
pub trait SpeechToText: Send {
    /// Begin the engine and take its transcript stream. Called once per
    /// session.
    async fn start(&mut self) -> Result<mpsc::Receiver<String>>;

    /// Submit one encoded audio chunk. Fire and forget.
    fn submit(&self, payload: String);

    /// Engine name for logging
    fn name(&self) -> &str;
}

/// Text-to-speech engine boundary.
///
/// Speech segments arrive asynchronously on the channel returned by
/// `start`, at most loosely correlated in time with `generate` calls.
#[async_trait::async_trait]
pub trait TextToSpeech: Send {
    /// Begin the engine and take its speech stream. Called once per
    /// session.
    async fn start(&mut self) -> Result<mpsc::Receiver<Speech>>;

    /// Request synthesis of the given text. Fire and forget.
    fn generate(&self, text: String);

    /// Engine name for logging
    fn name(&self) -> &str;
}

/// Creates one fresh engine pair per streaming connection; sessions never
/// share engine instances.
#[async_trait::async_trait]
pub trait SpeechEngineFactory: Send + Sync {
    async fn create(&self) -> Result<(Box<dyn SpeechToText>, Box<dyn TextToSpeech>)>;
}
