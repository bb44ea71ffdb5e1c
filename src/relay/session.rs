use super::protocol::{MediaEvent, OutboundFrame};
use crate::speech::{Speech, SpeechToText, TextToSpeech};
use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Per-connection relay state.
///
/// A session is created when the streaming socket opens and dropped when it
/// closes. It awaits the platform's `start` event, which assigns the stream
/// identifier; until then inbound audio is buffered. Once active, audio
/// flows stream → transcriber → (text) → synthesizer → stream.
///
/// The session exclusively owns both engines; nothing is shared across
/// connections.
pub struct CallSession {
    stream_sid: Option<String>,

    /// Audio that arrived before `start`. Flushed to the transcriber, in
    /// arrival order, once the stream identifier is known.
    pending_media: Vec<String>,

    transcriber: Box<dyn SpeechToText>,
    synthesizer: Box<dyn TextToSpeech>,
}

impl CallSession {
    pub fn new(transcriber: Box<dyn SpeechToText>, synthesizer: Box<dyn TextToSpeech>) -> Self {
        Self {
            stream_sid: None,
            pending_media: Vec::new(),
            transcriber,
            synthesizer,
        }
    }

    /// Start both engines and hand back their event streams.
    pub async fn start_engines(
        &mut self,
    ) -> Result<(mpsc::Receiver<String>, mpsc::Receiver<Speech>)> {
        let transcripts = self
            .transcriber
            .start()
            .await
            .context("Failed to start transcription engine")?;
        let speech = self
            .synthesizer
            .start()
            .await
            .context("Failed to start synthesis engine")?;

        info!(
            "Speech engines ready: {} / {}",
            self.transcriber.name(),
            self.synthesizer.name()
        );

        Ok((transcripts, speech))
    }

    /// Stream identifier captured from the `start` event, if received.
    pub fn stream_sid(&self) -> Option<&str> {
        self.stream_sid.as_deref()
    }

    /// React to one inbound event from the media stream.
    pub fn handle_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::Start { start } => {
                info!("Starting media stream for {}", start.stream_sid);
                self.stream_sid = Some(start.stream_sid);
                for payload in self.pending_media.drain(..) {
                    self.transcriber.submit(payload);
                }
            }
            MediaEvent::Media { media } => {
                if self.stream_sid.is_some() {
                    self.transcriber.submit(media.payload);
                } else {
                    debug!("Buffering media received before start");
                    self.pending_media.push(media.payload);
                }
            }
            MediaEvent::Mark { mark } => {
                info!(
                    "Media completed mark ({}): {}",
                    mark.sequence_number
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    mark.name
                );
            }
            MediaEvent::Other => {
                debug!("Ignoring unhandled stream event");
            }
        }
    }

    /// React to a transcript from the transcription engine.
    pub fn handle_transcript(&self, text: String) {
        info!("Received transcription: {}", text);
        self.synthesizer.generate(text);
    }

    /// Turn one synthesized speech segment into its outbound frame pair:
    /// the media frame strictly precedes the mark frame carrying its label.
    pub fn handle_speech(&self, speech: Speech) -> Vec<OutboundFrame> {
        let Some(sid) = self.stream_sid.as_ref() else {
            warn!("Dropping synthesized speech: no active stream identifier");
            return Vec::new();
        };

        info!(
            "Sending {} encoded audio characters to the stream",
            speech.payload.len()
        );

        vec![
            OutboundFrame::media(sid.clone(), speech.payload),
            OutboundFrame::mark(sid.clone(), speech.label),
        ]
    }
}
