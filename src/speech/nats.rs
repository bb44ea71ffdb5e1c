use super::engine::{Speech, SpeechEngineFactory, SpeechToText, TextToSpeech, ENGINE_QUEUE_DEPTH};
use super::messages::{AudioChunkMessage, SpeechMessage, SynthesisRequest, TranscriptMessage};
use anyhow::{Context, Result};
use async_nats::Client;
use chrono::Utc;
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Speech-to-text engine reached over NATS.
///
/// Audio chunks are published to `stt.audio.<channel>`; the engine answers
/// with [`TranscriptMessage`]s on `stt.text.<channel>`. Messages for other
/// channels on the same subject are skipped.
pub struct NatsTranscriber {
    client: Client,
    channel_id: String,
    audio_tx: mpsc::Sender<String>,
    audio_rx: Option<mpsc::Receiver<String>>,
}

impl NatsTranscriber {
    pub fn new(client: Client, channel_id: String) -> Self {
        let (audio_tx, audio_rx) = mpsc::channel(ENGINE_QUEUE_DEPTH);
        Self {
            client,
            channel_id,
            audio_tx,
            audio_rx: Some(audio_rx),
        }
    }
}

#[async_trait::async_trait]
impl SpeechToText for NatsTranscriber {
    async fn start(&mut self) -> Result<mpsc::Receiver<String>> {
        let mut audio_rx = self
            .audio_rx
            .take()
            .context("Transcription engine already started")?;

        let subject = format!("stt.text.{}", self.channel_id);
        let mut subscriber = self
            .client
            .subscribe(subject.clone())
            .await
            .context("Failed to subscribe to transcripts")?;

        info!("Subscribed to transcripts on {}", subject);

        // Drain submitted chunks into the engine subject
        let client = self.client.clone();
        let channel_id = self.channel_id.clone();
        tokio::spawn(async move {
            let subject = format!("stt.audio.{}", channel_id);
            let mut sequence: u64 = 0;

            while let Some(payload) = audio_rx.recv().await {
                let message = AudioChunkMessage {
                    channel_id: channel_id.clone(),
                    payload,
                    sequence,
                    timestamp: Utc::now().to_rfc3339(),
                };
                sequence += 1;

                let bytes = match serde_json::to_vec(&message) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        error!("Failed to encode audio chunk message: {}", e);
                        continue;
                    }
                };

                if let Err(e) = client.publish(subject.clone(), bytes.into()).await {
                    error!("Failed to publish audio chunk: {}", e);
                }
            }
        });

        // Forward transcripts for this channel
        let (text_tx, text_rx) = mpsc::channel(ENGINE_QUEUE_DEPTH);
        let channel_id = self.channel_id.clone();
        tokio::spawn(async move {
            while let Some(message) = subscriber.next().await {
                match serde_json::from_slice::<TranscriptMessage>(&message.payload) {
                    Ok(transcript) => {
                        if transcript.channel_id != channel_id {
                            continue;
                        }
                        if text_tx.send(transcript.text).await.is_err() {
                            break; // session gone
                        }
                    }
                    Err(e) => warn!("Dropping malformed transcript message: {}", e),
                }
            }
        });

        Ok(text_rx)
    }

    fn submit(&self, payload: String) {
        if self.audio_tx.try_send(payload).is_err() {
            warn!("Transcription queue full, dropping audio chunk");
        }
    }

    fn name(&self) -> &str {
        "nats-stt"
    }
}

/// Text-to-speech engine reached over NATS.
///
/// Synthesis requests are published to `tts.text.<channel>`; the engine
/// answers with [`SpeechMessage`]s on `tts.audio.<channel>`, each carrying
/// the encoded audio and the segment label.
pub struct NatsSynthesizer {
    client: Client,
    channel_id: String,
    text_tx: mpsc::Sender<String>,
    text_rx: Option<mpsc::Receiver<String>>,
}

impl NatsSynthesizer {
    pub fn new(client: Client, channel_id: String) -> Self {
        let (text_tx, text_rx) = mpsc::channel(ENGINE_QUEUE_DEPTH);
        Self {
            client,
            channel_id,
            text_tx,
            text_rx: Some(text_rx),
        }
    }
}

#[async_trait::async_trait]
impl TextToSpeech for NatsSynthesizer {
    async fn start(&mut self) -> Result<mpsc::Receiver<Speech>> {
        let mut text_rx = self
            .text_rx
            .take()
            .context("Synthesis engine already started")?;

        let subject = format!("tts.audio.{}", self.channel_id);
        let mut subscriber = self
            .client
            .subscribe(subject.clone())
            .await
            .context("Failed to subscribe to synthesized speech")?;

        info!("Subscribed to synthesized speech on {}", subject);

        // Drain synthesis requests into the engine subject
        let client = self.client.clone();
        let channel_id = self.channel_id.clone();
        tokio::spawn(async move {
            let subject = format!("tts.text.{}", channel_id);

            while let Some(text) = text_rx.recv().await {
                let message = SynthesisRequest {
                    channel_id: channel_id.clone(),
                    text,
                    timestamp: Utc::now().to_rfc3339(),
                };

                let bytes = match serde_json::to_vec(&message) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        error!("Failed to encode synthesis request: {}", e);
                        continue;
                    }
                };

                if let Err(e) = client.publish(subject.clone(), bytes.into()).await {
                    error!("Failed to publish synthesis request: {}", e);
                }
            }
        });

        // Forward synthesized segments for this channel
        let (speech_tx, speech_rx) = mpsc::channel(ENGINE_QUEUE_DEPTH);
        let channel_id = self.channel_id.clone();
        tokio::spawn(async move {
            while let Some(message) = subscriber.next().await {
                match serde_json::from_slice::<SpeechMessage>(&message.payload) {
                    Ok(speech) => {
                        if speech.channel_id != channel_id {
                            continue;
                        }
                        let segment = Speech {
                            payload: speech.payload,
                            label: speech.label,
                        };
                        if speech_tx.send(segment).await.is_err() {
                            break; // session gone
                        }
                    }
                    Err(e) => warn!("Dropping malformed speech message: {}", e),
                }
            }
        });

        Ok(speech_rx)
    }

    fn generate(&self, text: String) {
        if self.text_tx.try_send(text).is_err() {
            warn!("Synthesis queue full, dropping text");
        }
    }

    fn name(&self) -> &str {
        "nats-tts"
    }
}

/// Engine factory backed by one shared NATS connection. Each streaming
/// connection gets a fresh engine pair with its own channel id, so subjects
/// never collide across concurrent calls.
pub struct NatsEngineFactory {
    client: Client,
}

impl NatsEngineFactory {
    pub async fn connect(url: &str) -> Result<Self> {
        info!("Connecting to NATS at {}", url);

        let client = async_nats::connect(url)
            .await
            .context("Failed to connect to NATS")?;

        info!("Connected to NATS successfully");

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl SpeechEngineFactory for NatsEngineFactory {
    async fn create(&self) -> Result<(Box<dyn SpeechToText>, Box<dyn TextToSpeech>)> {
        let channel_id = uuid::Uuid::new_v4().to_string();

        let transcriber = NatsTranscriber::new(self.client.clone(), channel_id.clone());
        let synthesizer = NatsSynthesizer::new(self.client.clone(), channel_id);

        Ok((Box::new(transcriber), Box::new(synthesizer)))
    }
}
