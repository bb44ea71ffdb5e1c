use serde::{Deserialize, Serialize};

/// Audio chunk published to the transcription engine
#[derive(Debug, Serialize, Deserialize)]
pub struct AudioChunkMessage {
    pub channel_id: String,
    pub payload: String, // Encoded audio, verbatim from the media stream
    pub sequence: u64,
    pub timestamp: String, // RFC3339 timestamp
}

/// Transcript received from the transcription engine
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptMessage {
    pub channel_id: String,
    pub text: String,
    pub timestamp: String,
}

/// Synthesis request published to the speech engine
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub channel_id: String,
    pub text: String,
    pub timestamp: String,
}

/// Synthesized speech received from the speech engine
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechMessage {
    pub channel_id: String,
    pub payload: String,
    pub label: String,
    pub timestamp: String,
}
