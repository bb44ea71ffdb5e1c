//! Speech engine boundaries.
//!
//! The relay treats both engines as black boxes behind two traits: audio
//! goes in fire-and-forget, results come back on an owned channel. The
//! production engines ([`NatsEngineFactory`]) speak JSON over NATS
//! subjects; tests substitute channel-backed doubles.

mod engine;
mod messages;
mod nats;

pub use engine::{Speech, SpeechEngineFactory, SpeechToText, TextToSpeech, ENGINE_QUEUE_DEPTH};
pub use messages::{AudioChunkMessage, SpeechMessage, SynthesisRequest, TranscriptMessage};
pub use nats::{NatsEngineFactory, NatsSynthesizer, NatsTranscriber};
