//! The stream session relay.
//!
//! One [`CallSession`] per streaming connection: inbound control/media
//! events are demultiplexed, caller audio is forwarded to the transcription
//! engine, transcripts are handed to the synthesis engine, and synthesized
//! audio is re-multiplexed onto the connection as media + mark frame pairs.

mod protocol;
mod session;

pub use protocol::{
    MarkInfo, MediaEvent, MediaInfo, OutboundFrame, OutboundMark, OutboundMedia, StartInfo,
};
pub use session::CallSession;

use crate::speech::{SpeechToText, TextToSpeech};
use axum::extract::ws::{Message, WebSocket};
use futures::{SinkExt, StreamExt};
use tracing::{error, info, warn};

/// Drive one streaming connection to completion.
///
/// Interleaves the socket and both engine event streams on one task; there
/// is no parallelism within a session, and dropping the session on exit
/// releases both engines.
pub async fn run_connection(
    socket: WebSocket,
    transcriber: Box<dyn SpeechToText>,
    synthesizer: Box<dyn TextToSpeech>,
) {
    let mut session = CallSession::new(transcriber, synthesizer);

    let (mut transcripts, mut speech) = match session.start_engines().await {
        Ok(streams) => streams,
        Err(e) => {
            error!("Failed to start speech engines: {:#}", e);
            return;
        }
    };

    let (mut sink, mut stream) = socket.split();

    loop {
        tokio::select! {
            inbound = stream.next() => {
                match inbound {
                    Some(Ok(Message::Text(text))) => {
                        match serde_json::from_str::<MediaEvent>(&text) {
                            Ok(event) => session.handle_event(event),
                            Err(e) => warn!("Dropping malformed stream event: {}", e),
                        }
                    }
                    // Pings and pongs are answered by axum; binary frames
                    // are not part of the stream protocol.
                    Some(Ok(Message::Ping(_) | Message::Pong(_) | Message::Binary(_))) => {}
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        error!("Media stream connection error: {}", e);
                        break;
                    }
                }
            }
            Some(text) = transcripts.recv() => {
                session.handle_transcript(text);
            }
            Some(segment) = speech.recv() => {
                for frame in session.handle_speech(segment) {
                    let json = match serde_json::to_string(&frame) {
                        Ok(json) => json,
                        Err(e) => {
                            error!("Failed to encode outbound frame: {}", e);
                            continue;
                        }
                    };
                    if let Err(e) = sink.send(Message::Text(json)).await {
                        error!("Failed to write outbound frame: {}", e);
                        return;
                    }
                }
            }
        }
    }

    info!(
        "Media stream closed for {}",
        session.stream_sid().unwrap_or("<no stream sid>")
    );
}
