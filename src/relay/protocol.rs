use serde::{Deserialize, Serialize};

/// Inbound event on the media stream, tagged by `event`.
///
/// The platform also sends tags this relay does not consume (`connected`,
/// `stop`, ...); those land in [`MediaEvent::Other`] and are dropped.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum MediaEvent {
    Start { start: StartInfo },
    Media { media: MediaInfo },
    Mark { mark: MarkInfo },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartInfo {
    /// Platform-assigned identifier for this call's media stream
    #[serde(rename = "streamSid")]
    pub stream_sid: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaInfo {
    /// Opaque encoded audio. Forwarded verbatim, never decoded.
    pub payload: String,
}

/// Playback-completion notification for a previously sent mark label.
/// Purely diagnostic; never drives control flow.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkInfo {
    pub name: String,
    #[serde(rename = "sequenceNumber", default)]
    pub sequence_number: Option<u64>,
}

/// Outbound frame on the media stream.
///
/// Every synthesized speech segment is sent as one `Media` frame
/// immediately followed by one `Mark` frame naming it; the platform echoes
/// the mark back once playback completes.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum OutboundFrame {
    Media {
        #[serde(rename = "streamSid")]
        stream_sid: String,
        media: OutboundMedia,
    },
    Mark {
        #[serde(rename = "streamSid")]
        stream_sid: String,
        mark: OutboundMark,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct OutboundMedia {
    pub payload: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutboundMark {
    pub name: String,
}

impl OutboundFrame {
    pub fn media(stream_sid: String, payload: String) -> Self {
        Self::Media {
            stream_sid,
            media: OutboundMedia { payload },
        }
    }

    pub fn mark(stream_sid: String, name: String) -> Self {
        Self::Mark {
            stream_sid,
            mark: OutboundMark { name },
        }
    }
}
