//! Webhook reply document for the telephony platform.

/// Build the reply to an inbound-call webhook: instructs the platform to
/// open a bidirectional media stream to `wss://<host>/connection`.
pub fn connect_stream(host: &str) -> String {
    format!(
        "<Response>\n  <Connect>\n    <Stream url=\"wss://{host}/connection\" />\n  </Connect>\n</Response>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_at_the_connection_endpoint() {
        let doc = connect_stream("relay.example.com");
        assert!(doc.contains("wss://relay.example.com/connection"));
    }

    #[test]
    fn is_a_connect_stream_document() {
        let doc = connect_stream("h");
        assert!(doc.starts_with("<Response>"));
        assert!(doc.contains("<Connect>"));
        assert!(doc.contains("<Stream"));
        assert!(doc.trim_end().ends_with("</Response>"));
    }
}
