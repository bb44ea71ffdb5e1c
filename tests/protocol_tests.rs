use voice_relay::relay::{MediaEvent, OutboundFrame};

#[test]
fn test_parse_start_event() {
    let json = r#"{
        "event": "start",
        "sequenceNumber": "1",
        "start": {
            "streamSid": "CA123",
            "accountSid": "AC456",
            "tracks": ["inbound"]
        }
    }"#;

    let event: MediaEvent = serde_json::from_str(json).unwrap();
    match event {
        MediaEvent::Start { start } => assert_eq!(start.stream_sid, "CA123"),
        other => panic!("expected start event, got {:?}", other),
    }
}

#[test]
fn test_parse_media_event() {
    let json = r#"{"event":"media","media":{"payload":"abc"}}"#;

    let event: MediaEvent = serde_json::from_str(json).unwrap();
    match event {
        MediaEvent::Media { media } => assert_eq!(media.payload, "abc"),
        other => panic!("expected media event, got {:?}", other),
    }
}

#[test]
fn test_parse_mark_event() {
    let json = r#"{"event":"mark","mark":{"name":"seg1","sequenceNumber":4}}"#;

    let event: MediaEvent = serde_json::from_str(json).unwrap();
    match event {
        MediaEvent::Mark { mark } => {
            assert_eq!(mark.name, "seg1");
            assert_eq!(mark.sequence_number, Some(4));
        }
        other => panic!("expected mark event, got {:?}", other),
    }
}

#[test]
fn test_mark_sequence_number_is_optional() {
    let json = r#"{"event":"mark","mark":{"name":"seg1"}}"#;

    let event: MediaEvent = serde_json::from_str(json).unwrap();
    match event {
        MediaEvent::Mark { mark } => assert_eq!(mark.sequence_number, None),
        other => panic!("expected mark event, got {:?}", other),
    }
}

#[test]
fn test_unknown_event_tag_is_ignored_variant() {
    let json = r#"{"event":"connected","protocol":"Call","version":"1.0.0"}"#;

    let event: MediaEvent = serde_json::from_str(json).unwrap();
    assert!(matches!(event, MediaEvent::Other));
}

#[test]
fn test_malformed_event_fails_to_parse() {
    assert!(serde_json::from_str::<MediaEvent>("not json").is_err());
    assert!(serde_json::from_str::<MediaEvent>(r#"{"no":"event tag"}"#).is_err());
    // Right tag, missing required payload
    assert!(serde_json::from_str::<MediaEvent>(r#"{"event":"start"}"#).is_err());
}

#[test]
fn test_media_frame_wire_shape() {
    let frame = OutboundFrame::media("CA123".to_string(), "b64audio".to_string());

    let value = serde_json::to_value(&frame).unwrap();
    assert_eq!(value["event"], "media");
    assert_eq!(value["streamSid"], "CA123");
    assert_eq!(value["media"]["payload"], "b64audio");
}

#[test]
fn test_mark_frame_wire_shape() {
    let frame = OutboundFrame::mark("CA123".to_string(), "seg1".to_string());

    let value = serde_json::to_value(&frame).unwrap();
    assert_eq!(value["event"], "mark");
    assert_eq!(value["streamSid"], "CA123");
    assert_eq!(value["mark"]["name"], "seg1");
}
