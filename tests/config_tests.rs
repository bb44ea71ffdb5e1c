use voice_relay::Config;

const CONFIG_TOML: &str = r#"
[service]
name = "voice-relay"

[service.http]
bind = "0.0.0.0"
port = 3000

[stream]
host = "relay.example.com"

[speech]
nats_url = "nats://localhost:4222"
"#;

fn write_config(dir: &tempfile::TempDir) -> String {
    let path = dir.path().join("voice-relay.toml");
    std::fs::write(&path, CONFIG_TOML).unwrap();
    dir.path().join("voice-relay").to_str().unwrap().to_string()
}

// File load and environment layering share process-wide env state, so both
// phases live in one test to keep the variable's lifetime contained.
#[test]
fn test_load_from_file_then_environment_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir);

    let cfg = Config::load(&path).unwrap();
    assert_eq!(cfg.service.name, "voice-relay");
    assert_eq!(cfg.service.http.bind, "0.0.0.0");
    assert_eq!(cfg.service.http.port, 3000);
    assert_eq!(cfg.stream.host, "relay.example.com");
    assert_eq!(cfg.speech.nats_url, "nats://localhost:4222");

    std::env::set_var("VOICE_RELAY__STREAM__HOST", "override.example.com");
    let cfg = Config::load(&path).unwrap();
    std::env::remove_var("VOICE_RELAY__STREAM__HOST");

    assert_eq!(cfg.stream.host, "override.example.com");
    // File values not overridden stay intact
    assert_eq!(cfg.service.http.port, 3000);
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(Config::load("/nonexistent/voice-relay").is_err());
}
