use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use voice_relay::speech::NatsEngineFactory;
use voice_relay::{create_router, AppState, Config};

#[derive(Parser)]
#[command(name = "voice-relay", about = "Call media relay between a telephony stream and speech engines")]
struct Args {
    /// Configuration file (without extension)
    #[arg(long, default_value = "config/voice-relay")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} v0.1.0", cfg.service.name);
    info!(
        "Webhook replies will point at wss://{}/connection",
        cfg.stream.host
    );

    let engines = Arc::new(NatsEngineFactory::connect(&cfg.speech.nats_url).await?);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    let app = create_router(AppState::new(cfg, engines));
    axum::serve(listener, app).await?;

    Ok(())
}
