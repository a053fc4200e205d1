use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use emotion_detector::classifier::watson::WatsonClassifier;
use emotion_detector::config::Settings;
use emotion_detector::gateway::EmotionGateway;
use emotion_detector::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::parse();
    let addr = settings.bind_addr()?;

    let classifier = WatsonClassifier::new(settings.watson())?;
    tracing::info!(
        endpoint = %classifier.config().endpoint,
        model = %classifier.config().model_id,
        "using Watson classifier"
    );

    let gateway = Arc::new(EmotionGateway::new(Arc::new(classifier)));
    let app = server::router(gateway);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await
        .context("server error")?;

    Ok(())
}
