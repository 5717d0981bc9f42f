pub mod api; // HTTP boundary: /predict, /health, static files
pub mod config;
pub mod knowledge;
pub mod pipeline; // Normalizer → matcher → classifier → selector

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Knowledge base rejected: {0}")]
    KnowledgeBase(#[from] knowledge::KnowledgeBaseError),

    #[error("Classifier setup failed: {0}")]
    Engine(#[from] pipeline::EngineError),

    #[error("Server error: {0}")]
    Server(#[from] api::ServerError),
}

/// Start the service and block until Ctrl-C.
pub async fn run() -> Result<(), StartupError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let settings = config::ServerConfig::from_env()?;

    // Train before binding so no request ever sees a half-built engine.
    let kb = knowledge::KnowledgeBase::builtin()?;
    let engine = Arc::new(pipeline::Engine::new(kb)?);

    let mut server = api::start_server(engine, settings.bind, &settings.static_dir).await?;
    tracing::info!(
        session_id = %server.session.session_id,
        started_at = %server.session.started_at,
        addr = %server.session.server_addr,
        static_dir = %settings.static_dir.display(),
        "Listening"
    );

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {e}");
    }
    server.shutdown();
    server.wait().await?;
    Ok(())
}
