//! Server wiring and lifecycle.
//!
//! Builds the provider, renderer and exporter from [`AppConfig`], mounts the
//! notes routes with tracing and CORS layers, and serves until Ctrl+C or
//! SIGTERM.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::adapters::ai::{OpenAIConfig, OpenAIProvider, TemplateProvider};
use crate::adapters::document::{MarkdownRenderer, PdfExportService};
use crate::adapters::http::{notes_routes, NotesAppState};
use crate::config::{AppConfig, ServerConfig, ValidationError as ConfigValidationError};
use crate::ports::{AIError, AIProvider};

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigValidationError),

    #[error("failed to create generation client: {0}")]
    Provider(#[from] AIError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Picks the generation provider.
///
/// Offline templates win whenever the flag is set; otherwise the
/// OpenAI-compatible endpoint is used and needs an API key.
pub fn build_provider(config: &AppConfig) -> Result<Arc<dyn AIProvider>, ServerError> {
    if config.features.offline_templates {
        tracing::warn!("Offline templates enabled; notes will not come from the generation service");
        return Ok(Arc::new(TemplateProvider::new()));
    }

    let api_key = config
        .ai
        .api_key
        .clone()
        .ok_or(ConfigValidationError::MissingRequired("YELLOW_NOTES__AI__API_KEY"))?;

    let mut openai = OpenAIConfig::from_secret(api_key)
        .with_base_url(config.ai.base_url.clone())
        .with_model(config.ai.model.clone());
    if let Some(timeout) = config.ai.timeout() {
        openai = openai.with_timeout(timeout);
    }

    Ok(Arc::new(OpenAIProvider::new(openai)?))
}

/// Builds the shared HTTP state from configuration.
pub fn build_state(config: &AppConfig) -> Result<NotesAppState, ServerError> {
    let provider = build_provider(config)?;

    let mut exporter = PdfExportService::new().with_timeout(config.export.timeout_secs);
    if let Some(path) = &config.export.rasterizer_path {
        exporter = exporter.with_binary_path(path.clone());
    }

    Ok(NotesAppState::new(
        provider,
        Arc::new(MarkdownRenderer::new()),
        Arc::new(exporter),
    )
    .with_verbose_errors(config.features.verbose_errors))
}

/// Mounts the notes routes with the tracing and CORS layers.
pub fn build_router(state: NotesAppState, server: &ServerConfig) -> Router {
    let router = notes_routes(state).layer(TraceLayer::new_for_http());
    match cors_layer(server) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

fn cors_layer(server: &ServerConfig) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any),
    )
}

/// Runs the HTTP server until a shutdown signal arrives.
pub async fn run(config: AppConfig) -> Result<(), ServerError> {
    let addr = config.server.socket_addr()?;
    let state = build_state(&config)?;
    let router = build_router(state, &config.server);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        model = %config.ai.model,
        "Yellow Notes listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Yellow Notes stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
