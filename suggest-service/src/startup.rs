//! Application startup and lifecycle management.

use crate::config::{Config, CorsConfig};
use crate::handlers;
use crate::services::metrics::init_metrics;
use crate::services::providers::gemini::GeminiTextProvider;
use crate::services::providers::mock::MockTextProvider;
use crate::services::providers::TextProvider;
use crate::services::SuggestionService;
use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub suggestion: SuggestionService,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application, selecting the text provider from configuration.
    pub async fn build(config: Config) -> anyhow::Result<Self> {
        let provider: Arc<dyn TextProvider> = if config.gemini.enabled {
            tracing::info!(
                model = %config.gemini.model,
                location = %config.gemini.location,
                "Initialized Gemini text provider"
            );
            Arc::new(GeminiTextProvider::new(config.gemini.clone()))
        } else {
            tracing::info!("Gemini provider disabled, using mock text provider");
            Arc::new(MockTextProvider::new(true))
        };

        Self::build_with_provider(config, provider).await
    }

    /// Build the application with an explicit text provider.
    pub async fn build_with_provider(
        config: Config,
        provider: Arc<dyn TextProvider>,
    ) -> anyhow::Result<Self> {
        init_metrics();

        let cors = build_cors_layer(&config.cors)?;

        let state = AppState {
            config: config.clone(),
            suggestion: SuggestionService::new(provider),
        };

        let router = Router::new()
            .route("/", get(handlers::health_check))
            .route("/suggest", post(handlers::suggest_plan))
            .route("/metrics", get(handlers::metrics))
            .layer(cors)
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");

                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                }),
            )
            .with_state(state);

        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind listener to {}", addr))?;
        let port = listener.local_addr()?.port();

        tracing::info!("Suggest service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

/// Build the CORS layer from configuration.
///
/// Credentialed requests cannot use a wildcard origin; that combination is a
/// configuration error.
fn build_cors_layer(config: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let wildcard = config.allowed_origins.iter().any(|origin| origin == "*");

    if wildcard && config.allow_credentials {
        anyhow::bail!(
            "Invalid CORS configuration: allow_credentials cannot be combined with a wildcard origin"
        );
    }

    let allow_origin = if wildcard {
        AllowOrigin::any()
    } else {
        let origins = config
            .allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin: {}", origin))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(config.allow_credentials))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
