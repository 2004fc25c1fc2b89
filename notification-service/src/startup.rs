//! Application startup and lifecycle management.

use crate::config::NotificationConfig;
use crate::handlers::{
    health_check, method_not_allowed, metrics, send_notification, service_info,
};
use crate::services::{provider_from_config, EmailProvider, NotificationDispatcher};
use axum::{
    http::{header, Method},
    middleware::from_fn,
    routing::{any, get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Shared application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<NotificationConfig>,
    pub dispatcher: NotificationDispatcher,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(service_info))
        .route(
            "/api/notifications/send",
            post(send_notification).fallback(method_not_allowed),
        )
        .route(
            "/api/notifications/health",
            get(health_check).fallback(method_not_allowed),
        )
        .route("/metrics", get(metrics).fallback(method_not_allowed))
        .fallback(service_info)
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(from_fn(request_id_middleware))
        // OPTIONS requests are answered here with an empty 200
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application, choosing SMTP or simulated delivery from the
    /// configured credentials.
    pub async fn build(config: NotificationConfig) -> Result<Self, AppError> {
        let provider = provider_from_config(&config.smtp).map_err(|e| {
            tracing::error!("Failed to initialize email provider: {}", e);
            AppError::ConfigError(anyhow::Error::new(e))
        })?;

        Self::build_with_provider(config, provider).await
    }

    /// Build the application around an already constructed email provider.
    pub async fn build_with_provider(
        config: NotificationConfig,
        provider: Arc<dyn EmailProvider>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: Arc::new(config),
            dispatcher: NotificationDispatcher::new(provider),
        };

        // Bind HTTP listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], state.config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            port,
            provider = state.dispatcher.provider_name(),
            smtp_configured = state.config.smtp.is_configured(),
            "Notification service listening"
        );

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }

    /// Run until `signal` resolves, letting in-flight requests finish.
    pub async fn run_with_graceful_shutdown<F>(self, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state);
        axum::serve(self.listener, router)
            .with_graceful_shutdown(signal)
            .await
    }
}
