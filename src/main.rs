//! Safebloq Security Dashboard Service
//!
//! Serves a single-tenant security-operations dashboard backed entirely by
//! mock telemetry: KPI scalars, a live threat feed, device compliance, and
//! two chart series, synthesized fresh on every request.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                  SAFEBLOQ DASHBOARD                    │
//! ├────────────────────────────────────────────────────────┤
//! │  ┌──────────┐  ┌────────────┐  ┌───────────────────┐  │
//! │  │  HTTP    │  │  Auth Stub │  │  Mock Telemetry   │  │
//! │  │  (Axum)  │  │  (fixed)   │  │  Generator        │  │
//! │  └────┬─────┘  └─────┬──────┘  └─────────┬─────────┘  │
//! │       └──────────────┼───────────────────┘            │
//! │                      ▼                                │
//! │             View-Model / Composer                     │
//! └────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod telemetry;
mod view;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use middleware::auth::{AuthProvider, StubAuthProvider};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "safebloq_dashboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("Safebloq dashboard starting...");
    if config.is_production() && config.mock_seed.is_some() {
        tracing::warn!("MOCK_SEED set in production; dashboard output will not vary");
    }

    // Build application state
    let state = AppState {
        config: config.clone(),
        auth: Arc::new(StubAuthProvider),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server port");
    axum::serve(listener, app).await.expect("Server error");
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub auth: Arc<dyn AuthProvider>,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard::page))
        .route("/health", get(handlers::health::check))
        .route("/api/v1/dashboard", get(handlers::dashboard::view_model))
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState {
            config: config::Config {
                port: 0,
                environment: "test".to_string(),
                mock_seed: Some(7),
            },
            auth: Arc::new(StubAuthProvider),
        }
    }

    async fn get_response(uri: &str) -> axum::response::Response {
        let app = create_router(test_state());
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[test]
    fn test_health_route() {
        tokio_test::block_on(async {
            let response = get_response("/health").await;
            assert_eq!(response.status(), StatusCode::OK);
        });
    }

    #[test]
    fn test_dashboard_route_returns_view_model() {
        tokio_test::block_on(async {
            let response = get_response("/api/v1/dashboard").await;
            assert_eq!(response.status(), StatusCode::OK);

            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let vm: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(vm["threats"].as_array().unwrap().len(), 5);
            assert_eq!(vm["devices"].as_array().unwrap().len(), 10);
            assert_eq!(vm["threat_trend"].as_array().unwrap().len(), 30);
            assert_eq!(vm["kpis"]["zero_trust_score"], 78);
        });
    }

    #[test]
    fn test_root_page_renders_text_dashboard() {
        tokio_test::block_on(async {
            let response = get_response("/").await;
            assert_eq!(response.status(), StatusCode::OK);

            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let page = String::from_utf8(body.to_vec()).unwrap();
            assert!(page.contains("Security Dashboard"));
            assert!(page.contains("Demo MSP"));
            assert!(page.contains("admin (admin)"));
        });
    }

    #[test]
    fn test_unknown_route_is_404() {
        tokio_test::block_on(async {
            let response = get_response("/api/v1/nope").await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        });
    }
}
