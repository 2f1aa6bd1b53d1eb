//! HTTP gateway: router assembly and server loop

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Build the application router
///
/// Separated from [`run_server`] so integration tests can drive the exact
/// production routing against an ephemeral listener.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Order API
        .route("/api/order/create", post(handlers::create_order))
        .route("/api/order/status", get(handlers::get_order_status))
        // Payment API
        .route("/api/payment/link", get(handlers::get_payment_link))
        .route("/api/payment/success", get(handlers::payment_success_page))
        .route("/api/payment/failed", get(handlers::payment_failed_page))
        // Gateway webhook
        .route("/api/webhook/cashfree", post(handlers::handle_webhook))
        // Health check
        .route("/api/v1/health", get(handlers::health_check))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start the HTTP gateway server
pub async fn run_server(port: u16, state: Arc<AppState>) {
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                port, port
            );
            std::process::exit(1);
        }
    };

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API Docs: http://{}/docs", addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
