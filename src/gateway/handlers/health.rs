//! Health check handler

use axum::Json;
use utoipa::ToSchema;

use super::super::state::now_ms;

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    pub success: bool,
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
}

/// Health check endpoint
///
/// The service has no required external dependencies at runtime (the
/// gateway is only called on order creation), so health is simply
/// liveness plus a server timestamp.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        timestamp_ms: now_ms(),
    })
}
