//! Cashfree webhook receiver
//!
//! The gateway retries (and eventually disables) webhooks that are not
//! acknowledged with a success status, so this handler answers HTTP 200
//! unconditionally. Outcomes that would otherwise be invisible (unknown
//! orders, unrecognized event types, rejected transitions) are logged.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode};

use crate::models::OrderStatus;
use crate::store::StatusTransition;

use super::super::state::AppState;
use super::super::types::{EVENT_PAYMENT_FAILED, EVENT_PAYMENT_SUCCESS, WebhookEvent};

/// Webhook endpoint
///
/// Applies `CREATED -> PAID` on a success event and `CREATED -> FAILED` on
/// a failure event, via compare-and-set so each transition happens at most
/// once. No signature verification is performed; any caller reaching this
/// endpoint is trusted (see DESIGN.md).
#[utoipa::path(
    post,
    path = "/api/webhook/cashfree",
    request_body = WebhookEvent,
    responses(
        (status = 200, description = "Acknowledged, regardless of outcome")
    ),
    tag = "Webhooks"
)]
pub async fn handle_webhook(State(state): State<Arc<AppState>>, body: Bytes) -> StatusCode {
    // Parse by hand so even a malformed body is acknowledged
    let event: WebhookEvent = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Webhook: unparseable payload: {}", e);
            return StatusCode::OK;
        }
    };

    let order_id = match event.order_id() {
        Some(id) => id.to_string(),
        None => {
            tracing::warn!("Webhook: payload missing data.order.order_id");
            return StatusCode::OK;
        }
    };

    let target = match event.event_type.as_deref() {
        Some(EVENT_PAYMENT_SUCCESS) => OrderStatus::Paid,
        Some(EVENT_PAYMENT_FAILED) => OrderStatus::Failed,
        other => {
            tracing::debug!(
                "Webhook: ignoring event type {:?} for order {}",
                other,
                order_id
            );
            return StatusCode::OK;
        }
    };

    match state
        .store
        .set_status_if(&order_id, OrderStatus::Created, target)
        .await
    {
        StatusTransition::Applied => {
            tracing::info!("Webhook: order {} -> {}", order_id, target.as_str());
        }
        StatusTransition::Rejected => {
            tracing::warn!(
                "Webhook: order {} already final, {} event dropped",
                order_id,
                target.as_str()
            );
        }
        StatusTransition::NotFound => {
            // Foreign or unknown order: acknowledge and drop. In a
            // load-balanced deployment this also swallows events for
            // orders created by another instance.
            tracing::debug!("Webhook: unknown order {}", order_id);
        }
    }

    StatusCode::OK
}
