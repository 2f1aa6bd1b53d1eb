//! Order handlers (create, status)

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::cashfree::CreateOrderCall;
use crate::models::{Order, OrderStatus};

use super::super::state::AppState;
use super::super::types::{
    CreateOrderRequest, NotFoundResponse, OrderCreateFailedResponse, OrderCreatedResponse,
    OrderQuery, OrderStatusResponse,
};

/// Create order endpoint
///
/// Generates a fresh order id, creates the order at the payment gateway,
/// and stores the local record. A gateway failure is mapped to a structured
/// `{success: false, error}` body instead of propagating; nothing is stored
/// in that case.
#[utoipa::path(
    post,
    path = "/api/order/create",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = OrderCreatedResponse),
        (status = 502, description = "Payment gateway call failed", body = OrderCreateFailedResponse)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<OrderCreatedResponse>, (StatusCode, Json<OrderCreateFailedResponse>)> {
    let order_id = state.next_order_id();
    tracing::info!(
        "Create Order {}: user {} amount {}",
        order_id,
        req.user_id,
        req.amount
    );

    let call = CreateOrderCall {
        order_id: order_id.clone(),
        amount: req.amount,
        user_id: req.user_id.clone(),
    };

    let gateway_order = match state.gateway.create_order(&call).await {
        Ok(order) => order,
        Err(e) => {
            tracing::error!("Create Order {}: gateway call failed: {}", order_id, e);
            return Err((
                StatusCode::BAD_GATEWAY,
                Json(OrderCreateFailedResponse::new(e.to_string())),
            ));
        }
    };

    if gateway_order.payment_link.is_none() {
        tracing::warn!("Create Order {}: gateway returned no payment_link", order_id);
    }

    state
        .store
        .insert(Order {
            order_id: order_id.clone(),
            user_id: req.user_id,
            amount: req.amount,
            status: OrderStatus::Created,
            payment_link: gateway_order.payment_link.clone(),
        })
        .await;

    Ok(Json(OrderCreatedResponse::new(
        order_id,
        gateway_order.payment_link,
    )))
}

/// Order status endpoint
///
/// Unknown order ids are a normal negative result, not an error: the
/// response stays HTTP 200 with `{success: false}`.
#[utoipa::path(
    get,
    path = "/api/order/status",
    params(OrderQuery),
    responses(
        (status = 200, description = "Order status, or {success: false} when unknown", body = OrderStatusResponse)
    ),
    tag = "Orders"
)]
pub async fn get_order_status(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OrderQuery>,
) -> Result<Json<OrderStatusResponse>, Json<NotFoundResponse>> {
    match state.store.get(&query.order_id).await {
        Some(order) => Ok(Json(OrderStatusResponse::new(order.status))),
        None => Err(Json(NotFoundResponse::new())),
    }
}
