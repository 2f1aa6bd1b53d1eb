//! Payment link lookup and redirect pages

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    response::Html,
};

use super::super::state::AppState;
use super::super::types::{InvalidOrderResponse, OrderQuery, PaymentLinkResponse};

/// Payment link endpoint
///
/// Returns the link stored at creation time; it is never re-fetched from
/// the gateway.
#[utoipa::path(
    get,
    path = "/api/payment/link",
    params(OrderQuery),
    responses(
        (status = 200, description = "Payment link, or {success: false, message: \"Invalid Order\"} when unknown", body = PaymentLinkResponse)
    ),
    tag = "Payments"
)]
pub async fn get_payment_link(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OrderQuery>,
) -> Result<Json<PaymentLinkResponse>, Json<InvalidOrderResponse>> {
    match state.store.get(&query.order_id).await {
        Some(order) => Ok(Json(PaymentLinkResponse::new(order.payment_link))),
        None => Err(Json(InvalidOrderResponse::new())),
    }
}

/// Success redirect page
///
/// The gateway redirects the payer here after checkout. Purely
/// presentational; no state change.
#[utoipa::path(
    get,
    path = "/api/payment/success",
    params(OrderQuery),
    responses(
        (status = 200, description = "Confirmation page", content_type = "text/html")
    ),
    tag = "Payments"
)]
pub async fn payment_success_page(Query(query): Query<OrderQuery>) -> Html<String> {
    Html(format!(
        "<h2>Payment Successful</h2>\n<p>Order ID: {}</p>",
        query.order_id
    ))
}

/// Failure redirect page
#[utoipa::path(
    get,
    path = "/api/payment/failed",
    responses(
        (status = 200, description = "Failure page", content_type = "text/html")
    ),
    tag = "Payments"
)]
pub async fn payment_failed_page() -> Html<&'static str> {
    Html("<h2>Payment Failed</h2>")
}
