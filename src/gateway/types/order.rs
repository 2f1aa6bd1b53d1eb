//! Inbound request shapes for the order endpoints

use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Body of POST /api/order/create
///
/// `amount` accepts either a JSON number or a numeric string. It is not
/// otherwise validated; the gateway is the authority on what it accepts.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    /// Opaque identifier of the paying party
    #[schema(example = "u1")]
    pub user_id: String,
    /// Monetary value of the order, in the configured currency
    #[schema(value_type = f64, example = 100.0)]
    pub amount: Decimal,
}

/// Query string carrying an order id (link, status, success page)
#[derive(Debug, Deserialize, IntoParams)]
pub struct OrderQuery {
    #[param(example = "ORD_1700000000000_1")]
    pub order_id: String,
}
