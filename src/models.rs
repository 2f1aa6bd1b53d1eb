//! Order record and lifecycle status

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order lifecycle status
///
/// Starts at `Created`; the webhook handler moves it to `Paid` or `Failed`
/// exactly once. No transition leads back to `Created` or between the two
/// terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Paid,
    Failed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Created => "CREATED",
            OrderStatus::Paid => "PAID",
            OrderStatus::Failed => "FAILED",
        }
    }
}

/// Local record tracking a requested payment
///
/// Lives only in process memory; restarting the service loses all orders.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Lookup key, assigned once at creation and never reused
    pub order_id: String,
    /// Caller-supplied opaque identifier of the paying party
    pub user_id: String,
    pub amount: Decimal,
    pub status: OrderStatus,
    /// URL from the gateway's create-order response; absent if the
    /// response shape lacked one
    pub payment_link: Option<String>,
}
