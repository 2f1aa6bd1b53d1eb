//! API response types
//!
//! These mirror the wire contract exactly: every payload carries a
//! `success` flag, negative read results stay HTTP 200, and optional
//! fields are omitted from the JSON rather than serialized as null.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::OrderStatus;

/// POST /api/order/create, success branch
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderCreatedResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "ORD_1700000000000_1")]
    pub order_id: String,
    /// Omitted when the gateway response carried no link
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "https://pay/abc")]
    pub payment_link: Option<String>,
}

impl OrderCreatedResponse {
    pub fn new(order_id: String, payment_link: Option<String>) -> Self {
        Self {
            success: true,
            order_id,
            payment_link,
        }
    }
}

/// POST /api/order/create, gateway failure branch
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderCreateFailedResponse {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "gateway returned HTTP 502: upstream unavailable")]
    pub error: String,
}

impl OrderCreateFailedResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// GET /api/payment/link, order found
#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentLinkResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_link: Option<String>,
}

impl PaymentLinkResponse {
    pub fn new(payment_link: Option<String>) -> Self {
        Self {
            success: true,
            payment_link,
        }
    }
}

/// GET /api/payment/link, unknown order
#[derive(Debug, Serialize, ToSchema)]
pub struct InvalidOrderResponse {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Invalid Order")]
    pub message: String,
}

impl InvalidOrderResponse {
    pub fn new() -> Self {
        Self {
            success: false,
            message: "Invalid Order".to_string(),
        }
    }
}

impl Default for InvalidOrderResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// GET /api/order/status, order found
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderStatusResponse {
    pub success: bool,
    #[schema(example = "CREATED")]
    pub status: OrderStatus,
}

impl OrderStatusResponse {
    pub fn new(status: OrderStatus) -> Self {
        Self {
            success: true,
            status,
        }
    }
}

/// Bare negative result (status lookup miss)
#[derive(Debug, Serialize, ToSchema)]
pub struct NotFoundResponse {
    #[schema(example = false)]
    pub success: bool,
}

impl NotFoundResponse {
    pub fn new() -> Self {
        Self { success: false }
    }
}

impl Default for NotFoundResponse {
    fn default() -> Self {
        Self::new()
    }
}
