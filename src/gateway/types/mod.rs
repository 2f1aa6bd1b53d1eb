//! Gateway types module
//!
//! ## Input types
//! - [`CreateOrderRequest`]: order creation body
//! - [`OrderQuery`]: `order_id` query extraction
//! - [`WebhookEvent`]: lenient webhook payload
//!
//! ## Output types
//! - Response DTOs in [`response`], one per wire shape

pub mod order;
pub mod response;
pub mod webhook;

// Re-export commonly used types at module root
pub use order::{CreateOrderRequest, OrderQuery};
pub use response::{
    InvalidOrderResponse, NotFoundResponse, OrderCreateFailedResponse, OrderCreatedResponse,
    OrderStatusResponse, PaymentLinkResponse,
};
pub use webhook::{EVENT_PAYMENT_FAILED, EVENT_PAYMENT_SUCCESS, WebhookEvent};
