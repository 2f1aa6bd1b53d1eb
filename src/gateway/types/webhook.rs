//! Webhook event payload
//!
//! Cashfree delivers events with a `type` discriminator and the order id
//! nested at `data.order.order_id`. Every field is optional here: the
//! handler acknowledges malformed or foreign payloads instead of erroring,
//! so deserialization must never reject a body outright.

use serde::Deserialize;
use utoipa::ToSchema;

/// Event type value signalling a completed payment
pub const EVENT_PAYMENT_SUCCESS: &str = "PAYMENT_SUCCESS";
/// Event type value signalling a failed payment
pub const EVENT_PAYMENT_FAILED: &str = "PAYMENT_FAILED";

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    #[schema(example = "PAYMENT_SUCCESS")]
    pub event_type: Option<String>,
    pub data: Option<WebhookData>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct WebhookData {
    pub order: Option<WebhookOrder>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct WebhookOrder {
    #[schema(example = "ORD_1700000000000_1")]
    pub order_id: Option<String>,
}

impl WebhookEvent {
    /// Order id at the fixed path `data.order.order_id`, if present
    pub fn order_id(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.order.as_ref())
            .and_then(|o| o.order_id.as_deref())
    }
}
