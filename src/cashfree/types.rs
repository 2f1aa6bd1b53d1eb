//! Cashfree wire shapes for the create-order call
//!
//! Request fields follow the `pg/orders` API: top-level order fields plus
//! nested `customer_details` and `order_meta`. The response is parsed
//! leniently; everything except `payment_link` is ignored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters the service passes to the gateway client
#[derive(Debug, Clone)]
pub struct CreateOrderCall {
    pub order_id: String,
    pub amount: Decimal,
    pub user_id: String,
}

/// JSON body of POST {base_url}/pg/orders
#[derive(Debug, Serialize)]
pub struct GatewayOrderRequest {
    pub order_id: String,
    /// Cashfree expects a JSON number here; Decimal's default serde
    /// would emit a string
    #[serde(with = "rust_decimal::serde::float")]
    pub order_amount: Decimal,
    pub order_currency: String,
    pub customer_details: CustomerDetails,
    pub order_meta: OrderMeta,
}

#[derive(Debug, Serialize)]
pub struct CustomerDetails {
    pub customer_id: String,
    pub customer_phone: String,
}

#[derive(Debug, Serialize)]
pub struct OrderMeta {
    pub return_url: String,
}

/// Gateway create-order response, reduced to the field we use
///
/// A missing `payment_link` is not a decode error; the caller stores the
/// order without a link.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayOrder {
    #[serde(default)]
    pub payment_link: Option<String>,
}
