//! Payment gateway client
//!
//! [`PaymentGateway`] is the single outbound seam of the service. The real
//! implementation talks to Cashfree's `pg/orders` endpoint; [`MockGateway`]
//! serves tests without a network.

use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::CashfreeConfig;

use super::error::GatewayError;
use super::types::{
    CreateOrderCall, CustomerDetails, GatewayOrder, GatewayOrderRequest, OrderMeta,
};

/// Fixed contact placeholder sent in `customer_details`
const PLACEHOLDER_PHONE: &str = "9999999999";

/// Outbound interface to the payment gateway
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order at the gateway and obtain its payment link
    async fn create_order(&self, call: &CreateOrderCall) -> Result<GatewayOrder, GatewayError>;
}

/// Cashfree client over HTTPS
pub struct CashfreeClient {
    config: CashfreeConfig,
    client: reqwest::Client,
}

impl CashfreeClient {
    pub fn new(config: CashfreeConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GatewayError::Http(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Return URL the gateway redirects the payer to after checkout
    fn return_url(&self, order_id: &str) -> String {
        format!(
            "{}/api/payment/success?order_id={}",
            self.config.return_domain, order_id
        )
    }
}

#[async_trait]
impl PaymentGateway for CashfreeClient {
    async fn create_order(&self, call: &CreateOrderCall) -> Result<GatewayOrder, GatewayError> {
        let url = format!("{}/pg/orders", self.config.base_url);
        let body = GatewayOrderRequest {
            order_id: call.order_id.clone(),
            order_amount: call.amount,
            order_currency: self.config.currency.clone(),
            customer_details: CustomerDetails {
                customer_id: call.user_id.clone(),
                customer_phone: PLACEHOLDER_PHONE.to_string(),
            },
            order_meta: OrderMeta {
                return_url: self.return_url(&call.order_id),
            },
        };

        debug!("Creating gateway order {} at {}", call.order_id, url);

        let response = self
            .client
            .post(&url)
            .header("x-client-id", &self.config.app_id)
            .header("x-client-secret", &self.config.secret)
            .header("x-api-version", &self.config.api_version)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let order: GatewayOrder = response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(format!("failed to parse response: {}", e)))?;

        info!(
            "Gateway order {} created, payment_link present: {}",
            call.order_id,
            order.payment_link.is_some()
        );

        Ok(order)
    }
}

/// Scripted gateway for tests
///
/// Records every call it receives so tests can assert on the outbound
/// request without a real endpoint.
pub struct MockGateway {
    response: Option<GatewayOrder>,
    fail: bool,
    calls: Mutex<Vec<CreateOrderCall>>,
}

impl MockGateway {
    /// Mock that answers every call with the given payment link
    pub fn returning_link(link: &str) -> Self {
        Self {
            response: Some(GatewayOrder {
                payment_link: Some(link.to_string()),
            }),
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mock whose response carries no payment link
    pub fn returning_no_link() -> Self {
        Self {
            response: Some(GatewayOrder { payment_link: None }),
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mock that fails every call with an upstream error
    pub fn failing() -> Self {
        Self {
            response: None,
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls received so far
    pub fn calls(&self) -> Vec<CreateOrderCall> {
        self.calls.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn create_order(&self, call: &CreateOrderCall) -> Result<GatewayOrder, GatewayError> {
        self.calls
            .lock()
            .expect("mock lock poisoned")
            .push(call.clone());

        if self.fail {
            return Err(GatewayError::Status {
                status: 502,
                body: "upstream unavailable".to_string(),
            });
        }

        Ok(self
            .response
            .clone()
            .unwrap_or(GatewayOrder { payment_link: None }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample_call() -> CreateOrderCall {
        CreateOrderCall {
            order_id: "ORD_1".to_string(),
            amount: Decimal::new(100, 0),
            user_id: "u1".to_string(),
        }
    }

    #[test]
    fn return_url_carries_order_id() {
        let client = CashfreeClient::new(CashfreeConfig {
            base_url: "https://api.cashfree.com".to_string(),
            api_version: "2023-08-01".to_string(),
            return_domain: "https://yourdomain.com".to_string(),
            currency: "INR".to_string(),
            timeout_secs: 30,
            app_id: "app".to_string(),
            secret: "secret".to_string(),
        })
        .unwrap();

        assert_eq!(
            client.return_url("ORD_42"),
            "https://yourdomain.com/api/payment/success?order_id=ORD_42"
        );
    }

    #[tokio::test]
    async fn mock_records_calls_and_returns_link() {
        let mock = MockGateway::returning_link("https://pay/abc");
        let order = mock.create_order(&sample_call()).await.unwrap();

        assert_eq!(order.payment_link.as_deref(), Some("https://pay/abc"));
        assert_eq!(mock.calls().len(), 1);
        assert_eq!(mock.calls()[0].order_id, "ORD_1");
    }

    #[tokio::test]
    async fn failing_mock_surfaces_upstream_status() {
        let mock = MockGateway::failing();
        let err = mock.create_order(&sample_call()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Status { status: 502, .. }));
    }
}
