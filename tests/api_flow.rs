//! End-to-end API tests
//!
//! Each test boots the production router on an ephemeral port with a
//! scripted payment gateway, then drives the HTTP surface with reqwest.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::{Value, json};

use order_gateway::cashfree::{MockGateway, PaymentGateway};
use order_gateway::gateway::build_router;
use order_gateway::gateway::state::AppState;
use order_gateway::store::InMemoryOrderStore;

struct TestApp {
    base_url: String,
    client: reqwest::Client,
    store: Arc<InMemoryOrderStore>,
}

impl TestApp {
    async fn spawn(gateway: Arc<dyn PaymentGateway>) -> Self {
        let store = Arc::new(InMemoryOrderStore::new());
        let state = Arc::new(AppState::new(store.clone(), gateway));
        let router = build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("test server");
        });

        Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
            store,
        }
    }

    async fn create_order(&self, user_id: &str, amount: u64) -> reqwest::Response {
        self.client
            .post(format!("{}/api/order/create", self.base_url))
            .json(&json!({ "user_id": user_id, "amount": amount }))
            .send()
            .await
            .expect("create request")
    }

    async fn get_json(&self, path_and_query: &str) -> Value {
        self.client
            .get(format!("{}{}", self.base_url, path_and_query))
            .send()
            .await
            .expect("get request")
            .json()
            .await
            .expect("json body")
    }

    async fn post_webhook(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/webhook/cashfree", self.base_url))
            .json(body)
            .send()
            .await
            .expect("webhook request")
    }
}

fn webhook_event(event_type: &str, order_id: &str) -> Value {
    json!({ "type": event_type, "data": { "order": { "order_id": order_id } } })
}

#[tokio::test]
async fn create_order_returns_link_and_created_status() {
    let gateway = Arc::new(MockGateway::returning_link("https://pay/abc"));
    let app = TestApp::spawn(gateway.clone()).await;

    let response = app.create_order("u1", 100).await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["payment_link"], "https://pay/abc");
    let order_id = body["order_id"].as_str().unwrap().to_string();
    assert!(order_id.starts_with("ORD_"));

    // Outbound call carried our fields
    let calls = gateway.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].order_id, order_id);
    assert_eq!(calls[0].user_id, "u1");

    let status = app
        .get_json(&format!("/api/order/status?order_id={}", order_id))
        .await;
    assert_eq!(status["success"], true);
    assert_eq!(status["status"], "CREATED");
}

#[tokio::test]
async fn link_and_status_reads_are_idempotent() {
    let app = TestApp::spawn(Arc::new(MockGateway::returning_link("https://pay/abc"))).await;
    let body: Value = app.create_order("u1", 100).await.json().await.unwrap();
    let order_id = body["order_id"].as_str().unwrap();

    let link_path = format!("/api/payment/link?order_id={}", order_id);
    let first = app.get_json(&link_path).await;
    let second = app.get_json(&link_path).await;
    assert_eq!(first, second);
    assert_eq!(first["success"], true);
    assert_eq!(first["payment_link"], "https://pay/abc");

    let status_path = format!("/api/order/status?order_id={}", order_id);
    assert_eq!(app.get_json(&status_path).await, app.get_json(&status_path).await);
}

#[tokio::test]
async fn unknown_order_yields_structured_negatives() {
    let app = TestApp::spawn(Arc::new(MockGateway::returning_link("https://pay/abc"))).await;

    let link = app.get_json("/api/payment/link?order_id=ORD_ghost").await;
    assert_eq!(link, json!({ "success": false, "message": "Invalid Order" }));

    let status = app.get_json("/api/order/status?order_id=ORD_ghost").await;
    assert_eq!(status, json!({ "success": false }));
}

#[tokio::test]
async fn success_webhook_marks_order_paid() {
    let app = TestApp::spawn(Arc::new(MockGateway::returning_link("https://pay/abc"))).await;
    let body: Value = app.create_order("u1", 100).await.json().await.unwrap();
    let order_id = body["order_id"].as_str().unwrap().to_string();

    let ack = app
        .post_webhook(&webhook_event("PAYMENT_SUCCESS", &order_id))
        .await;
    assert_eq!(ack.status(), 200);

    let status = app
        .get_json(&format!("/api/order/status?order_id={}", order_id))
        .await;
    assert_eq!(status["status"], "PAID");
}

#[tokio::test]
async fn failure_webhook_marks_order_failed() {
    let app = TestApp::spawn(Arc::new(MockGateway::returning_link("https://pay/abc"))).await;
    let body: Value = app.create_order("u2", 250).await.json().await.unwrap();
    let order_id = body["order_id"].as_str().unwrap().to_string();

    let ack = app
        .post_webhook(&webhook_event("PAYMENT_FAILED", &order_id))
        .await;
    assert_eq!(ack.status(), 200);

    let status = app
        .get_json(&format!("/api/order/status?order_id={}", order_id))
        .await;
    assert_eq!(status["status"], "FAILED");
}

#[tokio::test]
async fn terminal_status_is_not_overwritten() {
    let app = TestApp::spawn(Arc::new(MockGateway::returning_link("https://pay/abc"))).await;
    let body: Value = app.create_order("u1", 100).await.json().await.unwrap();
    let order_id = body["order_id"].as_str().unwrap().to_string();

    app.post_webhook(&webhook_event("PAYMENT_SUCCESS", &order_id))
        .await;
    // A late contradictory event is acknowledged but changes nothing
    let ack = app
        .post_webhook(&webhook_event("PAYMENT_FAILED", &order_id))
        .await;
    assert_eq!(ack.status(), 200);

    let status = app
        .get_json(&format!("/api/order/status?order_id={}", order_id))
        .await;
    assert_eq!(status["status"], "PAID");
}

#[tokio::test]
async fn unrecognized_event_type_is_ignored() {
    let app = TestApp::spawn(Arc::new(MockGateway::returning_link("https://pay/abc"))).await;
    let body: Value = app.create_order("u1", 100).await.json().await.unwrap();
    let order_id = body["order_id"].as_str().unwrap().to_string();

    let ack = app
        .post_webhook(&webhook_event("PAYMENT_REFUND", &order_id))
        .await;
    assert_eq!(ack.status(), 200);

    let status = app
        .get_json(&format!("/api/order/status?order_id={}", order_id))
        .await;
    assert_eq!(status["status"], "CREATED");
}

#[tokio::test]
async fn webhook_for_unknown_order_is_acknowledged_without_side_effects() {
    let app = TestApp::spawn(Arc::new(MockGateway::returning_link("https://pay/abc"))).await;

    let ack = app
        .post_webhook(&webhook_event("PAYMENT_SUCCESS", "ORD_foreign"))
        .await;
    assert_eq!(ack.status(), 200);
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn malformed_webhook_bodies_are_still_acknowledged() {
    let app = TestApp::spawn(Arc::new(MockGateway::returning_link("https://pay/abc"))).await;

    for body in ["not json at all", "{}", r#"{"type":"PAYMENT_SUCCESS"}"#] {
        let ack = app
            .client
            .post(format!("{}/api/webhook/cashfree", app.base_url))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .unwrap();
        assert_eq!(ack.status(), 200, "body {:?} was not acknowledged", body);
    }
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn gateway_failure_returns_structured_error_and_stores_nothing() {
    let app = TestApp::spawn(Arc::new(MockGateway::failing())).await;

    let response = app.create_order("u1", 100).await;
    assert_eq!(response.status(), 502);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("502"));
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn missing_payment_link_is_omitted_not_null() {
    let app = TestApp::spawn(Arc::new(MockGateway::returning_no_link())).await;

    let body: Value = app.create_order("u1", 100).await.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert!(body.get("payment_link").is_none());

    let order_id = body["order_id"].as_str().unwrap();
    let link = app
        .get_json(&format!("/api/payment/link?order_id={}", order_id))
        .await;
    assert_eq!(link["success"], true);
    assert!(link.get("payment_link").is_none());
}

#[tokio::test]
async fn order_ids_are_unique_across_concurrent_creates() {
    let app = Arc::new(TestApp::spawn(Arc::new(MockGateway::returning_link("https://pay/abc"))).await);

    let mut handles = Vec::new();
    for i in 0..20 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let body: Value = app
                .create_order(&format!("u{}", i), 100)
                .await
                .json()
                .await
                .unwrap();
            body["order_id"].as_str().unwrap().to_string()
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        assert!(ids.insert(handle.await.unwrap()), "duplicate order id");
    }
    assert_eq!(ids.len(), 20);
}

#[tokio::test]
async fn redirect_pages_render_html() {
    let app = TestApp::spawn(Arc::new(MockGateway::returning_link("https://pay/abc"))).await;

    let success = app
        .client
        .get(format!(
            "{}/api/payment/success?order_id=ORD_42",
            app.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(success.status(), 200);
    let page = success.text().await.unwrap();
    assert!(page.contains("Payment Successful"));
    assert!(page.contains("ORD_42"));

    let failed = app
        .client
        .get(format!("{}/api/payment/failed", app.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(failed.status(), 200);
    assert!(failed.text().await.unwrap().contains("Payment Failed"));
}

#[tokio::test]
async fn health_endpoint_reports_liveness() {
    let app = TestApp::spawn(Arc::new(MockGateway::returning_link("https://pay/abc"))).await;

    let health = app.get_json("/api/v1/health").await;
    assert_eq!(health["success"], true);
    assert!(health["timestamp_ms"].as_u64().unwrap() > 0);
}
