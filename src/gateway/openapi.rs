//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{
    CreateOrderRequest, InvalidOrderResponse, NotFoundResponse, OrderCreateFailedResponse,
    OrderCreatedResponse, OrderStatusResponse, PaymentLinkResponse, WebhookEvent,
};
use crate::models::OrderStatus;

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Gateway API",
        version = "1.0.0",
        description = "Minimal order gateway bridging a merchant app to the Cashfree payment gateway.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::order::create_order,
        crate::gateway::handlers::order::get_order_status,
        crate::gateway::handlers::payment::get_payment_link,
        crate::gateway::handlers::payment::payment_success_page,
        crate::gateway::handlers::payment::payment_failed_page,
        crate::gateway::handlers::webhook::handle_webhook,
    ),
    components(schemas(
        HealthResponse,
        CreateOrderRequest,
        OrderCreatedResponse,
        OrderCreateFailedResponse,
        OrderStatusResponse,
        PaymentLinkResponse,
        InvalidOrderResponse,
        NotFoundResponse,
        WebhookEvent,
        OrderStatus,
    )),
    tags(
        (name = "Orders", description = "Order creation and status"),
        (name = "Payments", description = "Payment links and redirect pages"),
        (name = "Webhooks", description = "Gateway event notifications"),
        (name = "System", description = "Health and diagnostics")
    )
)]
pub struct ApiDoc;
