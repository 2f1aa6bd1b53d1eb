//! HTTP request handlers

pub mod health;
pub mod order;
pub mod payment;
pub mod webhook;

pub use health::{HealthResponse, health_check};
pub use order::{create_order, get_order_status};
pub use payment::{get_payment_link, payment_failed_page, payment_success_page};
pub use webhook::handle_webhook;
