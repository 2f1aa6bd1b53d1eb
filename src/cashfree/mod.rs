//! Cashfree payment gateway integration
//!
//! - [`client`]: the [`PaymentGateway`] trait, the HTTPS client, and a
//!   scripted mock for tests
//! - [`types`]: outbound wire shapes
//! - [`error`]: client error taxonomy

pub mod client;
pub mod error;
pub mod types;

pub use client::{CashfreeClient, MockGateway, PaymentGateway};
pub use error::GatewayError;
pub use types::{CreateOrderCall, GatewayOrder};
