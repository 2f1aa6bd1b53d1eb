//! Order Gateway Service
//!
//! A thin backend bridging a merchant application to the Cashfree payment
//! gateway: create orders, hand out payment links, track payment status,
//! and apply webhook-driven state transitions. Order state is held in
//! process memory behind a swappable store abstraction.
//!
//! # Modules
//!
//! - [`models`] - Order record and lifecycle status
//! - [`store`] - OrderStore trait + in-memory implementation
//! - [`cashfree`] - Outbound payment gateway client
//! - [`gateway`] - Axum HTTP surface (router, state, handlers, types)
//! - [`config`] - YAML configuration + env-provided credentials
//! - [`logging`] - tracing setup

pub mod cashfree;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod store;

// Convenient re-exports at crate root
pub use cashfree::{CashfreeClient, GatewayError, MockGateway, PaymentGateway};
pub use config::{AppConfig, CashfreeConfig};
pub use gateway::state::AppState;
pub use gateway::{build_router, run_server};
pub use models::{Order, OrderStatus};
pub use store::{InMemoryOrderStore, OrderStore, StatusTransition};
