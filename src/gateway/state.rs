//! Shared gateway application state

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::cashfree::PaymentGateway;
use crate::store::OrderStore;

/// Gateway application state (shared across handlers)
#[derive(Clone)]
pub struct AppState {
    /// Order table
    pub store: Arc<dyn OrderStore>,
    /// Outbound payment gateway client
    pub gateway: Arc<dyn PaymentGateway>,
    /// Order id sequence
    order_id_seq: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(store: Arc<dyn OrderStore>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            store,
            gateway,
            order_id_seq: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Generate the next order id
    ///
    /// `ORD_<unix_millis>_<seq>`. The atomic sequence keeps ids unique even
    /// when two creates interleave within the same millisecond.
    pub fn next_order_id(&self) -> String {
        let seq = self.order_id_seq.fetch_add(1, Ordering::SeqCst);
        format!("ORD_{}_{}", now_ms(), seq)
    }
}

/// Current wall-clock time in unix milliseconds
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
