//! Order store abstraction
//!
//! Handlers speak only to [`OrderStore`], so a durable backing store can be
//! swapped in without touching handler logic. The default implementation is
//! a process-local [`DashMap`]; it holds no history and writes nothing to
//! disk, so a restart loses every order.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::models::{Order, OrderStatus};

/// Outcome of a conditional status transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTransition {
    /// Order was in the expected state; new status written
    Applied,
    /// Order exists but was not in the expected state; nothing written
    Rejected,
    /// No order under that id
    NotFound,
}

/// Storage interface for order records
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert a freshly created order. `order_id` is assumed unique; the
    /// id generator guarantees that within one process run.
    async fn insert(&self, order: Order);

    /// Fetch a snapshot of an order by id
    async fn get(&self, order_id: &str) -> Option<Order>;

    /// Compare-and-set the status: apply `to` only if the current status
    /// is `from`. This is what keeps `Created -> Paid` and
    /// `Created -> Failed` each reachable at most once.
    async fn set_status_if(
        &self,
        order_id: &str,
        from: OrderStatus,
        to: OrderStatus,
    ) -> StatusTransition;
}

/// In-memory order table
#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: DashMap<String, Order>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no orders are held (test/diagnostic use)
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(&self, order: Order) {
        self.orders.insert(order.order_id.clone(), order);
    }

    async fn get(&self, order_id: &str) -> Option<Order> {
        self.orders.get(order_id).map(|entry| entry.clone())
    }

    async fn set_status_if(
        &self,
        order_id: &str,
        from: OrderStatus,
        to: OrderStatus,
    ) -> StatusTransition {
        // DashMap's get_mut holds the shard lock, so the check and the
        // write are atomic with respect to other callers of this entry.
        match self.orders.get_mut(order_id) {
            Some(mut entry) => {
                if entry.status == from {
                    entry.status = to;
                    StatusTransition::Applied
                } else {
                    StatusTransition::Rejected
                }
            }
            None => StatusTransition::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample_order(id: &str) -> Order {
        Order {
            order_id: id.to_string(),
            user_id: "u1".to_string(),
            amount: Decimal::new(100, 0),
            status: OrderStatus::Created,
            payment_link: Some("https://pay/abc".to_string()),
        }
    }

    #[tokio::test]
    async fn insert_then_get_returns_same_order() {
        let store = InMemoryOrderStore::new();
        store.insert(sample_order("ORD_1")).await;

        let fetched = store.get("ORD_1").await.unwrap();
        assert_eq!(fetched, sample_order("ORD_1"));
    }

    #[tokio::test]
    async fn get_missing_order_is_none() {
        let store = InMemoryOrderStore::new();
        assert!(store.get("ORD_missing").await.is_none());
    }

    #[tokio::test]
    async fn cas_applies_only_from_expected_state() {
        let store = InMemoryOrderStore::new();
        store.insert(sample_order("ORD_1")).await;

        let first = store
            .set_status_if("ORD_1", OrderStatus::Created, OrderStatus::Paid)
            .await;
        assert_eq!(first, StatusTransition::Applied);
        assert_eq!(store.get("ORD_1").await.unwrap().status, OrderStatus::Paid);

        // Second transition attempt must not overwrite the terminal state
        let second = store
            .set_status_if("ORD_1", OrderStatus::Created, OrderStatus::Failed)
            .await;
        assert_eq!(second, StatusTransition::Rejected);
        assert_eq!(store.get("ORD_1").await.unwrap().status, OrderStatus::Paid);
    }

    #[tokio::test]
    async fn cas_on_unknown_order_reports_not_found() {
        let store = InMemoryOrderStore::new();
        let outcome = store
            .set_status_if("ORD_ghost", OrderStatus::Created, OrderStatus::Paid)
            .await;
        assert_eq!(outcome, StatusTransition::NotFound);
        assert!(store.is_empty());
    }
}
