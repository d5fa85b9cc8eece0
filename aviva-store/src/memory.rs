use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use aviva_core::{Order, OrderRepository};

/// Keyed in-memory record store for orders. Each read-modify-write goes
/// through the map-wide lock, so single-order updates are atomic.
#[derive(Default)]
pub struct MemoryOrderStore {
    orders: RwLock<HashMap<Uuid, Order>>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl OrderRepository for MemoryOrderStore {
    async fn add(&self, order: &Order) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut orders = self.orders.write().await;
        orders.insert(order.id, order.clone());
        tracing::debug!(order_id = %order.id, "order stored");
        Ok(())
    }

    async fn get(
        &self,
        id: Uuid,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>> {
        let orders = self.orders.read().await;
        Ok(orders.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>> {
        let orders = self.orders.read().await;
        let mut all: Vec<Order> = orders.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn update(&self, order: &Order) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut orders = self.orders.write().await;
        if !orders.contains_key(&order.id) {
            return Err(format!("order {} not found in store", order.id).into());
        }
        orders.insert(order.id, order.clone());
        tracing::debug!(order_id = %order.id, status = ?order.status, "order updated");
        Ok(())
    }
}
