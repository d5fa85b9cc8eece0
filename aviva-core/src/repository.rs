use async_trait::async_trait;
use uuid::Uuid;

use crate::models::Order;

/// Repository trait for order data access
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn add(
        &self,
        order: &Order,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn get(
        &self,
        id: Uuid,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>>;

    /// All orders, most recently created first
    async fn list(&self) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>>;

    async fn update(
        &self,
        order: &Order,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
