use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use aviva_core::payment::{PaymentProvider, ProviderError};
use aviva_core::{Order, OrderItem, OrderRepository, OrderStatus, PaymentMode};
use aviva_pay::{select_best_provider, ProviderRegistry, SelectError};

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("no payment providers registered")]
    NoProviders,

    #[error("payment provider {0} is not registered")]
    ProviderUnregistered(String),

    #[error("provider call failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("storage error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<SelectError> for OrderError {
    fn from(err: SelectError) -> Self {
        match err {
            SelectError::NoProviders => OrderError::NoProviders,
        }
    }
}

/// Orchestrates the order lifecycle: validate, pick the cheapest provider,
/// delegate the remote side effect, persist.
pub struct OrderService {
    store: Arc<dyn OrderRepository>,
    registry: Arc<ProviderRegistry>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderRepository>, registry: Arc<ProviderRegistry>) -> Self {
        Self { store, registry }
    }

    /// Create an order. Validation happens before any provider or store
    /// call; the order is persisted only after the provider call succeeds.
    pub async fn create(
        &self,
        payment_mode: PaymentMode,
        items: Vec<OrderItem>,
    ) -> Result<Order, OrderError> {
        if items.is_empty() {
            return Err(OrderError::Validation(
                "order must contain at least one item".to_string(),
            ));
        }
        for item in &items {
            if item.quantity <= 0 {
                return Err(OrderError::Validation(format!(
                    "invalid quantity for item \"{}\"",
                    item.product_name
                )));
            }
            if item.unit_price < Decimal::ZERO {
                return Err(OrderError::Validation(format!(
                    "invalid unit price for item \"{}\"",
                    item.product_name
                )));
            }
        }

        let mut order = Order::new(payment_mode);
        for item in items {
            order.add_item(item);
        }

        let (provider, fee) =
            select_best_provider(&self.registry, order.total_amount, order.payment_mode)?;

        let remote = provider
            .create_remote_order(order.total_amount, order.payment_mode, &order.items)
            .await?;

        order.provider_id = Some(provider.id());
        order.provider_name = Some(provider.name().to_string());
        order.provider_order_id = Some(remote.provider_order_id);
        order.provider_fee = fee;

        self.store.add(&order).await.map_err(OrderError::Store)?;

        tracing::info!(
            order_id = %order.id,
            provider = provider.name(),
            total = %order.total_amount,
            fee = %order.provider_fee,
            "order created"
        );
        Ok(order)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Order>, OrderError> {
        self.store.get(id).await.map_err(OrderError::Store)
    }

    /// All orders, most recently created first
    pub async fn list(&self) -> Result<Vec<Order>, OrderError> {
        self.store.list().await.map_err(OrderError::Store)
    }

    /// Cancel an order. `Ok(None)` when no such order exists; cancelling an
    /// already-cancelled order succeeds without touching the provider.
    pub async fn cancel(&self, id: Uuid) -> Result<Option<Order>, OrderError> {
        let Some(mut order) = self.store.get(id).await.map_err(OrderError::Store)? else {
            return Ok(None);
        };

        if order.status == OrderStatus::Cancelled {
            return Ok(Some(order));
        }

        let provider = self.resolve_provider(&order)?;
        if let Some(remote_id) = order.provider_order_id.as_deref() {
            provider.cancel_remote_order(remote_id).await?;
        }

        order.update_status(OrderStatus::Cancelled);
        self.store.update(&order).await.map_err(OrderError::Store)?;

        tracing::info!(order_id = %order.id, "order cancelled");
        Ok(Some(order))
    }

    /// Pay an order. `Ok(None)` when no such order exists; paying an
    /// already-paid order succeeds without touching the provider. A
    /// cancelled order cannot be paid.
    pub async fn pay(&self, id: Uuid) -> Result<Option<Order>, OrderError> {
        let Some(mut order) = self.store.get(id).await.map_err(OrderError::Store)? else {
            return Ok(None);
        };

        if order.status == OrderStatus::Paid {
            return Ok(Some(order));
        }
        if order.status == OrderStatus::Cancelled {
            return Err(OrderError::InvalidTransition {
                from: format!("{:?}", order.status),
                to: "Paid".to_string(),
            });
        }

        let provider = self.resolve_provider(&order)?;
        if let Some(remote_id) = order.provider_order_id.as_deref() {
            provider.pay_remote_order(remote_id).await?;
        }

        order.update_status(OrderStatus::Paid);
        self.store.update(&order).await.map_err(OrderError::Store)?;

        tracing::info!(order_id = %order.id, "order paid");
        Ok(Some(order))
    }

    /// Resolve the provider an order was created against. Orders persist
    /// the provider's stable id, so this only fails if the provider has
    /// been unregistered since the order was created.
    fn resolve_provider(&self, order: &Order) -> Result<Arc<dyn PaymentProvider>, OrderError> {
        order
            .provider_id
            .as_ref()
            .and_then(|id| self.registry.get(id))
            .ok_or_else(|| {
                let name = order
                    .provider_id
                    .as_ref()
                    .map(|id| id.to_string())
                    .unwrap_or_default();
                tracing::warn!(order_id = %order.id, provider = %name, "stored provider is not registered");
                OrderError::ProviderUnregistered(name)
            })
    }
}
