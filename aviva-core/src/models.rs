use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::payment::ProviderId;

/// How the customer intends to pay; selects the fee schedule branch a
/// provider quotes against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMode {
    Cash,
    Transfer,
    CreditCard,
}

/// Order status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Paid,
    Cancelled,
}

/// The single source of truth for a customer's purchase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Always equals the sum of item subtotals.
    pub total_amount: Decimal,
    pub payment_mode: PaymentMode,
    /// Stable identifier of the provider engaged for this order.
    /// Empty until the provider call succeeds, as are the fields below.
    pub provider_id: Option<ProviderId>,
    pub provider_name: Option<String>,
    pub provider_order_id: Option<String>,
    pub provider_fee: Decimal,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn new(payment_mode: PaymentMode) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            total_amount: Decimal::ZERO,
            payment_mode,
            provider_id: None,
            provider_name: None,
            provider_order_id: None,
            provider_fee: Decimal::ZERO,
            status: OrderStatus::Created,
            items: Vec::new(),
        }
    }

    /// Add an item to the order, keeping the total in sync
    pub fn add_item(&mut self, item: OrderItem) {
        self.total_amount += item.subtotal();
        self.items.push(item);
    }

    /// Update order status
    pub fn update_status(&mut self, new_status: OrderStatus) {
        self.status = new_status;
    }
}

/// An individual product line within an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl OrderItem {
    pub fn new(product_name: impl Into<String>, quantity: i32, unit_price: Decimal) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
            unit_price,
        }
    }

    /// Derived, never stored independently.
    pub fn subtotal(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}
