use std::fmt;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{OrderItem, PaymentMode};

/// Stable identifier for a payment provider. Orders reference providers by
/// this slug rather than the display name, so renaming a provider does not
/// orphan the orders that point at it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Provider-issued identifier correlating to the remote-side order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderOrderResult {
    pub provider_order_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Remote(String),

    #[error("provider response did not include an order id")]
    MissingOrderId,
}

/// An external payment processor: quotes a fee for an amount under a payment
/// mode, and carries out order creation/cancellation/payment on its side.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Stable slug used to resolve this provider at cancel/pay time
    fn id(&self) -> ProviderId;

    /// Display name shown to callers
    fn name(&self) -> &str;

    /// Quote the fee for processing `amount` under `mode`. Pure; rounded to
    /// 2 decimal places, half-up.
    fn calculate_fee(&self, amount: Decimal, mode: PaymentMode) -> Decimal;

    /// Create the order on the provider's side
    async fn create_remote_order(
        &self,
        amount: Decimal,
        mode: PaymentMode,
        items: &[OrderItem],
    ) -> Result<ProviderOrderResult, ProviderError>;

    /// Cancel a previously created remote order
    async fn cancel_remote_order(&self, provider_order_id: &str) -> Result<(), ProviderError>;

    /// Pay a previously created remote order
    async fn pay_remote_order(&self, provider_order_id: &str) -> Result<(), ProviderError>;
}
