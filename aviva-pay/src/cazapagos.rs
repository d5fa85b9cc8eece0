use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use aviva_core::payment::{PaymentProvider, ProviderError, ProviderId, ProviderOrderResult};
use aviva_core::{OrderItem, PaymentMode};

use crate::round_fee;

/// CazaPagos: tiered percentage fees for card and transfer, flat fee for
/// cash. Tier thresholds are inclusive, so an amount exactly on a boundary
/// takes the lower tier's rate.
#[derive(Debug, Default)]
pub struct CazaPagos;

impl CazaPagos {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentProvider for CazaPagos {
    fn id(&self) -> ProviderId {
        ProviderId::from("cazapagos")
    }

    fn name(&self) -> &str {
        "CazaPagos"
    }

    fn calculate_fee(&self, amount: Decimal, mode: PaymentMode) -> Decimal {
        match mode {
            PaymentMode::CreditCard => {
                if amount <= dec!(1500) {
                    round_fee(amount * dec!(0.02))
                } else if amount <= dec!(5000) {
                    round_fee(amount * dec!(0.015))
                } else {
                    round_fee(amount * dec!(0.005))
                }
            }
            PaymentMode::Transfer => {
                if amount <= dec!(500) {
                    dec!(5)
                } else if amount <= dec!(1000) {
                    round_fee(amount * dec!(0.025))
                } else {
                    round_fee(amount * dec!(0.02))
                }
            }
            PaymentMode::Cash => dec!(12),
        }
    }

    async fn create_remote_order(
        &self,
        amount: Decimal,
        mode: PaymentMode,
        items: &[OrderItem],
    ) -> Result<ProviderOrderResult, ProviderError> {
        // A real integration would POST to the CazaPagos API with an
        // x-api-key here; the id format matches what their API returns.
        let provider_order_id = format!("CZ-{}", Uuid::new_v4().simple());
        tracing::debug!(
            %amount,
            ?mode,
            items = items.len(),
            %provider_order_id,
            "created CazaPagos remote order"
        );
        Ok(ProviderOrderResult { provider_order_id })
    }

    async fn cancel_remote_order(&self, provider_order_id: &str) -> Result<(), ProviderError> {
        tracing::debug!(provider_order_id, "cancelled CazaPagos remote order");
        Ok(())
    }

    async fn pay_remote_order(&self, provider_order_id: &str) -> Result<(), ProviderError> {
        tracing::debug!(provider_order_id, "paid CazaPagos remote order");
        Ok(())
    }
}
