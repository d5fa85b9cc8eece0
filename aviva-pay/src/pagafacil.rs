use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use aviva_core::payment::{PaymentProvider, ProviderError, ProviderId, ProviderOrderResult};
use aviva_core::{OrderItem, PaymentMode};

use crate::round_fee;

/// PagaFacil: flat fees for cash and transfer, 1% for credit card.
#[derive(Debug, Default)]
pub struct PagaFacil;

impl PagaFacil {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentProvider for PagaFacil {
    fn id(&self) -> ProviderId {
        ProviderId::from("pagafacil")
    }

    fn name(&self) -> &str {
        "PagaFacil"
    }

    fn calculate_fee(&self, amount: Decimal, mode: PaymentMode) -> Decimal {
        match mode {
            PaymentMode::Cash => dec!(15),
            PaymentMode::CreditCard => round_fee(amount * dec!(0.01)),
            PaymentMode::Transfer => dec!(10),
        }
    }

    async fn create_remote_order(
        &self,
        amount: Decimal,
        mode: PaymentMode,
        items: &[OrderItem],
    ) -> Result<ProviderOrderResult, ProviderError> {
        // A real integration would POST to the PagaFacil API here.
        let provider_order_id = format!("PF-{}", Uuid::new_v4().simple());
        tracing::debug!(
            %amount,
            ?mode,
            items = items.len(),
            %provider_order_id,
            "created PagaFacil remote order"
        );
        Ok(ProviderOrderResult { provider_order_id })
    }

    async fn cancel_remote_order(&self, provider_order_id: &str) -> Result<(), ProviderError> {
        tracing::debug!(provider_order_id, "cancelled PagaFacil remote order");
        Ok(())
    }

    async fn pay_remote_order(&self, provider_order_id: &str) -> Result<(), ProviderError> {
        tracing::debug!(provider_order_id, "paid PagaFacil remote order");
        Ok(())
    }
}
