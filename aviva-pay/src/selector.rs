use std::sync::Arc;

use rust_decimal::Decimal;

use aviva_core::payment::PaymentProvider;
use aviva_core::PaymentMode;

use crate::registry::ProviderRegistry;

#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error("no payment providers registered")]
    NoProviders,
}

/// Pick the provider quoting the strictly lowest fee for this amount and
/// payment mode. Ties keep the first provider registered. Pure: no I/O,
/// deterministic given the inputs and the current registry.
pub fn select_best_provider(
    registry: &ProviderRegistry,
    amount: Decimal,
    mode: PaymentMode,
) -> Result<(Arc<dyn PaymentProvider>, Decimal), SelectError> {
    let mut best: Option<(Arc<dyn PaymentProvider>, Decimal)> = None;

    for provider in registry.iter() {
        let fee = provider.calculate_fee(amount, mode);
        tracing::debug!(provider = provider.name(), %amount, ?mode, %fee, "fee quote");
        match &best {
            Some((_, best_fee)) if fee >= *best_fee => {}
            _ => best = Some((provider.clone(), fee)),
        }
    }

    best.ok_or(SelectError::NoProviders)
}
