pub mod cazapagos;
pub mod pagafacil;
pub mod registry;
pub mod selector;

pub use cazapagos::CazaPagos;
pub use pagafacil::PagaFacil;
pub use registry::ProviderRegistry;
pub use selector::{select_best_provider, SelectError};

use rust_decimal::{Decimal, RoundingStrategy};

/// Fee amounts are quoted to 2 decimal places, half-up.
pub(crate) fn round_fee(fee: Decimal) -> Decimal {
    fee.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
