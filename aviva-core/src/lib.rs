pub mod models;
pub mod payment;
pub mod repository;

pub use models::{Order, OrderItem, OrderStatus, PaymentMode};
pub use payment::{PaymentProvider, ProviderError, ProviderId, ProviderOrderResult};
pub use repository::OrderRepository;
