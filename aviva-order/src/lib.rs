pub mod service;

pub use service::{OrderError, OrderService};
