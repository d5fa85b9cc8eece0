use std::net::SocketAddr;
use std::sync::Arc;

use aviva_api::{app, AppState};
use aviva_order::OrderService;
use aviva_pay::{CazaPagos, PagaFacil, ProviderRegistry};
use aviva_store::MemoryOrderStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aviva_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = aviva_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Aviva Payments API on port {}", config.server.port);

    let mut registry = ProviderRegistry::new();
    for id in &config.providers.enabled {
        match id.as_str() {
            "cazapagos" => registry.register(Arc::new(CazaPagos::new())),
            "pagafacil" => registry.register(Arc::new(PagaFacil::new())),
            other => tracing::warn!(provider = other, "unknown provider id in config, skipping"),
        }
    }
    if registry.is_empty() {
        tracing::warn!("no payment providers enabled; order creation will fail");
    }

    let store = Arc::new(MemoryOrderStore::new());
    let service = Arc::new(OrderService::new(store, Arc::new(registry)));

    let app = app(AppState { orders: service });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
