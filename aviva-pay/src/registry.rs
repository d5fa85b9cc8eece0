use std::sync::Arc;

use aviva_core::payment::{PaymentProvider, ProviderId};

/// Registered payment providers, in registration order. Registration order
/// matters: the selector breaks fee ties in favour of the first provider
/// registered.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn PaymentProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    pub fn register(&mut self, provider: Arc<dyn PaymentProvider>) {
        tracing::info!(provider = provider.name(), id = %provider.id(), "registered payment provider");
        self.providers.push(provider);
    }

    /// Resolve a provider by its stable id
    pub fn get(&self, id: &ProviderId) -> Option<Arc<dyn PaymentProvider>> {
        self.providers.iter().find(|p| &p.id() == id).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn PaymentProvider>> {
        self.providers.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }
}
