use std::time::Duration;

use async_trait::async_trait;

use super::directory;
use super::domain::{CatalogError, ServiceDescriptor, ServiceKind};

/// Async boundary between the intake flow and whatever supplies the catalog.
/// Callers must treat a returned list as exhaustive and static for the
/// session; there is no pagination.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn list(&self, kind: ServiceKind) -> Result<Vec<ServiceDescriptor>, CatalogError>;
}

/// In-process source backed by the fixed directory tables.
#[derive(Debug, Default, Clone)]
pub struct StaticCatalog;

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn list(&self, kind: ServiceKind) -> Result<Vec<ServiceDescriptor>, CatalogError> {
        Ok(directory::standard_entries(kind))
    }
}

/// Decorator reproducing the reference site's simulated fetch latency.
/// Production wiring wraps `StaticCatalog` in this; tests use the inner
/// source directly or a zero delay.
pub struct DelayedCatalog<C> {
    inner: C,
    delay: Duration,
}

impl<C> DelayedCatalog<C> {
    pub fn new(inner: C, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait]
impl<C> CatalogSource for DelayedCatalog<C>
where
    C: CatalogSource,
{
    async fn list(&self, kind: ServiceKind) -> Result<Vec<ServiceDescriptor>, CatalogError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.inner.list(kind).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_catalog_lists_every_kind() {
        let catalog = StaticCatalog;
        for kind in ServiceKind::ALL {
            let entries = catalog.list(kind).await.expect("static catalog");
            assert!(!entries.is_empty());
        }
    }

    #[tokio::test]
    async fn delayed_catalog_passes_through() {
        let catalog = DelayedCatalog::new(StaticCatalog, Duration::ZERO);
        let entries = catalog.list(ServiceKind::Tax).await.expect("list");
        assert_eq!(entries[1].name, "Tax Payment");
    }
}
