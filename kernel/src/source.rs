use crate::entity::Catalog;
use crate::KernelError;

/// Supplies the static dataset once at startup.
#[async_trait::async_trait]
pub trait CatalogSource: 'static + Sync + Send {
    async fn load(&self) -> error_stack::Result<Catalog, KernelError>;
}
