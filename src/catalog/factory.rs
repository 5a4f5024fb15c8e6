use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::LibraryStore;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;

pub async fn create_catalog_service(config: &Configuration, store: LibraryStore) -> Box<dyn CatalogService> {
    let publisher = create_publisher(GatewayPublisherVia::Logs).await;
    Box::new(CatalogServiceImpl::new(config, store, publisher))
}
