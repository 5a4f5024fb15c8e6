use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::LibraryStore;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;

pub async fn create_checkout_service(config: &Configuration, store: LibraryStore) -> Box<dyn CheckoutService> {
    let publisher = create_publisher(GatewayPublisherVia::Logs).await;
    Box::new(CheckoutServiceImpl::new(config, store, publisher))
}
