use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

#[async_trait]
pub trait EventPublisher: Sync + Send {
    async fn create_topic(&mut self, topic: &str) -> Result<String, LibraryError>;
    async fn get_topics(&self) -> Result<Vec<String>, LibraryError>;
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;
}

// publish_all sends events collected under the ledger lock; failures are only logged
pub(crate) async fn publish_all(publisher: &dyn EventPublisher, events: &[DomainEvent]) {
    for event in events {
        if let Err(err) = publisher.publish(event).await {
            tracing::warn!("failed to publish {} for {}: {}", event.name, event.key, err);
        }
    }
}
