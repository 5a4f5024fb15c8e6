use crate::core::events::event_topics;
use crate::gateway::events::EventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::publisher::LogPublisher;
use crate::gateway::memory::publisher::MemoryPublisher;

pub async fn create_publisher(via: GatewayPublisherVia) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Logs => register(LogPublisher::new()).await,
        GatewayPublisherVia::Memory => register(MemoryPublisher::new()).await,
    }
}

// register creates a topic for every event the lending services emit
pub async fn register<P: EventPublisher + 'static>(mut publisher: P) -> Box<dyn EventPublisher> {
    for topic in event_topics() {
        if let Err(err) = publisher.create_topic(topic.as_str()).await {
            tracing::warn!("failed to create topic {}: {}", topic, err);
        }
    }
    Box::new(publisher)
}
