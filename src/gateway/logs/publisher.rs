use std::collections::BTreeSet;
use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every event as a structured log line
#[derive(Debug, Default)]
pub struct LogPublisher {
    topics: BTreeSet<String>,
}

impl LogPublisher {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn create_topic(&mut self, topic: &str) -> Result<String, LibraryError> {
        self.topics.insert(topic.to_string());
        Ok(topic.to_string())
    }

    async fn get_topics(&self) -> Result<Vec<String>, LibraryError> {
        Ok(self.topics.iter().cloned().collect())
    }

    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        if !self.topics.contains(event.name.as_str()) {
            return Err(LibraryError::runtime(format!("topic is not found {}", event.name).as_str(), None));
        }
        info!(event_id = event.event_id.as_str(), topic = event.name.as_str(),
            key = event.key.as_str(), data = event.json_data.as_str(), "domain event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::{DomainEvent, DomainEventType};
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::publisher::LogPublisher;

    #[tokio::test]
    async fn test_should_publish_to_logs() {
        let event = DomainEvent::new(DomainEventType::Returned, "checkout", "title",
                                     &HashMap::new(), &1).expect("build event");
        let mut publisher = LogPublisher::new();
        assert!(publisher.publish(&event).await.is_err());

        let topic = publisher.create_topic(event.name.as_str()).await.expect("should create topic");
        let _ = publisher.publish(&event).await.expect("should publish");
        let topics = publisher.get_topics().await.expect("should get topics");
        assert!(topics.contains(&topic));
    }
}
