use std::collections::BTreeSet;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

/// Keeps published events in memory. Clones share the same event list so a
/// caller can hand one clone to a service and read events from another.
#[derive(Debug, Default, Clone)]
pub struct MemoryPublisher {
    topics: BTreeSet<String>,
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().await.clone()
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
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
        self.events.lock().await.push(event.clone());
        Ok(())
    }
}
