use std::collections::HashMap;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// DomainEventType defines what happened to a copy or a waiting request
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Borrowed,
    Waitlisted,
    Returned,
    Reassigned,
    Cancelled,
}

// DomainEvent abstracts domain event for lending changes
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn new<T: Serialize>(kind: DomainEventType, group: &str, key: &str,
                             metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: event_name(group, kind),
            group: group.to_string(),
            key: key.to_string(),
            kind,
            metadata: metadata.clone(),
            json_data: json,
            created_at: Utc::now().naive_utc(),
        })
    }
}

fn event_name(group: &str, kind: DomainEventType) -> String {
    let suffix = match kind {
        DomainEventType::Added => "added",
        DomainEventType::Borrowed => "borrowed",
        DomainEventType::Waitlisted => "waitlisted",
        DomainEventType::Returned => "returned",
        DomainEventType::Reassigned => "reassigned",
        DomainEventType::Cancelled => "cancelled",
    };
    format!("{}_{}", group, suffix)
}

// event_topics lists the topic of every event the lending services emit
pub fn event_topics() -> Vec<String> {
    vec![
        event_name("catalog", DomainEventType::Added),
        event_name("checkout", DomainEventType::Borrowed),
        event_name("checkout", DomainEventType::Waitlisted),
        event_name("checkout", DomainEventType::Returned),
        event_name("checkout", DomainEventType::Reassigned),
        event_name("hold", DomainEventType::Cancelled),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::{DomainEvent, DomainEventType, event_topics};

    #[tokio::test]
    async fn test_should_build_borrowed() {
        let data = HashMap::from([("copy_number", 1)]);
        let event = DomainEvent::new(DomainEventType::Borrowed, "checkout", "Clean Code",
                                     &HashMap::from([("requester_id".to_string(), "s1".to_string())]), &data).expect("build event");
        assert_eq!("checkout_borrowed", event.name.as_str());
        assert_eq!("Clean Code", event.key.as_str());
        assert_eq!(DomainEventType::Borrowed, event.kind);
        assert_eq!(Some(&"s1".to_string()), event.metadata.get("requester_id"));
    }

    #[tokio::test]
    async fn test_should_build_cancelled() {
        let event = DomainEvent::new(DomainEventType::Cancelled, "hold", "key",
                                     &HashMap::new(), &"r1".to_string()).expect("build event");
        assert_eq!("hold_cancelled", event.name.as_str());
        assert_eq!("\"r1\"", event.json_data.as_str());
    }

    #[tokio::test]
    async fn test_should_list_topics() {
        let topics = event_topics();
        assert_eq!(6, topics.len());
        assert!(topics.contains(&"hold_cancelled".to_string()));
    }
}
