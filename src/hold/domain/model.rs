use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::RequesterClass;
use crate::utils::date::serializer;

// QueueKey orders a waiting line: priority rank first, then arrival sequence
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
pub(crate) struct QueueKey {
    pub rank: u8,
    pub sequence: u64,
}

// WaitRequest abstracts a borrow attempt parked until a copy of the title frees up
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct WaitRequest {
    pub request_id: String,
    pub requester_id: String,
    pub title: String,
    pub class: RequesterClass,
    pub sequence: u64,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl WaitRequest {
    // the sequence is assigned by the waiting lines on enqueue
    pub fn new(title: &str, requester_id: &str, class: RequesterClass) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            requester_id: requester_id.to_string(),
            title: title.to_string(),
            class,
            sequence: 0,
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn key(&self) -> QueueKey {
        QueueKey {
            rank: self.class.priority_rank(),
            sequence: self.sequence,
        }
    }
}

impl Identifiable for WaitRequest {
    fn id(&self) -> String {
        self.request_id.to_string()
    }

    fn version(&self) -> i64 {
        0
    }
}
