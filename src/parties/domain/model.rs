use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::RequesterClass;
use crate::utils::date::serializer;

// RequesterEntity abstracts a registered borrower; its class decides the priority rank
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct RequesterEntity {
    pub requester_id: String,
    pub version: i64,
    pub name: String,
    pub class: RequesterClass,
    pub department: Option<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl RequesterEntity {
    pub fn new(requester_id: &str, name: &str, class: RequesterClass) -> Self {
        Self {
            requester_id: requester_id.to_string(),
            version: 0,
            name: name.to_string(),
            class,
            department: None,
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for RequesterEntity {
    fn id(&self) -> String {
        self.requester_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
