use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookCopyEntity;

// BorrowOutcome is the result of a borrow attempt that was not rejected.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum BorrowOutcome {
    Fulfilled {
        copy_number: u32,
    },
    Waitlisted {
        position: usize,
    },
}

// Assignment records a copy handed to a waiting requester during reconciliation
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub title: String,
    pub requester_id: String,
    pub catalog_id: String,
    pub copy_number: u32,
}

impl Assignment {
    pub(crate) fn new(copy: &BookCopyEntity, requester_id: &str) -> Self {
        Self {
            title: copy.title.to_string(),
            requester_id: requester_id.to_string(),
            catalog_id: copy.catalog_id.to_string(),
            copy_number: copy.copy_number,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ReturnOutcome {
    pub title: String,
    pub requester_id: String,
    pub copy_number: u32,
    pub reassigned: Vec<Assignment>,
}
