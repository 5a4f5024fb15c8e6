use serde::{Deserialize, Serialize};
use crate::checkout::domain::model::BorrowOutcome;

// BorrowDto reports the outcome of a borrow attempt for one requester and title.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BorrowDto {
    pub title: String,
    pub requester_id: String,
    #[serde(flatten)]
    pub outcome: BorrowOutcome,
}

impl BorrowDto {
    pub fn new(title: &str, requester_id: &str, outcome: BorrowOutcome) -> Self {
        Self {
            title: title.to_string(),
            requester_id: requester_id.to_string(),
            outcome,
        }
    }
}
