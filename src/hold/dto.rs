use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::library::RequesterClass;
use crate::hold::domain::model::WaitRequest;
use crate::utils::date::serializer;

// WaitRequestDto reports a parked borrow request together with its place in line
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct WaitRequestDto {
    pub request_id: String,
    pub requester_id: String,
    pub title: String,
    pub class: RequesterClass,
    pub priority_rank: u8,
    pub position: usize,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl WaitRequestDto {
    pub(crate) fn from_request(request: &WaitRequest, position: usize) -> Self {
        Self {
            request_id: request.request_id.to_string(),
            requester_id: request.requester_id.to_string(),
            title: request.title.to_string(),
            class: request.class,
            priority_rank: request.class.priority_rank(),
            position,
            created_at: request.created_at,
        }
    }

    // ordered converts a line already in service order into positioned dtos
    pub(crate) fn ordered(requests: &[WaitRequest]) -> Vec<WaitRequestDto> {
        requests.iter().enumerate()
            .map(|(i, r)| WaitRequestDto::from_request(r, i + 1))
            .collect()
    }
}

// WaitingSummaryDto counts parked requests across all titles
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct WaitingSummaryDto {
    pub titles: Vec<String>,
    pub total_waiting: usize,
}
