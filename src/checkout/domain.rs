use async_trait::async_trait;
use crate::books::dto::BookCopyDto;
use crate::checkout::domain::model::{BorrowOutcome, ReturnOutcome};
use crate::core::library::LibraryResult;
use crate::hold::dto::{WaitingSummaryDto, WaitRequestDto};

pub mod model;
pub mod service;

/// Allocator of book copies. Every call runs as one critical section over
/// the shared ledger, so concurrent callers observe each other atomically.
#[async_trait]
pub trait CheckoutService: Sync + Send {
    async fn borrow(&self, title: &str, requester_id: &str) -> LibraryResult<BorrowOutcome>;
    async fn returned(&self, title: &str, requester_id: &str) -> LibraryResult<ReturnOutcome>;
    // queue_position is 1-based, -1 when the requester is not waiting
    async fn queue_position(&self, title: &str, requester_id: &str) -> LibraryResult<i64>;
    async fn cancel_request(&self, title: &str, requester_id: &str) -> LibraryResult<bool>;
    async fn waiting_line(&self, title: &str) -> LibraryResult<Vec<WaitRequestDto>>;
    async fn waiting_summary(&self) -> LibraryResult<WaitingSummaryDto>;
    async fn loans_of(&self, requester_id: &str) -> LibraryResult<Vec<BookCopyDto>>;
}
