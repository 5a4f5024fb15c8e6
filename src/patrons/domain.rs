pub mod service;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::patrons::dto::{DirectoryStatsDto, RequesterDto};

#[async_trait]
pub trait PatronService: Sync + Send {
    async fn register(&self, requester: &RequesterDto) -> LibraryResult<RequesterDto>;
    async fn find(&self, requester_id: &str) -> LibraryResult<RequesterDto>;
    async fn find_by_name(&self, name: &str) -> LibraryResult<Vec<RequesterDto>>;
    async fn stats(&self) -> LibraryResult<DirectoryStatsDto>;
}
