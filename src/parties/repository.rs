pub(crate) mod memory_party_repository;
use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::parties::domain::model::RequesterEntity;

#[async_trait]
pub(crate) trait PartyRepository: Repository<RequesterEntity> {
    // find_by_name matches names case-insensitively
    async fn find_by_name(&self, name: &str) -> LibraryResult<Vec<RequesterEntity>>;

    async fn exists(&self, requester_id: &str) -> bool;

    async fn all(&self) -> Vec<RequesterEntity>;
}
