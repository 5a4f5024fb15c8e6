use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::LibraryStore;
use crate::parties::domain::model::RequesterEntity;
use crate::patrons::domain::PatronService;
use crate::patrons::dto::{DirectoryStatsDto, RequesterDto};

pub(crate) struct PatronServiceImpl {
    store: LibraryStore,
}

impl PatronServiceImpl {
    pub(crate) fn new(_config: &Configuration, store: LibraryStore) -> Self {
        PatronServiceImpl {
            store,
        }
    }
}

#[async_trait]
impl PatronService for PatronServiceImpl {
    async fn register(&self, requester: &RequesterDto) -> LibraryResult<RequesterDto> {
        if requester.requester_id.trim().is_empty() || requester.name.trim().is_empty() {
            return Err(LibraryError::validation("requester id and name are required", Some("400".to_string())));
        }
        let mut ledger = self.store.lock().await;
        if let Err(err) = ledger.parties.create(&RequesterEntity::from(requester)).await {
            warn!("failed to register {}: {}", requester.requester_id, err);
            return Err(err);
        }
        info!("registered {} as {}", requester.requester_id, requester.class);
        Ok(requester.clone())
    }

    async fn find(&self, requester_id: &str) -> LibraryResult<RequesterDto> {
        let ledger = self.store.lock().await;
        ledger.parties.get(requester_id).await.map(|r| RequesterDto::from(&r))
    }

    async fn find_by_name(&self, name: &str) -> LibraryResult<Vec<RequesterDto>> {
        let ledger = self.store.lock().await;
        let res = ledger.parties.find_by_name(name).await?;
        debug!("found {} requesters named {}", res.len(), name);
        Ok(res.iter().map(RequesterDto::from).collect())
    }

    async fn stats(&self) -> LibraryResult<DirectoryStatsDto> {
        let ledger = self.store.lock().await;
        let requesters: Vec<RequesterDto> = ledger.parties.all().await.iter().map(RequesterDto::from).collect();
        Ok(DirectoryStatsDto::count(&requesters))
    }
}
