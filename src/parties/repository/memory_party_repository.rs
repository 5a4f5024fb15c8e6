use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;

use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::{paginate, Repository};
use crate::parties::domain::model::RequesterEntity;
use crate::parties::repository::PartyRepository;

#[derive(Debug, Default)]
pub(crate) struct MemoryPartyRepository {
    requesters: BTreeMap<String, RequesterEntity>,
}

impl MemoryPartyRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<RequesterEntity> for MemoryPartyRepository {
    async fn create(&mut self, entity: &RequesterEntity) -> LibraryResult<usize> {
        if self.requesters.contains_key(entity.requester_id.as_str()) {
            return Err(LibraryError::duplicate_key(
                format!("requester {} already registered", entity.requester_id).as_str()));
        }
        self.requesters.insert(entity.requester_id.to_string(), entity.clone());
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<RequesterEntity> {
        self.requesters.get(id).cloned().ok_or_else(||
            LibraryError::not_found(format!("requester not found for {}", id).as_str()))
    }

    // supported keys: class, department
    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<RequesterEntity>> {
        let records: Vec<RequesterEntity> = self.requesters.values()
            .filter(|r| predicate.get("class").map(|c| *c == r.class.to_string()).unwrap_or(true))
            .filter(|r| predicate.get("department").map(|d| r.department.as_ref() == Some(d)).unwrap_or(true))
            .cloned()
            .collect();
        Ok(paginate(&records, page, page_size))
    }
}

#[async_trait]
impl PartyRepository for MemoryPartyRepository {
    async fn find_by_name(&self, name: &str) -> LibraryResult<Vec<RequesterEntity>> {
        let name = name.to_lowercase();
        Ok(self.requesters.values()
            .filter(|r| r.name.to_lowercase() == name)
            .cloned()
            .collect())
    }

    async fn exists(&self, requester_id: &str) -> bool {
        self.requesters.contains_key(requester_id)
    }

    async fn all(&self) -> Vec<RequesterEntity> {
        self.requesters.values().cloned().collect()
    }
}
