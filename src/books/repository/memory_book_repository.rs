use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;

use crate::books::domain::model::BookCopyEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::{paginate, Repository};

// MemoryBookRepository keeps copies in process memory, indexed by copy id and title.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    copies: HashMap<String, BookCopyEntity>,
    by_title: BTreeMap<String, Vec<String>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn sorted(&self, ids: &[String]) -> Vec<BookCopyEntity> {
        let mut copies: Vec<BookCopyEntity> = ids.iter()
            .filter_map(|id| self.copies.get(id))
            .cloned()
            .collect();
        copies.sort_by(|a, b| a.copy_number.cmp(&b.copy_number)
            .then_with(|| a.catalog_id.cmp(&b.catalog_id)));
        copies
    }
}

#[async_trait]
impl Repository<BookCopyEntity> for MemoryBookRepository {
    async fn create(&mut self, entity: &BookCopyEntity) -> LibraryResult<usize> {
        let id = entity.id();
        if self.copies.contains_key(id.as_str()) {
            return Err(LibraryError::duplicate_key(
                format!("copy {} already exists", id).as_str()));
        }
        self.by_title.entry(entity.title.to_string()).or_default().push(id.to_string());
        self.copies.insert(id, entity.clone());
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookCopyEntity> {
        self.copies.get(id).cloned().ok_or_else(||
            LibraryError::not_found(format!("book copy not found for {}", id).as_str()))
    }

    // supported keys: title, catalog_id, available, holder_id
    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookCopyEntity>> {
        let available = match predicate.get("available") {
            Some(v) => Some(v.parse::<bool>().map_err(|_| LibraryError::validation(
                format!("invalid available filter {}", v).as_str(), Some("400".to_string())))?),
            None => None,
        };
        let records: Vec<BookCopyEntity> = self.by_title.iter()
            .filter(|(title, _)| predicate.get("title").map(|t| t == *title).unwrap_or(true))
            .flat_map(|(_, ids)| self.sorted(ids))
            .filter(|c| available.map(|a| a == c.available).unwrap_or(true))
            .filter(|c| predicate.get("catalog_id").map(|id| *id == c.catalog_id).unwrap_or(true))
            .filter(|c| predicate.get("holder_id").map(|h| c.is_held_by(h)).unwrap_or(true))
            .collect();
        Ok(paginate(&records, page, page_size))
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn update(&mut self, entity: &BookCopyEntity) -> LibraryResult<usize> {
        let id = entity.id();
        let existing = self.copies.get_mut(id.as_str()).ok_or_else(||
            LibraryError::not_found(format!("book copy not found for {}", id).as_str()))?;
        if existing.version != entity.version {
            return Err(LibraryError::runtime(
                format!("stale version {} for copy {}", entity.version, id).as_str(), Some("409".to_string())));
        }
        let mut updated = entity.clone();
        updated.version = entity.version + 1;
        *existing = updated;
        Ok(1)
    }

    async fn find_copy(&self, catalog_id: &str, copy_number: u32) -> LibraryResult<BookCopyEntity> {
        self.get(BookCopyEntity::copy_id(catalog_id, copy_number).as_str()).await
    }

    async fn copies_of(&self, title: &str) -> Vec<BookCopyEntity> {
        self.by_title.get(title).map(|ids| self.sorted(ids)).unwrap_or_default()
    }

    async fn available_copies_of(&self, title: &str) -> Vec<BookCopyEntity> {
        self.copies_of(title).await.into_iter().filter(|c| c.available).collect()
    }

    async fn loans_of(&self, requester_id: &str) -> Vec<BookCopyEntity> {
        let mut loans: Vec<BookCopyEntity> = self.copies.values()
            .filter(|c| c.is_held_by(requester_id))
            .cloned()
            .collect();
        loans.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.copy_number.cmp(&b.copy_number)));
        loans
    }

    async fn titles(&self) -> Vec<String> {
        self.by_title.keys().cloned().collect()
    }
}
