use async_trait::async_trait;
use core::option::Option;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use crate::books::factory::create_book_repository;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::hold::domain::WaitingLines;
use crate::parties::factory::create_party_repository;
use crate::parties::repository::PartyRepository;

#[async_trait]
pub(crate) trait Repository<Entity>: Sync + Send {
    // create an entity
    async fn create(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // query by predicate
    async fn query(&self, predicate: &HashMap::<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<Entity>>;
}

// LibraryLedger is everything a single allocator call may touch.
pub(crate) struct LibraryLedger {
    pub(crate) books: Box<dyn BookRepository>,
    pub(crate) parties: Box<dyn PartyRepository>,
    pub(crate) waiting_lines: WaitingLines,
}

/// Shared handle over the in-memory ledger. Every service call takes the
/// ledger lock once and holds it for the whole operation.
#[derive(Clone)]
pub struct LibraryStore {
    ledger: Arc<Mutex<LibraryLedger>>,
}

impl LibraryStore {
    pub fn new() -> Self {
        LibraryStore {
            ledger: Arc::new(Mutex::new(LibraryLedger {
                books: create_book_repository(),
                parties: create_party_repository(),
                waiting_lines: WaitingLines::new(),
            })),
        }
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, LibraryLedger> {
        self.ledger.lock().await
    }
}

impl Default for LibraryStore {
    fn default() -> Self {
        Self::new()
    }
}

// paginate slices records using the offset encoded in the page token
pub(crate) fn paginate<T: Clone>(records: &[T], page: Option<&str>, page_size: usize) -> PaginatedResult<T> {
    let offset = page.and_then(|p| p.parse::<usize>().ok()).unwrap_or(0);
    let page_size = page_size.max(1);
    let end = records.len().min(offset.saturating_add(page_size));
    let slice = if offset < records.len() { records[offset..end].to_vec() } else { vec![] };
    let next_page = if end < records.len() { Some(end.to_string()) } else { None };
    PaginatedResult::new(page, page_size, next_page, slice)
}
