use std::collections::HashMap;
use async_trait::async_trait;
use tracing::{debug, info};
use crate::books::domain::model::BookCopyEntity;
use crate::books::dto::{BookCopyDto, TitleSummaryDto};
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::service::reconcile;
use crate::core::domain::Configuration;
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::{LibraryLedger, LibraryStore};
use crate::gateway::events::{EventPublisher, publish_all};

pub(crate) struct CatalogServiceImpl {
    store: LibraryStore,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, store: LibraryStore,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            store,
            events_publisher,
        }
    }
}

async fn summaries(ledger: &LibraryLedger, titles: Vec<String>) -> Vec<TitleSummaryDto> {
    let mut res = vec![];
    for title in titles {
        if let Some(mut summary) = TitleSummaryDto::summarize(&ledger.books.copies_of(title.as_str()).await) {
            summary.waiting = ledger.waiting_lines.len(title.as_str());
            res.push(summary);
        }
    }
    res
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_copy(&self, copy: &BookCopyDto) -> LibraryResult<BookCopyDto> {
        if copy.title.trim().is_empty() || copy.catalog_id.trim().is_empty() {
            return Err(LibraryError::validation("invalid book title or catalog id", Some("400".to_string())));
        }
        let (stored, events) = {
            let mut ledger = self.store.lock().await;
            let entity = BookCopyEntity::from(copy);
            ledger.books.create(&entity).await?;
            info!("added copy {} of {}", entity.copy_number, entity.title);
            let mut events = vec![DomainEvent::new(DomainEventType::Added, "catalog", entity.title.as_str(),
                                                   &HashMap::new(), &BookCopyDto::from(&entity))?];
            for assignment in reconcile(&mut ledger, entity.title.as_str()).await? {
                events.push(DomainEvent::new(DomainEventType::Reassigned, "checkout", assignment.title.as_str(),
                                             &HashMap::from([("requester_id".to_string(), assignment.requester_id.to_string())]),
                                             &assignment)?);
            }
            let stored = ledger.books.find_copy(entity.catalog_id.as_str(), entity.copy_number).await?;
            (BookCopyDto::from(&stored), events)
        };
        publish_all(self.events_publisher.as_ref(), &events).await;
        Ok(stored)
    }

    async fn find_copy(&self, catalog_id: &str, copy_number: u32) -> LibraryResult<BookCopyDto> {
        let ledger = self.store.lock().await;
        ledger.books.find_copy(catalog_id, copy_number).await.map(|c| BookCopyDto::from(&c))
    }

    async fn copies_of(&self, title: &str) -> LibraryResult<Vec<BookCopyDto>> {
        let ledger = self.store.lock().await;
        Ok(ledger.books.copies_of(title).await.iter().map(BookCopyDto::from).collect())
    }

    async fn available_copies_of(&self, title: &str) -> LibraryResult<Vec<BookCopyDto>> {
        let ledger = self.store.lock().await;
        Ok(ledger.books.available_copies_of(title).await.iter().map(BookCopyDto::from).collect())
    }

    async fn loans_of(&self, requester_id: &str) -> LibraryResult<Vec<BookCopyDto>> {
        let ledger = self.store.lock().await;
        Ok(ledger.books.loans_of(requester_id).await.iter().map(BookCopyDto::from).collect())
    }

    async fn total_copies(&self, title: &str) -> LibraryResult<usize> {
        let ledger = self.store.lock().await;
        Ok(ledger.books.copies_of(title).await.len())
    }

    async fn available_count(&self, title: &str) -> LibraryResult<usize> {
        let ledger = self.store.lock().await;
        Ok(ledger.books.available_copies_of(title).await.len())
    }

    async fn title_exists(&self, title: &str) -> LibraryResult<bool> {
        let ledger = self.store.lock().await;
        Ok(!ledger.books.copies_of(title).await.is_empty())
    }

    async fn search_titles(&self, query: &str) -> LibraryResult<Vec<TitleSummaryDto>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(LibraryError::validation("search query is required", Some("400".to_string())));
        }
        let ledger = self.store.lock().await;
        let titles: Vec<String> = ledger.books.titles().await.into_iter()
            .filter(|t| t.to_lowercase().contains(needle.as_str()))
            .collect();
        debug!("search {} matched {} titles", query, titles.len());
        Ok(summaries(&ledger, titles).await)
    }

    async fn summary_of(&self, title: &str) -> LibraryResult<TitleSummaryDto> {
        let ledger = self.store.lock().await;
        summaries(&ledger, vec![title.to_string()]).await.pop()
            .ok_or_else(|| LibraryError::not_found(format!("title {} not found", title).as_str()))
    }

    async fn inventory(&self) -> LibraryResult<Vec<TitleSummaryDto>> {
        let ledger = self.store.lock().await;
        let titles = ledger.books.titles().await;
        Ok(summaries(&ledger, titles).await)
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookCopyDto>> {
        let ledger = self.store.lock().await;
        let res = ledger.books.query(predicate, page, page_size).await?;
        let records = res.records.iter().map(BookCopyDto::from).collect();
        Ok(PaginatedResult::new(res.page.as_deref(), res.page_size, res.next_page, records))
    }
}
