pub mod service;

use std::collections::HashMap;
use async_trait::async_trait;
use crate::books::dto::{BookCopyDto, TitleSummaryDto};
use crate::core::library::{LibraryResult, PaginatedResult};

#[async_trait]
pub trait CatalogService: Sync + Send {
    // add_copy hands the new copy to the head of the waiting line if one exists
    async fn add_copy(&self, copy: &BookCopyDto) -> LibraryResult<BookCopyDto>;
    async fn find_copy(&self, catalog_id: &str, copy_number: u32) -> LibraryResult<BookCopyDto>;
    async fn copies_of(&self, title: &str) -> LibraryResult<Vec<BookCopyDto>>;
    async fn available_copies_of(&self, title: &str) -> LibraryResult<Vec<BookCopyDto>>;
    async fn loans_of(&self, requester_id: &str) -> LibraryResult<Vec<BookCopyDto>>;
    async fn total_copies(&self, title: &str) -> LibraryResult<usize>;
    async fn available_count(&self, title: &str) -> LibraryResult<usize>;
    async fn title_exists(&self, title: &str) -> LibraryResult<bool>;
    async fn search_titles(&self, query: &str) -> LibraryResult<Vec<TitleSummaryDto>>;
    async fn summary_of(&self, title: &str) -> LibraryResult<TitleSummaryDto>;
    async fn inventory(&self) -> LibraryResult<Vec<TitleSummaryDto>>;
    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookCopyDto>>;
}
