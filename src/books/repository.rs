pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookCopyEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub(crate) trait BookRepository: Repository<BookCopyEntity> {
    // update stores the copy if its version matches the stored one
    async fn update(&mut self, entity: &BookCopyEntity) -> LibraryResult<usize>;

    async fn find_copy(&self, catalog_id: &str, copy_number: u32) -> LibraryResult<BookCopyEntity>;

    // copies_of returns copies of the title ordered by copy number
    async fn copies_of(&self, title: &str) -> Vec<BookCopyEntity>;

    async fn available_copies_of(&self, title: &str) -> Vec<BookCopyEntity>;

    async fn loans_of(&self, requester_id: &str) -> Vec<BookCopyEntity>;

    // titles returns every catalogued title in sorted order
    async fn titles(&self) -> Vec<String>;
}
