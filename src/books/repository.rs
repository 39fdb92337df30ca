pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    async fn find_available(&self) -> LibraryResult<Vec<BookEntity>>;

    async fn search(&self, keyword: &str) -> LibraryResult<Vec<BookEntity>>;
}
