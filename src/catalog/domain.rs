pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book_id: i64, title: &str, author: &str, category_index: i64) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: i64) -> LibraryResult<BookDto>;
    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto>;
    async fn find_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn find_available_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn search_books(&self, keyword: &str) -> LibraryResult<Vec<BookDto>>;
}
