use async_trait::async_trait;
use tracing::{debug, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::{DomainEvent, LibraryEvent};
use crate::core::library::{Category, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::utils::flatfile::validate_text_field;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            book_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book_id: i64, title: &str, author: &str, category_index: i64) -> LibraryResult<BookDto> {
        match self.book_repository.get(book_id).await {
            Ok(_) => {
                return Err(LibraryError::duplicate_key(
                    format!("a book with id {} already exists", book_id).as_str()));
            }
            Err(err) if err.is_not_found() => {}
            Err(err) => return Err(err),
        }
        let category = Category::from_index(category_index)?;
        validate_text_field("title", title)?;
        validate_text_field("author", author)?;

        let book = BookDto::new(book_id, title, author, category);
        let _ = self.book_repository.create(&BookEntity::from(&book)).await?;
        let _ = self.events_publisher.publish(&DomainEvent::record(LibraryEvent::BookAdded, book_id, &book)?).await?;
        Ok(book)
    }

    async fn remove_book(&self, id: i64) -> LibraryResult<BookDto> {
        let existing = self.book_repository.get(id).await?;
        if !existing.available {
            warn!(book_id = id, "removing a book that is currently lent out");
        }
        let _ = self.book_repository.delete(id).await?;
        let book = BookDto::from(&existing);
        let _ = self.events_publisher.publish(&DomainEvent::record(LibraryEvent::BookRemoved, id, &book)?).await?;
        Ok(book)
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let _ = self.book_repository.update(&BookEntity::from(book)).await?;
        let _ = self.events_publisher.publish(&DomainEvent::record(LibraryEvent::BookUpdated, book.book_id, book)?).await?;
        Ok(book.clone())
    }

    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn find_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.find_all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_available_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.find_available().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn search_books(&self, keyword: &str) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.search(keyword).await?;
        debug!(keyword, matches = res.len(), "searched catalog");
        Ok(res.iter().map(BookDto::from).collect())
    }
}
