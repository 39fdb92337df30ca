use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, Category};

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub category: Category,
    pub available: bool,
}

impl BookDto {
    pub fn new(book_id: i64, title: &str, author: &str, category: Category) -> BookDto {
        BookDto {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            category,
            available: true,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> i64 {
        self.book_id
    }
}

impl Book for BookDto {
    fn category(&self) -> Category {
        self.category
    }

    fn status(&self) -> BookStatus {
        BookStatus::from(self.available)
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            category: other.category,
            available: other.available,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            category: other.category,
            available: other.available,
        }
    }
}
