use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, Category};

// BookEntity abstracts a single physical book on the library shelves.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub category: Category,
    pub available: bool,
}

impl BookEntity {
    pub fn new(book_id: i64, title: &str, author: &str, category: Category) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            category,
            available: true,
        }
    }

    // `keyword` must already be lower case.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.book_id.to_string() == keyword
            || self.title.to_lowercase().contains(keyword)
            || self.author.to_lowercase().contains(keyword)
            || self.category.to_string().to_lowercase().contains(keyword)
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.book_id
    }
}

impl Book for BookEntity {
    fn category(&self) -> Category {
        self.category
    }

    fn status(&self) -> BookStatus {
        BookStatus::from(self.available)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::library::{BookStatus, Category};

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new(1, "Dune", "Frank Herbert", Category::Fiction);
        assert_eq!("Dune", book.title.as_str());
        assert_eq!(BookStatus::Available, book.status());
    }

    #[tokio::test]
    async fn test_should_match_keyword() {
        let book = BookEntity::new(12, "A Brief History of Time", "Stephen Hawking", Category::Science);
        assert!(book.matches_keyword("12"));
        assert!(!book.matches_keyword("1"));
        assert!(book.matches_keyword("brief"));
        assert!(book.matches_keyword("hawking"));
        assert!(book.matches_keyword("scien"));
        assert!(!book.matches_keyword("fiction"));
    }
}
