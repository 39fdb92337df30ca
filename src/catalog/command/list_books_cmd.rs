use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListBooksCommandRequest {
    pub available_only: bool,
}

impl ListBooksCommandRequest {
    pub fn all() -> Self {
        Self {
            available_only: false,
        }
    }

    pub fn available() -> Self {
        Self {
            available_only: true,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let res = if req.available_only {
            self.catalog_service.find_available_books().await
        } else {
            self.catalog_service.find_books().await
        };
        res.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_list_books() {
        let config = Configuration::new("test");
        let store = RepositoryStore::default();
        let svc = factory::create_catalog_service(&config, &store);
        let _ = svc.add_book(2, "Emma", "Jane Austen", 1).await.expect("should add book");
        let mut lent = svc.add_book(1, "Dune", "Frank Herbert", 1).await.expect("should add book");
        lent.available = false;
        let _ = svc.update_book(&lent).await.expect("should update book");

        let cmd = ListBooksCommand::new(factory::create_catalog_service(&config, &store));
        let all = cmd.execute(ListBooksCommandRequest::all()).await.expect("should list books");
        assert_eq!(vec![2, 1], all.books.iter().map(|b| b.book_id).collect::<Vec<i64>>());
        let available = cmd.execute(ListBooksCommandRequest::available()).await.expect("should list books");
        assert_eq!(vec![2], available.books.iter().map(|b| b.book_id).collect::<Vec<i64>>());
    }
}
