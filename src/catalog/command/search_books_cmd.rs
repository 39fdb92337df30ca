use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub keyword: String,
}

impl SearchBooksCommandRequest {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub keyword: String,
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(keyword: String, books: Vec<BookDto>) -> Self {
        Self {
            keyword,
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let books = self.catalog_service.search_books(req.keyword.as_str()).await
            .map_err(CommandError::from)?;
        Ok(SearchBooksCommandResponse::new(req.keyword, books))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_search_books() {
        let config = Configuration::new("test");
        let store = RepositoryStore::default();
        let svc = factory::create_catalog_service(&config, &store);
        let _ = svc.add_book(1, "Dune", "Frank Herbert", 1).await.expect("should add book");
        let _ = svc.add_book(2, "Cosmos", "Carl Sagan", 3).await.expect("should add book");

        let cmd = SearchBooksCommand::new(factory::create_catalog_service(&config, &store));
        let res = cmd.execute(SearchBooksCommandRequest::new("SAGAN")).await.expect("should search");
        assert_eq!("SAGAN", res.keyword.as_str());
        assert_eq!(1, res.books.len());
        assert_eq!("Cosmos", res.books[0].title.as_str());

        let res = cmd.execute(SearchBooksCommandRequest::new("nothing here")).await.expect("should search");
        assert!(res.books.is_empty());
    }
}
