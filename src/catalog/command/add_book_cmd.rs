use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    // 1-based position in the category list
    pub category_index: i64,
}

impl AddBookCommandRequest {
    pub fn new(book_id: i64, title: &str, author: &str, category_index: i64) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            category_index,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(req.book_id, req.title.as_str(), req.author.as_str(), req.category_index)
            .await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::Category;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_add_book() {
        let svc = factory::create_catalog_service(&Configuration::new("test"), &RepositoryStore::default());
        let cmd = AddBookCommand::new(svc);

        let res = cmd.execute(AddBookCommandRequest::new(1, "Steve Jobs", "Walter Isaacson", 4))
            .await.expect("should add book");
        assert_eq!(Category::Biography, res.book.category);

        let res = cmd.execute(AddBookCommandRequest::new(1, "Steve Jobs", "Walter Isaacson", 4)).await;
        assert!(matches!(res, Err(CommandError::DuplicateKey { .. })));
    }
}
