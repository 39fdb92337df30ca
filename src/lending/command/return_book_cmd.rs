use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;
use crate::lending::dto::ReturnDto;

pub struct ReturnBookCommand {
    lending_service: Box<dyn LendingService>,
}

impl ReturnBookCommand {
    pub fn new(lending_service: Box<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    pub member_id: i64,
    pub book_id: i64,
    pub borrow_date: Option<String>,
}

impl ReturnBookCommandRequest {
    pub fn new(member_id: i64, book_id: i64, borrow_date: Option<String>) -> Self {
        Self {
            member_id,
            book_id,
            borrow_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub receipt: ReturnDto,
}

impl ReturnBookCommandResponse {
    pub fn new(receipt: ReturnDto) -> Self {
        Self {
            receipt,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.lending_service.return_book(req.member_id, req.book_id, req.borrow_date.as_deref())
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}
