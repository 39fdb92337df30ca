use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;
use crate::lending::dto::LoanDto;

pub struct GetLoanCommand {
    lending_service: Box<dyn LendingService>,
}

impl GetLoanCommand {
    pub fn new(lending_service: Box<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetLoanCommandRequest {
    pub book_id: i64,
}

impl GetLoanCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetLoanCommandResponse {
    // None when the book is not lent or was lent before loans were recorded
    pub loan: Option<LoanDto>,
}

impl GetLoanCommandResponse {
    pub fn new(loan: Option<LoanDto>) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<GetLoanCommandRequest, GetLoanCommandResponse> for GetLoanCommand {
    async fn execute(&self, req: GetLoanCommandRequest) -> Result<GetLoanCommandResponse, CommandError> {
        self.lending_service.find_loan(req.book_id).await
            .map_err(CommandError::from).map(GetLoanCommandResponse::new)
    }
}
