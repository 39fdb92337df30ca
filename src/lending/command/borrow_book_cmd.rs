use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;
use crate::lending::dto::LoanDto;

pub struct BorrowBookCommand {
    lending_service: Box<dyn LendingService>,
}

impl BorrowBookCommand {
    pub fn new(lending_service: Box<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BorrowBookCommandRequest {
    pub member_id: i64,
    pub book_id: i64,
}

impl BorrowBookCommandRequest {
    pub fn new(member_id: i64, book_id: i64) -> Self {
        Self {
            member_id,
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BorrowBookCommandResponse {
    pub loan: LoanDto,
    pub borrow_period_days: i64,
}

impl BorrowBookCommandResponse {
    pub fn new(loan: LoanDto, borrow_period_days: i64) -> Self {
        Self {
            loan,
            borrow_period_days,
        }
    }

    pub fn advisory(&self) -> String {
        format!("Please return this book within {} days to avoid fines.", self.borrow_period_days)
    }
}

#[async_trait]
impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand {
    async fn execute(&self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        let loan = self.lending_service.borrow_book(req.member_id, req.book_id).await
            .map_err(CommandError::from)?;
        Ok(BorrowBookCommandResponse::new(loan, self.lending_service.borrow_period_days()))
    }
}
