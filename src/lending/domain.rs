pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::lending::dto::{LoanDto, ReturnDto};

#[async_trait]
pub trait LendingService: Sync + Send {
    async fn borrow_book(&self, member_id: i64, book_id: i64) -> LibraryResult<LoanDto>;
    // `borrow_date` is the operator-entered `YYYY-MM-DD` date; when absent the recorded loan is used.
    async fn return_book(&self, member_id: i64, book_id: i64, borrow_date: Option<&str>) -> LibraryResult<ReturnDto>;
    async fn find_loan(&self, book_id: i64) -> LibraryResult<Option<LoanDto>>;
    fn borrow_period_days(&self) -> i64;
}
