use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;
use crate::lending::domain::model::{FineAssessment, LoanEntity};
use crate::utils::date::serializer;

// LoanDto abstracts a book that is currently lent to a member.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanDto {
    pub loan_id: String,
    pub book_id: i64,
    pub member_id: i64,
    pub borrowed_on: NaiveDate,
    pub due_on: NaiveDate,
}

impl LoanDto {
    pub fn new(book_id: i64, member_id: i64, borrowed_on: NaiveDate, borrow_period_days: i64) -> LibraryResult<Self> {
        LoanEntity::new(book_id, member_id, borrowed_on, borrow_period_days).map(|loan| LoanDto::from(&loan))
    }
}

impl Identifiable for LoanDto {
    fn id(&self) -> i64 {
        self.book_id
    }
}

impl From<&LoanEntity> for LoanDto {
    fn from(other: &LoanEntity) -> Self {
        Self {
            loan_id: other.loan_id.to_string(),
            book_id: other.book_id,
            member_id: other.member_id,
            borrowed_on: other.borrowed_on,
            due_on: other.due_on,
        }
    }
}

impl From<&LoanDto> for LoanEntity {
    fn from(other: &LoanDto) -> Self {
        Self {
            loan_id: other.loan_id.to_string(),
            book_id: other.book_id,
            member_id: other.member_id,
            borrowed_on: other.borrowed_on,
            due_on: other.due_on,
        }
    }
}

// ReturnDto describes a completed return and the fine owed for it.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ReturnDto {
    pub book_id: i64,
    pub member_id: i64,
    pub borrowed_on: NaiveDate,
    #[serde(with = "serializer")]
    pub returned_at: NaiveDateTime,
    pub assessment: FineAssessment,
}

impl ReturnDto {
    pub fn is_on_time(&self) -> bool {
        self.assessment.is_on_time()
    }
}
