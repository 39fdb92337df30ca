use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Clock, Configuration};
use crate::core::events::{DomainEvent, LibraryEvent};
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::lending::domain::LendingService;
use crate::lending::domain::model::{FineAssessment, LoanEntity};
use crate::lending::dto::{LoanDto, ReturnDto};
use crate::lending::repository::LoanRepository;
use crate::members::domain::MemberService;
use crate::members::dto::MemberDto;
use crate::utils::date::parse_borrow_date;

pub(crate) struct LendingServiceImpl {
    borrow_period_days: i64,
    fine_per_day: i64,
    loan_repository: Box<dyn LoanRepository>,
    member_service: Box<dyn MemberService>,
    catalog_service: Box<dyn CatalogService>,
    events_publisher: Box<dyn EventPublisher>,
    clock: Box<dyn Clock>,
}

impl LendingServiceImpl {
    pub(crate) fn new(config: &Configuration, loan_repository: Box<dyn LoanRepository>,
                      member_service: Box<dyn MemberService>, catalog_service: Box<dyn CatalogService>,
                      events_publisher: Box<dyn EventPublisher>, clock: Box<dyn Clock>) -> Self {
        Self {
            borrow_period_days: config.borrow_period_days,
            fine_per_day: config.fine_per_day,
            loan_repository,
            member_service,
            catalog_service,
            events_publisher,
            clock,
        }
    }

    async fn find_member(&self, member_id: i64) -> LibraryResult<MemberDto> {
        self.member_service.find_member_by_id(member_id).await.map_err(|err| {
            if err.is_not_found() {
                LibraryError::member_not_found(format!("member {} not found", member_id).as_str())
            } else {
                err
            }
        })
    }

    // Looks up a book and insists on its lending status; a missing book is
    // reported with the same error as a book in the wrong status.
    async fn find_book_in(&self, book_id: i64, status: BookStatus) -> LibraryResult<BookDto> {
        let mismatch = |reason: &str| match status {
            BookStatus::Available => LibraryError::book_not_found(
                format!("book {} {}", book_id, reason).as_str()),
            BookStatus::Borrowed => LibraryError::book_not_borrowed(
                format!("book {} {}", book_id, reason).as_str()),
        };
        match self.catalog_service.find_book_by_id(book_id).await {
            Ok(book) if book.status() == status => Ok(book),
            Ok(book) => Err(mismatch(format!("is {}", book.status().to_string().to_lowercase()).as_str())),
            Err(err) if err.is_not_found() => Err(mismatch("does not exist")),
            Err(err) => Err(err),
        }
    }

    async fn find_loan_entity(&self, book_id: i64) -> LibraryResult<Option<LoanEntity>> {
        match self.loan_repository.get(book_id).await {
            Ok(loan) => Ok(Some(loan)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl LendingService for LendingServiceImpl {
    async fn borrow_book(&self, member_id: i64, book_id: i64) -> LibraryResult<LoanDto> {
        let mut book = self.find_book_in(book_id, BookStatus::Available).await?;
        let mut member = self.find_member(member_id).await?;
        let loan = LoanDto::new(book_id, member_id, self.clock.now().date(), self.borrow_period_days)?;

        if let Some(stale) = self.find_loan_entity(book_id).await? {
            warn!(book_id, loan_id = stale.loan_id.as_str(), "dropping stale loan for available book");
            let _ = self.loan_repository.delete(book_id).await?;
        }

        book.available = false;
        let _ = self.catalog_service.update_book(&book).await?;
        member.books_borrowed = member.books_borrowed.saturating_add(1);
        let _ = self.member_service.update_member(&member).await?;
        let _ = self.loan_repository.create(&LoanEntity::from(&loan)).await?;
        let _ = self.events_publisher.publish(&DomainEvent::record(LibraryEvent::BookBorrowed, book_id, &loan)?).await?;
        info!(book_id, member_id, due_on = %loan.due_on, "book borrowed");
        Ok(loan)
    }

    async fn return_book(&self, member_id: i64, book_id: i64, borrow_date: Option<&str>) -> LibraryResult<ReturnDto> {
        let mut book = self.find_book_in(book_id, BookStatus::Borrowed).await?;
        let mut member = self.find_member(member_id).await?;
        let loan = self.find_loan_entity(book_id).await?;

        if let Some(loan) = &loan {
            if loan.member_id != member_id {
                return Err(LibraryError::validation(
                    format!("book {} is lent to member {}, not member {}",
                            book_id, loan.member_id, member_id).as_str(),
                    Some("loan_member_mismatch".to_string())));
            }
        }
        let borrowed_on = match (borrow_date, &loan) {
            (Some(input), _) => parse_borrow_date(input)?,
            (None, Some(loan)) => loan.borrowed_on,
            (None, None) => {
                return Err(LibraryError::validation(
                    format!("no loan recorded for book {}, borrow date required", book_id).as_str(),
                    Some("borrow_date_required".to_string())));
            }
        };

        let returned_at = self.clock.now();
        let assessment = FineAssessment::assess(borrowed_on, returned_at, self.borrow_period_days, self.fine_per_day);

        book.available = true;
        let _ = self.catalog_service.update_book(&book).await?;
        if member.books_borrowed == 0 {
            warn!(member_id, "member has no borrowed books on record, keeping counter at zero");
        }
        member.books_borrowed = member.books_borrowed.saturating_sub(1);
        let _ = self.member_service.update_member(&member).await?;
        if loan.is_some() {
            let _ = self.loan_repository.delete(book_id).await?;
        }

        let receipt = ReturnDto {
            book_id,
            member_id,
            borrowed_on,
            returned_at,
            assessment,
        };
        let _ = self.events_publisher.publish(&DomainEvent::record(LibraryEvent::BookReturned, book_id, &receipt)?).await?;
        info!(book_id, member_id, overdue_days = assessment.overdue_days, fine = assessment.fine, "book returned");
        Ok(receipt)
    }

    async fn find_loan(&self, book_id: i64) -> LibraryResult<Option<LoanDto>> {
        Ok(self.find_loan_entity(book_id).await?.as_ref().map(LoanDto::from))
    }

    fn borrow_period_days(&self) -> i64 {
        self.borrow_period_days
    }
}
