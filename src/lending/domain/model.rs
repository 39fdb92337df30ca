use std::cmp;
use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// LoanEntity records which member holds a borrowed book and since when.
// A book has at most one open loan, so loans are keyed by book id.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanEntity {
    pub loan_id: String,
    pub book_id: i64,
    pub member_id: i64,
    pub borrowed_on: NaiveDate,
    pub due_on: NaiveDate,
}

impl LoanEntity {
    /// Fails when the due date would fall outside the supported calendar.
    pub fn new(book_id: i64, member_id: i64, borrowed_on: NaiveDate, borrow_period_days: i64) -> LibraryResult<Self> {
        let due_on = u64::try_from(borrow_period_days).ok()
            .and_then(|days| borrowed_on.checked_add_days(Days::new(days)))
            .ok_or_else(|| LibraryError::validation(
                format!("borrow period of {} days from {} is out of range", borrow_period_days, borrowed_on).as_str(),
                Some("invalid_borrow_period".to_string())))?;
        Ok(Self {
            loan_id: Uuid::new_v4().to_string(),
            book_id,
            member_id,
            borrowed_on,
            due_on,
        })
    }
}

impl Identifiable for LoanEntity {
    fn id(&self) -> i64 {
        self.book_id
    }
}

// FineAssessment is the outcome of checking a return against the borrow period.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct FineAssessment {
    pub days_borrowed: i64,
    pub overdue_days: i64,
    pub fine: i64,
}

impl FineAssessment {
    /// Calendar days from `borrowed_on` to the return date, minus the borrow
    /// period, never below zero; each overdue day costs `fine_per_day`.
    pub fn assess(borrowed_on: NaiveDate, returned_at: NaiveDateTime,
                  borrow_period_days: i64, fine_per_day: i64) -> Self {
        // counts civil days, so a daylight saving shift never drops a day
        let days_borrowed = returned_at.date().signed_duration_since(borrowed_on).num_days();
        let overdue_days = cmp::max(0, days_borrowed.saturating_sub(borrow_period_days));
        Self {
            days_borrowed,
            overdue_days,
            fine: overdue_days.saturating_mul(fine_per_day),
        }
    }

    pub fn is_on_time(&self) -> bool {
        self.overdue_days == 0
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use crate::core::library::LibraryError;
    use crate::lending::domain::model::{FineAssessment, LoanEntity};

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).and_then(|d| d.and_hms_opt(h, 0, 0)).expect("valid time")
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[tokio::test]
    async fn test_should_build_loan() {
        let loan = LoanEntity::new(1, 2, day(2024, 2, 27), 3).expect("should build loan");
        assert_eq!(day(2024, 3, 1), loan.due_on);
        assert!(!loan.loan_id.is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_out_of_range_borrow_period() {
        let res = LoanEntity::new(1, 2, day(2024, 2, 27), 100_000_000);
        assert!(matches!(res, Err(LibraryError::Validation { reason_code: Some(ref code), .. }) if code == "invalid_borrow_period"));
        assert!(LoanEntity::new(1, 2, day(2024, 2, 27), -1).is_err());
        assert!(LoanEntity::new(1, 2, day(2024, 2, 27), 0).is_ok());
    }

    #[tokio::test]
    async fn test_should_cap_huge_fine() {
        let res = FineAssessment::assess(day(2024, 3, 1), at(2024, 3, 15, 10), 3, i64::MAX);
        assert_eq!(11, res.overdue_days);
        assert_eq!(i64::MAX, res.fine);
    }

    #[tokio::test]
    async fn test_should_count_calendar_days_across_clock_change() {
        // US clocks moved forward on 2024-03-10
        let res = FineAssessment::assess(day(2024, 3, 9), at(2024, 3, 13, 0), 3, 5);
        assert_eq!(4, res.days_borrowed);
        assert_eq!(1, res.overdue_days);
        assert_eq!(5, res.fine);
    }

    #[tokio::test]
    async fn test_should_fine_overdue_return() {
        let res = FineAssessment::assess(day(2024, 3, 5), at(2024, 3, 15, 10), 3, 5);
        assert_eq!(10, res.days_borrowed);
        assert_eq!(7, res.overdue_days);
        assert_eq!(35, res.fine);
        assert!(!res.is_on_time());
    }

    #[tokio::test]
    async fn test_should_not_fine_on_time_return() {
        let res = FineAssessment::assess(day(2024, 3, 13), at(2024, 3, 15, 10), 3, 5);
        assert_eq!(2, res.days_borrowed);
        assert_eq!(0, res.overdue_days);
        assert_eq!(0, res.fine);
        assert!(res.is_on_time());
    }

    #[tokio::test]
    async fn test_should_count_whole_days_only() {
        // 3 days and 23 hours is still within a 3 day period
        let res = FineAssessment::assess(day(2024, 3, 1), at(2024, 3, 4, 23), 3, 5);
        assert_eq!(3, res.days_borrowed);
        assert!(res.is_on_time());
        let res = FineAssessment::assess(day(2024, 3, 1), at(2024, 3, 5, 0), 3, 5);
        assert_eq!(1, res.overdue_days);
        assert_eq!(5, res.fine);
    }

    #[tokio::test]
    async fn test_should_not_fine_future_borrow_date() {
        let res = FineAssessment::assess(day(2024, 4, 1), at(2024, 3, 15, 10), 3, 5);
        assert_eq!(0, res.overdue_days);
        assert_eq!(0, res.fine);
    }
}
