use chrono::NaiveDate;
use tracing::warn;
use crate::books::domain::model::BookEntity;
use crate::core::library::{Category, LibraryError, LibraryResult};
use crate::lending::domain::model::LoanEntity;
use crate::members::domain::model::MemberEntity;
use crate::utils::date::{format_date, BORROW_DATE_FMT};
use crate::utils::flatfile::{format_bool, parse_bool_field, parse_number_field, FIELD_SEPARATOR};

// FlatRecord maps an entity to one comma separated row.
pub trait FlatRecord: Sized {
    const FIELDS: usize;

    fn encode(&self) -> String;

    fn decode(fields: &[&str]) -> LibraryResult<Self>;
}

fn join(fields: &[String]) -> String {
    fields.join(FIELD_SEPARATOR.to_string().as_str())
}

fn parse_date_field(name: &str, value: &str) -> LibraryResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), BORROW_DATE_FMT).map_err(|err| LibraryError::serialization(
        format!("field {} is not a date {:?}: {}", name, value, err).as_str()))
}

// id,title,author,category,available
impl FlatRecord for BookEntity {
    const FIELDS: usize = 5;

    fn encode(&self) -> String {
        join(&[
            self.book_id.to_string(),
            self.title.to_string(),
            self.author.to_string(),
            self.category.to_string(),
            format_bool(self.available).to_string(),
        ])
    }

    fn decode(fields: &[&str]) -> LibraryResult<Self> {
        Ok(Self {
            book_id: parse_number_field("id", fields[0])?,
            title: fields[1].to_string(),
            author: fields[2].to_string(),
            category: Category::parse(fields[3])?,
            available: parse_bool_field("available", fields[4])?,
        })
    }
}

// id,name,books_borrowed
impl FlatRecord for MemberEntity {
    const FIELDS: usize = 3;

    fn encode(&self) -> String {
        join(&[
            self.member_id.to_string(),
            self.name.to_string(),
            self.books_borrowed.to_string(),
        ])
    }

    fn decode(fields: &[&str]) -> LibraryResult<Self> {
        let member_id = parse_number_field("id", fields[0])?;
        let borrowed = parse_number_field("books_borrowed", fields[2])?;
        let books_borrowed = if borrowed < 0 {
            warn!(member_id, books_borrowed = borrowed, "negative borrow count clamped to zero");
            0
        } else {
            u32::try_from(borrowed).map_err(|_| LibraryError::serialization(
                format!("books_borrowed out of range {}", borrowed).as_str()))?
        };
        Ok(Self {
            member_id,
            name: fields[1].to_string(),
            books_borrowed,
        })
    }
}

// loan_id,book_id,member_id,borrowed_on,due_on
impl FlatRecord for LoanEntity {
    const FIELDS: usize = 5;

    fn encode(&self) -> String {
        join(&[
            self.loan_id.to_string(),
            self.book_id.to_string(),
            self.member_id.to_string(),
            format_date(self.borrowed_on),
            format_date(self.due_on),
        ])
    }

    fn decode(fields: &[&str]) -> LibraryResult<Self> {
        Ok(Self {
            loan_id: fields[0].trim().to_string(),
            book_id: parse_number_field("book_id", fields[1])?,
            member_id: parse_number_field("member_id", fields[2])?,
            borrowed_on: parse_date_field("borrowed_on", fields[3])?,
            due_on: parse_date_field("due_on", fields[4])?,
        })
    }
}
