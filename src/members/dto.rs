use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::members::domain::Member;
use crate::members::domain::model::MemberEntity;

// MemberDto is a data transfer object for Member service
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MemberDto {
    pub member_id: i64,
    pub name: String,
    pub books_borrowed: u32,
}

impl MemberDto {
    pub fn new(member_id: i64, name: &str) -> Self {
        Self {
            member_id,
            name: name.to_string(),
            books_borrowed: 0,
        }
    }
}

impl Identifiable for MemberDto {
    fn id(&self) -> i64 {
        self.member_id
    }
}

impl Member for MemberDto {
    fn books_borrowed(&self) -> u32 {
        self.books_borrowed
    }
}

impl From<&MemberEntity> for MemberDto {
    fn from(other: &MemberEntity) -> Self {
        Self {
            member_id: other.member_id,
            name: other.name.to_string(),
            books_borrowed: other.books_borrowed,
        }
    }
}

impl From<&MemberDto> for MemberEntity {
    fn from(other: &MemberDto) -> Self {
        Self {
            member_id: other.member_id,
            name: other.name.to_string(),
            books_borrowed: other.books_borrowed,
        }
    }
}
