pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;
use crate::members::dto::MemberDto;

#[async_trait]
pub trait MemberService: Sync + Send {
    async fn register_member(&self, member_id: i64, name: &str) -> LibraryResult<MemberDto>;
    async fn update_member(&self, member: &MemberDto) -> LibraryResult<MemberDto>;
    async fn find_member_by_id(&self, id: i64) -> LibraryResult<MemberDto>;
    async fn find_members(&self) -> LibraryResult<Vec<MemberDto>>;
}

pub trait Member: Identifiable {
    fn books_borrowed(&self) -> u32;

    fn has_loans(&self) -> bool {
        self.books_borrowed() > 0
    }
}
