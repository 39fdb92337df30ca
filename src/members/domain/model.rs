use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::members::domain::Member;

// MemberEntity abstracts a registered library member.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MemberEntity {
    pub member_id: i64,
    pub name: String,
    pub books_borrowed: u32,
}

impl MemberEntity {
    pub fn new(member_id: i64, name: &str) -> Self {
        Self {
            member_id,
            name: name.to_string(),
            books_borrowed: 0,
        }
    }
}

impl Identifiable for MemberEntity {
    fn id(&self) -> i64 {
        self.member_id
    }
}

impl Member for MemberEntity {
    fn books_borrowed(&self) -> u32 {
        self.books_borrowed
    }
}

#[cfg(test)]
mod tests {
    use crate::members::domain::Member;
    use crate::members::domain::model::MemberEntity;

    #[tokio::test]
    async fn test_should_build_member() {
        let member = MemberEntity::new(1, "Ada Lovelace");
        assert_eq!("Ada Lovelace", member.name.as_str());
        assert_eq!(0, member.books_borrowed);
        assert!(!member.has_loans());
    }
}
