use async_trait::async_trait;
use crate::core::domain::Configuration;
use crate::core::events::{DomainEvent, LibraryEvent};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::members::domain::MemberService;
use crate::members::domain::model::MemberEntity;
use crate::members::dto::MemberDto;
use crate::members::repository::MemberRepository;
use crate::utils::flatfile::validate_text_field;

pub(crate) struct MemberServiceImpl {
    member_repository: Box<dyn MemberRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl MemberServiceImpl {
    pub(crate) fn new(_config: &Configuration, member_repository: Box<dyn MemberRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        MemberServiceImpl {
            member_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl MemberService for MemberServiceImpl {
    async fn register_member(&self, member_id: i64, name: &str) -> LibraryResult<MemberDto> {
        validate_text_field("name", name)?;
        let member = MemberDto::new(member_id, name);
        self.member_repository.create(&MemberEntity::from(&member)).await.map_err(|err| match err {
            LibraryError::DuplicateKey { .. } => LibraryError::duplicate_key(
                format!("a member with id {} already exists", member_id).as_str()),
            other => other,
        })?;
        let _ = self.events_publisher.publish(&DomainEvent::record(LibraryEvent::MemberRegistered, member_id, &member)?).await?;
        Ok(member)
    }

    async fn update_member(&self, member: &MemberDto) -> LibraryResult<MemberDto> {
        let _ = self.member_repository.update(&MemberEntity::from(member)).await?;
        let _ = self.events_publisher.publish(&DomainEvent::record(LibraryEvent::MemberUpdated, member.member_id, member)?).await?;
        Ok(member.clone())
    }

    async fn find_member_by_id(&self, id: i64) -> LibraryResult<MemberDto> {
        self.member_repository.get(id).await.map(|m| MemberDto::from(&m))
    }

    async fn find_members(&self) -> LibraryResult<Vec<MemberDto>> {
        let res = self.member_repository.find_all().await?;
        Ok(res.iter().map(MemberDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::core::repository::RepositoryStore;
    use crate::members::domain::MemberService;
    use crate::members::factory;

    #[tokio::test]
    async fn test_should_register_member() {
        let member_svc = factory::create_member_service(&Configuration::new("test"), &RepositoryStore::default());

        let member = member_svc.register_member(1, "Ada Lovelace").await.expect("should register member");
        assert_eq!(0, member.books_borrowed);

        let loaded = member_svc.find_member_by_id(1).await.expect("should return member");
        assert_eq!(member, loaded);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_member() {
        let member_svc = factory::create_member_service(&Configuration::new("test"), &RepositoryStore::default());

        let _ = member_svc.register_member(1, "Ada Lovelace").await.expect("should register member");
        let res = member_svc.register_member(1, "Alan Turing").await;
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));

        let members = member_svc.find_members().await.expect("should list members");
        assert_eq!(1, members.len());
        assert_eq!("Ada Lovelace", members[0].name.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_comma_in_name() {
        let member_svc = factory::create_member_service(&Configuration::new("test"), &RepositoryStore::default());

        let res = member_svc.register_member(2, "Lovelace, Ada").await;
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        assert!(member_svc.find_members().await.expect("should list members").is_empty());
    }

    #[tokio::test]
    async fn test_should_update_member() {
        let member_svc = factory::create_member_service(&Configuration::new("test"), &RepositoryStore::default());

        let mut member = member_svc.register_member(3, "Alan Turing").await.expect("should register member");
        member.books_borrowed = 1;
        let _ = member_svc.update_member(&member).await.expect("should update member");

        let loaded = member_svc.find_member_by_id(3).await.expect("should return member");
        assert_eq!(1, loaded.books_borrowed);
        assert!(member_svc.find_member_by_id(4).await.is_err());
    }
}
