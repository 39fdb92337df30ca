use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;
use crate::members::domain::MemberService;
use crate::members::domain::service::MemberServiceImpl;
use crate::members::repository::MemberRepository;
use crate::members::repository::memory_member_repository::MemoryMemberRepository;

pub(crate) fn create_member_repository(store: &RepositoryStore) -> Box<dyn MemberRepository> {
    Box::new(MemoryMemberRepository::new(store.members.clone()))
}

pub fn create_member_service(config: &Configuration, store: &RepositoryStore) -> Box<dyn MemberService> {
    let member_repo = create_member_repository(store);
    Box::new(MemberServiceImpl::new(config, member_repo, create_publisher()))
}
