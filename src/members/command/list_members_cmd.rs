use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::members::domain::MemberService;
use crate::members::dto::MemberDto;

pub struct ListMembersCommand {
    member_service: Box<dyn MemberService>,
}

impl ListMembersCommand {
    pub fn new(member_service: Box<dyn MemberService>) -> Self {
        Self {
            member_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListMembersCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListMembersCommandResponse {
    pub members: Vec<MemberDto>,
}

impl ListMembersCommandResponse {
    pub fn new(members: Vec<MemberDto>) -> Self {
        Self {
            members,
        }
    }
}

#[async_trait]
impl Command<ListMembersCommandRequest, ListMembersCommandResponse> for ListMembersCommand {
    async fn execute(&self, _req: ListMembersCommandRequest) -> Result<ListMembersCommandResponse, CommandError> {
        self.member_service.find_members().await
            .map_err(CommandError::from).map(ListMembersCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::members::command::list_members_cmd::{ListMembersCommand, ListMembersCommandRequest};
    use crate::members::factory;

    #[tokio::test]
    async fn test_should_run_list_members() {
        let config = Configuration::new("test");
        let store = RepositoryStore::default();
        let svc = factory::create_member_service(&config, &store);
        let _ = svc.register_member(2, "Alan Turing").await.expect("should register member");
        let _ = svc.register_member(1, "Ada Lovelace").await.expect("should register member");

        let cmd = ListMembersCommand::new(factory::create_member_service(&config, &store));
        let res = cmd.execute(ListMembersCommandRequest::default()).await.expect("should list members");
        assert_eq!(vec![2, 1], res.members.iter().map(|m| m.member_id).collect::<Vec<i64>>());
    }
}
