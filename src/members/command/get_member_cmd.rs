use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::members::domain::MemberService;
use crate::members::dto::MemberDto;

pub struct GetMemberCommand {
    member_service: Box<dyn MemberService>,
}

impl GetMemberCommand {
    pub fn new(member_service: Box<dyn MemberService>) -> Self {
        Self {
            member_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetMemberCommandRequest {
    pub member_id: i64,
}

impl GetMemberCommandRequest {
    pub fn new(member_id: i64) -> Self {
        Self {
            member_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetMemberCommandResponse {
    pub member: MemberDto,
}

impl GetMemberCommandResponse {
    pub fn new(member: MemberDto) -> Self {
        Self {
            member,
        }
    }
}

#[async_trait]
impl Command<GetMemberCommandRequest, GetMemberCommandResponse> for GetMemberCommand {
    async fn execute(&self, req: GetMemberCommandRequest) -> Result<GetMemberCommandResponse, CommandError> {
        self.member_service.find_member_by_id(req.member_id).await
            .map_err(CommandError::from).map(GetMemberCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::members::command::get_member_cmd::{GetMemberCommand, GetMemberCommandRequest};
    use crate::members::factory;

    #[tokio::test]
    async fn test_should_run_get_member() {
        let config = Configuration::new("test");
        let store = RepositoryStore::default();
        let _ = factory::create_member_service(&config, &store)
            .register_member(1, "Ada Lovelace").await.expect("should register member");

        let cmd = GetMemberCommand::new(factory::create_member_service(&config, &store));
        let res = cmd.execute(GetMemberCommandRequest::new(1)).await.expect("should get member");
        assert_eq!("Ada Lovelace", res.member.name.as_str());
        assert!(matches!(cmd.execute(GetMemberCommandRequest::new(2)).await, Err(CommandError::NotFound { .. })));
    }
}
