use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::members::domain::MemberService;
use crate::members::dto::MemberDto;

pub struct RegisterMemberCommand {
    member_service: Box<dyn MemberService>,
}

impl RegisterMemberCommand {
    pub fn new(member_service: Box<dyn MemberService>) -> Self {
        Self {
            member_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterMemberCommandRequest {
    pub member_id: i64,
    pub name: String,
}

impl RegisterMemberCommandRequest {
    pub fn new(member_id: i64, name: &str) -> Self {
        Self {
            member_id,
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterMemberCommandResponse {
    pub member: MemberDto,
}

impl RegisterMemberCommandResponse {
    pub fn new(member: MemberDto) -> Self {
        Self {
            member,
        }
    }
}

#[async_trait]
impl Command<RegisterMemberCommandRequest, RegisterMemberCommandResponse> for RegisterMemberCommand {
    async fn execute(&self, req: RegisterMemberCommandRequest) -> Result<RegisterMemberCommandResponse, CommandError> {
        self.member_service.register_member(req.member_id, req.name.as_str()).await
            .map_err(CommandError::from).map(RegisterMemberCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::members::command::register_member_cmd::{RegisterMemberCommand, RegisterMemberCommandRequest};
    use crate::members::factory;

    #[tokio::test]
    async fn test_should_run_register_member() {
        let svc = factory::create_member_service(&Configuration::new("test"), &RepositoryStore::default());
        let cmd = RegisterMemberCommand::new(svc);

        let res = cmd.execute(RegisterMemberCommandRequest::new(10, "Katherine Johnson")).await.expect("should register member");
        assert_eq!(10, res.member.member_id);

        let res = cmd.execute(RegisterMemberCommandRequest::new(10, "Someone Else")).await;
        assert!(matches!(res, Err(CommandError::DuplicateKey { .. })));
    }
}
