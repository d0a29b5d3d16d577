use claims_functions::role_assignment::{
    domain::model::commands::assign_role_to_user_command::AssignRoleToUserCommand,
    interfaces::rest::resources::set_user_role_request_resource::{
        SetUserRoleCallableRequestResource, SetUserRoleRequestResource,
    },
};

pub const USER_ID: &str = "u1";
pub const ROLE: &str = "admin";

pub fn assign_role_command() -> AssignRoleToUserCommand {
    AssignRoleToUserCommand::new(USER_ID.to_string(), ROLE.to_string())
        .expect("valid assign role command")
}

pub fn callable_request(
    uid: Option<&str>,
    role: Option<&str>,
) -> SetUserRoleCallableRequestResource {
    SetUserRoleCallableRequestResource {
        data: SetUserRoleRequestResource {
            uid: uid.map(str::to_string),
            role: role.map(str::to_string),
        },
    }
}
