pub mod role_assignment_result_resource;
pub mod set_user_role_request_resource;
