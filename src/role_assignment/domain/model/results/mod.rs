pub mod role_assignment_result;
