pub mod role_assignment_domain_error;
