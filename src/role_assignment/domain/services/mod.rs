pub mod role_assignment_command_service;
