pub mod role_assignment_callable_controller;
