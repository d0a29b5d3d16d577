mod callable_controller_tests;
mod command_service_tests;
