pub mod callable_error;
pub mod callable_error_response_resource;
pub mod functions_error_code;
