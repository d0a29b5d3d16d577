pub mod role_name;
pub mod user_id;
