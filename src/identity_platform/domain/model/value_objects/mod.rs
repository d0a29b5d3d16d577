pub mod custom_claims;
pub mod user_uid;
