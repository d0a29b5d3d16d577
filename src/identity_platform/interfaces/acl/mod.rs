pub mod access_token_provider;
pub mod identity_platform_facade;
