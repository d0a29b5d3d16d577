pub mod metadata_server_access_token_provider_impl;
pub mod rest_identity_platform_facade_impl;
pub mod static_access_token_provider_impl;
