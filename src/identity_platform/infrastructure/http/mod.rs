pub mod identity_platform_http_client;
