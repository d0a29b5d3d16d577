use std::time::Duration;

pub const IDENTITY_TOOLKIT_BASE_URL: &str = "https://identitytoolkit.googleapis.com";
pub const DEFAULT_METADATA_HOST: &str = "metadata.google.internal";
pub const EMULATOR_ACCESS_TOKEN: &str = "owner";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub project_id: Option<String>,
    pub auth_emulator_host: Option<String>,
    pub identity_platform_base_url: Option<String>,
    pub identity_platform_access_token: Option<String>,
    pub metadata_host: String,
    pub identity_platform_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            project_id: non_empty_var("GCLOUD_PROJECT")
                .or_else(|| non_empty_var("GOOGLE_CLOUD_PROJECT")),
            auth_emulator_host: non_empty_var("FIREBASE_AUTH_EMULATOR_HOST"),
            identity_platform_base_url: non_empty_var("IDENTITY_PLATFORM_BASE_URL"),
            identity_platform_access_token: non_empty_var("IDENTITY_PLATFORM_ACCESS_TOKEN"),
            metadata_host: non_empty_var("GCE_METADATA_HOST")
                .unwrap_or_else(|| DEFAULT_METADATA_HOST.to_string()),
            identity_platform_timeout_secs: std::env::var("IDENTITY_PLATFORM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
        }
    }

    /// Base URL of the Identity Toolkit API. An explicit override wins, then
    /// the Auth emulator, then the production endpoint.
    pub fn identity_platform_base_url(&self) -> String {
        if let Some(base_url) = &self.identity_platform_base_url {
            return base_url.trim_end_matches('/').to_string();
        }

        match &self.auth_emulator_host {
            Some(host) => format!("http://{host}/identitytoolkit.googleapis.com"),
            None => IDENTITY_TOOLKIT_BASE_URL.to_string(),
        }
    }

    pub fn metadata_base_url(&self) -> String {
        format!("http://{}", self.metadata_host)
    }

    pub fn uses_auth_emulator(&self) -> bool {
        self.auth_emulator_host.is_some()
    }

    pub fn identity_platform_timeout(&self) -> Duration {
        Duration::from_secs(self.identity_platform_timeout_secs)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
