use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CallableErrorResponseResource {
    pub error: CallableErrorBodyResource,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CallableErrorBodyResource {
    /// Canonical code, e.g. `INVALID_ARGUMENT`.
    pub status: String,
    pub message: String,
}
