use serde_json::{Map, Value};

pub const ROLE_CLAIM: &str = "role";
pub const MAX_CLAIMS_PAYLOAD_SIZE: usize = 1000;

/// Developer claims attached to a user's identity record and copied into
/// every ID token issued for that user.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomClaims(Map<String, Value>);

impl CustomClaims {
    pub fn with_role(role: &str) -> Self {
        let mut claims = Map::new();
        claims.insert(ROLE_CLAIM.to_string(), Value::String(role.to_string()));
        Self(claims)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Serialized form sent as `customAttributes`. Its length is measured in
    /// UTF-16 code units, as the platform does.
    pub fn to_payload(&self) -> Result<String, String> {
        let payload = serde_json::to_string(&self.0).map_err(|e| e.to_string())?;
        if payload.encode_utf16().count() > MAX_CLAIMS_PAYLOAD_SIZE {
            return Err(format!(
                "The developer claims payload should not exceed {MAX_CLAIMS_PAYLOAD_SIZE} characters."
            ));
        }
        Ok(payload)
    }
}
