pub const MAX_UID_LENGTH: usize = 128;

/// Subject identifier of an identity platform user account. Its length is
/// measured in UTF-16 code units, as the platform does.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct UserUid(String);

impl UserUid {
    pub fn new(value: &str) -> Result<Self, String> {
        let length = value.encode_utf16().count();
        if length == 0 || length > MAX_UID_LENGTH {
            return Err(format!(
                "The uid must be a non-empty string with at most {MAX_UID_LENGTH} characters."
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
