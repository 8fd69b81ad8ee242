use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stored user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
}

/// Payload for creating a user
///
/// A missing `name` deserializes to an empty string so it fails validation
/// rather than JSON decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateUser {
    #[serde(default)]
    #[validate(length(min = 1, message = "name required"))]
    pub name: String,
}
