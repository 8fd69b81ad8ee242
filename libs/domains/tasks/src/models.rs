use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stored task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i32,
    #[serde(alias = "task")]
    pub description: String,
    pub completed: bool,
    #[serde(alias = "user_id")]
    pub owner_id: i32,
}

/// Payload for creating a task
///
/// Older clients send `task` and `user_id`; both are accepted. Missing fields
/// default to empty/zero so they are rejected by the service, not the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateTask {
    #[serde(default, alias = "task")]
    #[validate(length(min = 1, message = "task cannot be empty"))]
    pub description: String,

    #[serde(default, alias = "user_id")]
    pub owner_id: i32,
}
