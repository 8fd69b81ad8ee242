//! Messages returned to clients when a request is rejected before it reaches a service.

pub const EMPTY_BODY: &str = "Empty or unreadable body";
pub const INVALID_JSON: &str = "Invalid JSON input";
pub const MISSING_ID: &str = "Missing ID";
pub const INVALID_ID: &str = "Invalid ID format";
pub const NOT_FOUND_ROUTE: &str = "The requested resource was not found";
