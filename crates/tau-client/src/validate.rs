//! Pre-flight checks on caller input
//!
//! Every check runs before a request is built, so invalid input never
//! reaches the network.

use crate::error::ApiError;

/// Maximum number of video IDs accepted by a single bulk delete
pub const MAX_VIDEO_IDS: usize = 5;

/// Trims `value` and rejects it if nothing is left
///
/// The error message names `field`, e.g. `"invalid request, ID can't be blank"`.
pub fn require_non_blank<'a>(value: &'a str, field: &str) -> Result<&'a str, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::bad_request(format!(
            "invalid request, {field} can't be blank"
        )));
    }
    Ok(trimmed)
}

/// Rejects an empty collection or one larger than `max`
pub fn require_bounded<'a, T>(items: &'a [T], field: &str, max: usize) -> Result<&'a [T], ApiError> {
    if items.is_empty() {
        return Err(ApiError::bad_request(format!(
            "invalid request, {field} can't be empty"
        )));
    }
    if items.len() > max {
        return Err(ApiError::bad_request(format!(
            "invalid request, maximum number of {field} is {max} but you supplied {}",
            items.len()
        )));
    }
    Ok(items)
}
