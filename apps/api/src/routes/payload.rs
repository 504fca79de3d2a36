//! Request/response payload helpers shared by the generate, render and export handlers.

use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::Profile;

/// `{ "success": true, "data": ... }` wrapper used by every JSON success response.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> SuccessEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: personalInfo and targetRole";

/// Checks the two required top-level fields, then decodes the rest of the profile.
///
/// `personalInfo` must be an object and `targetRole` a non-blank string; anything
/// else is rejected before any upstream call happens.
pub fn profile_from_body(body: Value) -> Result<Profile, AppError> {
    let has_personal_info = body.get("personalInfo").is_some_and(Value::is_object);
    let has_target_role = body
        .get("targetRole")
        .and_then(Value::as_str)
        .is_some_and(|role| !role.trim().is_empty());

    if !has_personal_info || !has_target_role {
        return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    }

    serde_json::from_value(body)
        .map_err(|e| AppError::Validation(format!("Invalid profile payload: {e}")))
}
