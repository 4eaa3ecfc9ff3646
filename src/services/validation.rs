use crate::api::middleware::error::{ApiError, ApiResult};
use crate::models::PersonPayload;
use regex::Regex;
use std::sync::OnceLock;

/// 2 or 3 digits, a hyphen, then the rest of the digits.
fn number_pattern() -> &'static Regex {
    static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
    NUMBER_REGEX.get_or_init(|| Regex::new(r"^\d{2,3}-\d+$").expect("Invalid number regex"))
}

/// Applies the contact rules identically for create and update. Runs before
/// any store mutation; on failure nothing has been written.
pub fn validate_person_fields(payload: &PersonPayload) -> ApiResult<(String, String)> {
    let name = payload.name.as_deref().map(str::trim).unwrap_or("");
    let number = payload.number.as_deref().map(str::trim).unwrap_or("");

    if name.is_empty() || number.is_empty() {
        return Err(ApiError::Validation("name or number missing".to_string()));
    }

    if name.chars().count() < 3 {
        return Err(ApiError::Validation(
            "name must be at least 3 characters long".to_string(),
        ));
    }

    if number.len() < 8 || !number_pattern().is_match(number) {
        return Err(ApiError::Validation(
            "number must be in format XX-XXXXXXX or XXX-XXXXXXX and at least 8 characters long"
                .to_string(),
        ));
    }

    Ok((name.to_string(), number.to_string()))
}
