//! Input validation for analysis requests

use std::borrow::Cow;

use validator::ValidationError;

/// Message shown inline when the location box is empty
pub const EMPTY_LOCATION_MESSAGE: &str = "Please enter a location";

/// Validate a location entered by the user.
///
/// Only emptiness is checked, after trimming whitespace. The value itself is
/// forwarded to the backend exactly as typed.
pub fn validate_location(location: &str) -> Result<(), &'static str> {
    if location.trim().is_empty() {
        return Err(EMPTY_LOCATION_MESSAGE);
    }
    Ok(())
}

/// `validator` adapter for [`validate_location`]
pub fn validate_location_field(location: &str) -> Result<(), ValidationError> {
    validate_location(location).map_err(|message| {
        let mut error = ValidationError::new("empty_location");
        error.message = Some(Cow::Borrowed(message));
        error
    })
}
