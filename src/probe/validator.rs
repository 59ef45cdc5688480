//! Registration payload validation
//!
//! Mirrors the rules the API enforces server-side, so an obviously broken
//! payload is rejected before any network traffic happens.

use crate::error::{RegProbeError, Result};
use crate::types::{GeoPoint, RegistrationRequest};
use regex::Regex;

/// Minimum password length the API accepts
const MIN_PASSWORD_LEN: usize = 6;

/// Registration payload validator
pub struct PayloadValidator;

impl PayloadValidator {
    /// Create a new payload validator
    pub fn new() -> Self {
        Self
    }

    /// Validate a registration request
    pub fn validate(&self, request: &RegistrationRequest) -> Result<()> {
        self.validate_email(&request.email)?;
        self.validate_password(&request.password)?;
        self.validate_required(&request.name, "name")?;
        self.validate_required(&request.organization_name, "organizationName")?;
        self.validate_location(&request.location)?;

        Ok(())
    }

    /// Validate email shape
    fn validate_email(&self, email: &str) -> Result<()> {
        let email_shape = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
            .map_err(|e| RegProbeError::internal(e.to_string()))?;

        if !email_shape.is_match(email) {
            return Err(RegProbeError::validation(format!(
                "'{}' is not a valid email address",
                email
            )));
        }

        Ok(())
    }

    /// Validate password length
    fn validate_password(&self, password: &str) -> Result<()> {
        if password.len() < MIN_PASSWORD_LEN {
            return Err(RegProbeError::validation(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        Ok(())
    }

    /// Validate a required free-text field
    fn validate_required(&self, value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(RegProbeError::validation(format!(
                "{} cannot be empty",
                field
            )));
        }

        Ok(())
    }

    /// Validate geographic coordinates
    fn validate_location(&self, location: &GeoPoint) -> Result<()> {
        if !location.latitude.is_finite() || !(-90.0..=90.0).contains(&location.latitude) {
            return Err(RegProbeError::validation(format!(
                "latitude {} is out of range",
                location.latitude
            )));
        }

        if !location.longitude.is_finite() || !(-180.0..=180.0).contains(&location.longitude) {
            return Err(RegProbeError::validation(format!(
                "longitude {} is out of range",
                location.longitude
            )));
        }

        Ok(())
    }
}

impl Default for PayloadValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::build_payload;

    #[test]
    fn test_canonical_payload_is_valid() {
        let validator = PayloadValidator::new();
        assert!(validator.validate(&build_payload()).is_ok());
    }

    #[test]
    fn test_rejects_bad_email() {
        let validator = PayloadValidator::new();

        let mut payload = build_payload();
        payload.email = "not-an-email".to_string();
        assert!(validator.validate(&payload).is_err());

        payload.email = "two@@example.com".to_string();
        assert!(validator.validate(&payload).is_err());
    }

    #[test]
    fn test_rejects_short_password() {
        let validator = PayloadValidator::new();

        let mut payload = build_payload();
        payload.password = "12345".to_string();
        assert!(validator.validate(&payload).is_err());
    }

    #[test]
    fn test_rejects_empty_names() {
        let validator = PayloadValidator::new();

        let mut payload = build_payload();
        payload.name = "   ".to_string();
        assert!(validator.validate(&payload).is_err());

        let mut payload = build_payload();
        payload.organization_name = String::new();
        assert!(validator.validate(&payload).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_coordinates() {
        let validator = PayloadValidator::new();

        let mut payload = build_payload();
        payload.location.latitude = 91.0;
        assert!(validator.validate(&payload).is_err());

        let mut payload = build_payload();
        payload.location.longitude = f64::NAN;
        assert!(validator.validate(&payload).is_err());
    }

    #[test]
    fn test_address_fields_are_not_validated() {
        // The API itself does not validate address sub-fields.
        let validator = PayloadValidator::new();

        let mut payload = build_payload();
        payload.address.street = String::new();
        payload.address.country = String::new();
        assert!(validator.validate(&payload).is_ok());
    }
}
