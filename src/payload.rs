//! Canonical registration payload

use crate::types::{Address, GeoPoint, RegistrationRequest};

/// Build the fixed registration payload the probe sends.
///
/// Pure construction: no randomness and no timestamps, so repeated calls
/// serialize to byte-identical JSON.
pub fn build_payload() -> RegistrationRequest {
    RegistrationRequest {
        email: "orgadmin@example.com".to_string(),
        password: "password123".to_string(),
        name: "Admin Name".to_string(),
        organization_name: "MyOrg".to_string(),
        address: Address {
            street: "123 Main".to_string(),
            city: "Metro".to_string(),
            state: "MH".to_string(),
            zip_code: "123456".to_string(),
            country: "India".to_string(),
        },
        location: GeoPoint {
            latitude: 19.1825,
            longitude: 72.8402,
        },
    }
}
