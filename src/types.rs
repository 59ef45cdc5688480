//! Core types and structures for reg-probe

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Organization registration request body
///
/// Field names are camelCase on the wire, matching what the API expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub organization_name: String,
    pub address: Address,
    pub location: GeoPoint,
}

/// Postal address of the organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// Geographic coordinates of the organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Configuration for the smoke probe
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub base_url: String,
    pub register_path: String,
    /// None means the request may block indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl ProbeConfig {
    /// Full URL of the registration endpoint
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.register_path
        )
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            register_path: "/api/auth/register-organization".to_string(),
            timeout: None,
            user_agent: "reg-probe/0.1.0".to_string(),
        }
    }
}

/// Outcome of a single probe run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeReport {
    pub label: String,
    pub status: u16,
    pub body: serde_json::Value,
    pub checked_at: DateTime<Utc>,
    pub duration: Option<Duration>,
}

impl ProbeReport {
    /// Render the report as the single output line the probe prints.
    ///
    /// Status and body pass through untransformed.
    pub fn summary(&self) -> String {
        format!("{}: {} {}", self.label, self.status, self.body)
    }
}
