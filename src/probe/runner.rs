//! Smoke probe runner

use crate::error::{RegProbeError, Result};
use crate::probe::PayloadValidator;
use crate::types::{ProbeConfig, ProbeReport, RegistrationRequest};
use chrono::Utc;
use reqwest::Client;
use std::time::Instant;

/// Label prefixed to the report line
const PROBE_LABEL: &str = "Register Org";

/// One-shot smoke probe against the registration endpoint
pub struct SmokeRunner {
    config: ProbeConfig,
    client: Client,
    validator: PayloadValidator,
}

impl SmokeRunner {
    /// Create a new runner with the default configuration
    pub fn new() -> Self {
        Self::with_config(ProbeConfig::default())
    }

    /// Create a new runner with a custom configuration
    pub fn with_config(config: ProbeConfig) -> Self {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());

        // No configured timeout means the request may block indefinitely.
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().unwrap_or_else(|e| {
            tracing::warn!("Failed to create HTTP client: {}. Using default.", e);
            Client::new()
        });

        Self {
            config,
            client,
            validator: PayloadValidator::new(),
        }
    }

    /// Send the registration payload and capture status and body.
    ///
    /// Any HTTP status counts as a completed probe; status-class checking is
    /// the reader's job. Only transport failures and non-JSON bodies are
    /// errors.
    pub async fn run(&self, payload: &RegistrationRequest) -> Result<ProbeReport> {
        if self.config.base_url.trim().is_empty() {
            return Err(RegProbeError::config("base_url is empty"));
        }

        self.validator.validate(payload)?;

        let url = self.config.endpoint_url();
        let start = Instant::now();

        let body_json = serde_json::to_string(payload)?;
        tracing::debug!(url = %url, body = %body_json, "Sending registration probe");

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    let timeout_secs = self.config.timeout.map_or(0, |t| t.as_secs());
                    RegProbeError::timeout("HTTP request", timeout_secs)
                } else if e.is_connect() {
                    RegProbeError::network(
                        format!("Connection failed: {}", e),
                        None,
                        Some(url.clone()),
                    )
                } else {
                    RegProbeError::from(e)
                }
            })?;

        let status = response.status().as_u16();

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| RegProbeError::parse(format!("Response body is not JSON: {}", e), None))?;

        let duration = start.elapsed();

        tracing::info!(
            status = %status,
            duration_ms = %duration.as_millis(),
            "Probe completed"
        );

        Ok(ProbeReport {
            label: PROBE_LABEL.to_string(),
            status,
            body,
            checked_at: Utc::now(),
            duration: Some(duration),
        })
    }

    /// Get runner configuration
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }
}

impl Default for SmokeRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_runner_uses_default_endpoint() {
        let runner = SmokeRunner::new();
        assert_eq!(
            runner.config().endpoint_url(),
            "http://localhost:5000/api/auth/register-organization"
        );
        assert!(runner.config().timeout.is_none());
    }

    #[test]
    fn test_runner_accepts_custom_config() {
        let config = ProbeConfig {
            base_url: "http://127.0.0.1:9999".to_string(),
            timeout: Some(Duration::from_secs(2)),
            ..ProbeConfig::default()
        };

        let runner = SmokeRunner::with_config(config);
        assert_eq!(runner.config().timeout, Some(Duration::from_secs(2)));
        assert!(runner.config().endpoint_url().starts_with("http://127.0.0.1:9999"));
    }
}
