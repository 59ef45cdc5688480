//! Reg Probe - one-shot smoke probe for the organization registration API
//!
//! A minimal CLI tool that sends a fixed registration payload to the local
//! API server and prints the status code and JSON response it gets back.

pub mod error;
pub mod logger;
pub mod payload;
pub mod probe;
pub mod types;

// Re-export commonly used types
pub use error::{RegProbeError, Result};
pub use types::{Address, GeoPoint, ProbeConfig, ProbeReport, RegistrationRequest};

// Re-export main functionality
pub use payload::build_payload;
pub use probe::{PayloadValidator, SmokeRunner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
