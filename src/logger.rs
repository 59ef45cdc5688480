//! Logging setup for the probe binary

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize the global tracing subscriber.
///
/// Filter comes from `RUST_LOG`; the default stays at `warn` so the report
/// line is the only thing a normal run prints.
pub fn init_logging() {
    let filter = std::env::var("RUST_LOG").map_or_else(
        |_| EnvFilter::new("warn"),
        |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("warn")),
    );

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_is_idempotent() {
        init_logging();
        init_logging();
    }
}
