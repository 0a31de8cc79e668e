//! Tracing setup for test suites exercising outcome settings

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

static INIT: Once = Once::new();

/// Route tracing output from outcome settings to the test harness.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = init_tracing_subscriber("debug");
    });
}

/// Initialize tracing subscriber with the specified level, honouring RUST_LOG
fn init_tracing_subscriber(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_test_writer();
    let subscriber = Registry::default().with(env_filter).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging() {
        // Should not panic when called multiple times
        init_test_logging();
        init_test_logging();
    }
}
