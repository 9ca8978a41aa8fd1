//! Tracing subscriber setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{DiaryError, Result};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level when it is set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "diary_rs={level},tower_http={level}",
            level = config.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format.as_str() {
        "json" => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
        "compact" => registry.with(tracing_subscriber::fmt::layer().compact()).try_init(),
        "pretty" => registry.with(tracing_subscriber::fmt::layer().pretty()).try_init(),
        other => {
            return Err(DiaryError::Config(format!(
                "Unknown logging format '{}'",
                other
            )))
        }
    };

    result.map_err(|e| DiaryError::Config(format!("Failed to set tracing subscriber: {}", e)))
}
