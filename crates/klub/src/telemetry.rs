//! Log subscriber setup for the club service. `RUST_LOG` takes precedence
//! when set; otherwise the filter is seeded from `KLUB_LOG_LEVEL` via
//! [`TelemetryConfig`].

use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    Filter { directive: String, source: ParseError },
    Init(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { directive, .. } => {
                write!(f, "invalid log filter directive '{directive}'")
            }
            TelemetryError::Init(err) => write!(f, "subscriber init failed: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::Init(err) => Some(&**err),
        }
    }
}

fn filter_from_directive(directive: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directive).map_err(|source| TelemetryError::Filter {
        directive: directive.to_string(),
        source,
    })
}

/// Installs the global subscriber. Plain compact output without ANSI colors;
/// the club service runs behind log collectors that choke on escape codes.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => filter_from_directive(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Init)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_levels_and_module_directives() {
        assert!(filter_from_directive("info").is_ok());
        assert!(filter_from_directive("klub=debug,axum=warn").is_ok());
    }

    #[test]
    fn rejects_malformed_directive_and_names_it() {
        let err = filter_from_directive("klub=notalevel=extra").expect_err("directive rejected");
        assert!(matches!(err, TelemetryError::Filter { .. }));
        assert!(err.to_string().contains("klub=notalevel=extra"));
    }
}
