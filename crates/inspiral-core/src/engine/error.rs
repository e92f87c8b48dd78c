use crate::engine::config::ConfigError;
use thiserror::Error;

/// Top-level error for simulation workflows.
///
/// Workflows validate their configuration before touching any state, so the
/// only failure they surface is a rejected configuration; numerical edge
/// cases inside a run are clamped rather than reported.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid simulation configuration")]
    Config {
        #[from]
        source: ConfigError,
    },
}
