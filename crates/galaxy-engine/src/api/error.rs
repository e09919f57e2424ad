use thiserror::Error;

/// Errors raised while mounting or configuring the background.
/// Per-frame work never fails.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No drawing surface was supplied; the animation cannot run headless.
    #[error("no drawing surface available; the animation cannot start")]
    MissingSurface,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
