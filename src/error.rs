use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `namegauge`.
///
/// The engine itself is total over any string input and never fails; errors
/// only arise from configuration loading and from missing required input.
/// Library callers can match on these variants; binary code continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum GaugeError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Input validation ────────────────────────────────────────────────
    #[error("input: {0}")]
    Input(#[from] InputError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid spelling pattern: {0}")]
    Pattern(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Input validation errors ─────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum InputError {
    /// A required candidate name was empty or whitespace-only.
    #[error("required {slot} is empty")]
    EmptyName { slot: &'static str },
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, GaugeError>;
