use thiserror::Error;

/// Errors at the engine's JSON boundary.
///
/// The sizing computation itself is total: missing inputs are defaulted and
/// out-of-range values are clamped, so only (de)serialization can fail.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("malformed sizing request: {0}")]
    Request(#[from] serde_json::Error),

    #[error("failed to encode sizing result: {0}")]
    Encode(serde_json::Error),
}
