use thiserror::Error;

/// Error type for invalid configuration or input.
///
/// Malformed numeric input is never an error: it is coerced to zero during
/// parsing (see [`crate::input`]).
#[derive(Error, Debug)]
pub enum FootprintError {
    #[error("Unknown {field} '{value}'. Expected one of: {expected}")]
    UnknownKind {
        field: &'static str,
        value: String,
        expected: String,
    },
    #[error("Coefficient {name} must be finite and non-negative, got {value}")]
    InvalidCoefficient { name: String, value: f64 },
    #[error("Could not parse configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type for `Result<T, FootprintError>`.
pub type FootprintResult<T> = Result<T, FootprintError>;
