//! Error types for Bloom

use thiserror::Error;

/// The main error type for Bloom operations
#[derive(Debug, Error)]
pub enum BloomError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Invalid landmark data: {0}")]
    InvalidLandmarks(String),

    #[error("Gesture source unavailable: {0}")]
    GestureUnavailable(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type alias for Bloom operations
pub type Result<T> = std::result::Result<T, BloomError>;

impl From<toml::de::Error> for BloomError {
    fn from(err: toml::de::Error) -> Self {
        BloomError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for BloomError {
    fn from(err: toml::ser::Error) -> Self {
        BloomError::TomlSerError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_error_converts() {
        let err: BloomError = toml::from_str::<toml::Value>("= broken")
            .unwrap_err()
            .into();
        assert!(matches!(err, BloomError::TomlParseError(_)));
    }

    #[test]
    fn range_error_message() {
        let err = BloomError::ValueOutOfRange {
            field: "density_exponent".into(),
            min: 0.0,
            max: 1.0,
            value: 1.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("density_exponent"));
        assert!(msg.contains("1.5"));
    }
}
