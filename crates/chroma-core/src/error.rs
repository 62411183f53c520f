//! Error types for chroma-core operations.
//!
//! Covers token parsing failures for the domain enums. Conversion-time and
//! stream-time failures live in the crates that produce them
//! (`chroma-convert`, `chroma-stream`).

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while parsing domain tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The token names no supported colorspace.
    #[error("unknown colorspace '{0}' (expected rgb, ycbcr or ypbpr)")]
    UnknownColorspace(String),

    /// The token names no supported range or storage type.
    #[error("unknown range '{0}' (expected ub, uw, ui, f or d)")]
    UnknownRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_token() {
        let err = "hsv".parse::<crate::Colorspace>().unwrap_err();
        assert_eq!(err, Error::UnknownColorspace("hsv".into()));
        assert!(err.to_string().contains("hsv"));

        let err = "q".parse::<crate::Range>().unwrap_err();
        assert!(err.to_string().contains("'q'"));
    }
}
