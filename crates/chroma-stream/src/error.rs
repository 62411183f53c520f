//! Error types for stream execution.
//!
//! Every failure is fatal and aborts the stream: a malformed record signals
//! upstream corruption and is never replaced with a default, and an I/O
//! failure propagates unchanged. Output flushed before the failure remains
//! valid and is not rolled back.

use chroma_core::Range;
use chroma_convert::ConvertError;
use thiserror::Error;

/// Result type alias using [`StreamError`] as the error type.
pub type Result<T> = std::result::Result<T, StreamError>;

/// Stream execution error.
#[derive(Debug, Error)]
pub enum StreamError {
    /// A record failed to parse into the declared storage type.
    ///
    /// Raised by source collaborators; aborts the stream rather than
    /// substituting a default value.
    #[error("malformed record {index}: {reason}")]
    MalformedRecord {
        /// Zero-based index of the offending record.
        index: u64,
        /// What failed to parse.
        reason: String,
    },

    /// The sink's storage type does not match the resolved conversion.
    ///
    /// Detected before the first record is read.
    #[error("sink stores {got} records but the conversion was resolved for {expected} storage")]
    StorageMismatch {
        /// Storage type the conversion was validated against.
        expected: Range,
        /// Storage type the sink was instantiated with.
        got: Range,
    },

    /// Collaborator read or write failure, propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Conversion resolution failure surfaced through a stream API.
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

impl StreamError {
    /// Creates a [`StreamError::MalformedRecord`] error.
    #[inline]
    pub fn malformed(index: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRecord { index, reason: reason.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message() {
        let err = StreamError::malformed(7, "expected 3 numeric channels");
        let msg = err.to_string();
        assert!(msg.contains("record 7"));
        assert!(msg.contains("numeric channels"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: StreamError = io.into();
        assert!(matches!(err, StreamError::Io(_)));
    }
}
