//! Error types for conversion resolution and colorspace inference.
//!
//! Every variant is fatal and raised before any record is processed; the
//! messages carry the offending colorspace/range/type values so a caller
//! can report the exact dimension that failed.

use crate::registry::Encoding;
use chroma_core::{Colorspace, Range};
use thiserror::Error;

/// Result type alias using [`ConvertError`] as the error type.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Conversion resolution error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// No registry entry exists for the requested encoding pair.
    #[error("conversion from colorspace {from} to colorspace {to} is not known")]
    UnsupportedConversion {
        /// Source encoding of the request.
        from: Encoding,
        /// Destination encoding of the request.
        to: Encoding,
    },

    /// The registry declares no destination range for this colorspace pair.
    #[error("conversion from {from} to {to} colorspace is not known")]
    NoDestination {
        /// Source encoding of the request.
        from: Encoding,
        /// Destination colorspace the request named.
        to: Colorspace,
    },

    /// The destination storage type cannot represent the destination range.
    #[error("cannot use {storage} output type for {range} output range")]
    IncompatibleStorageType {
        /// Declared destination range.
        range: Range,
        /// Rejected destination storage type.
        storage: Range,
    },

    /// Field-based colorspace inference failed.
    #[error(transparent)]
    Inference(#[from] InferenceError),

    /// Neither a source colorspace nor field names were given.
    #[error("neither a source colorspace nor field names are given, cannot determine the input colorspace")]
    UnderspecifiedSource,

    /// The source colorspace implies no range and none was declared.
    #[error("an input format must be declared for {space} sources")]
    UndeclaredInputFormat {
        /// Source colorspace lacking an implied range.
        space: Colorspace,
    },
}

/// Field-based colorspace inference error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InferenceError {
    /// No candidate's canonical field names were all present.
    #[error("field names do not match the requested colorspaces: {candidates}")]
    NoMatchingColorspace {
        /// The candidates that were tried.
        candidates: String,
    },

    /// More than one candidate fully matched.
    #[error("contradictory field names match multiple colorspaces: {matches}")]
    AmbiguousColorspace {
        /// The contenders, comma separated.
        matches: String,
    },
}

impl InferenceError {
    pub(crate) fn no_match(candidates: impl Into<String>) -> Self {
        Self::NoMatchingColorspace { candidates: candidates.into() }
    }

    pub(crate) fn ambiguous(matches: impl Into<String>) -> Self {
        Self::AmbiguousColorspace { matches: matches.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_dimension() {
        let err = ConvertError::UnsupportedConversion {
            from: Encoding::new(Colorspace::YPbPr, Range::F),
            to: Encoding::new(Colorspace::YCbCr, Range::Ub),
        };
        let msg = err.to_string();
        assert!(msg.contains("ypbpr/f"));
        assert!(msg.contains("ycbcr/ub"));

        let err = ConvertError::IncompatibleStorageType { range: Range::F, storage: Range::Ub };
        let msg = err.to_string();
        assert!(msg.contains("ub output type"));
        assert!(msg.contains("f output range"));
    }

    #[test]
    fn test_inference_error_wraps() {
        let err: ConvertError = InferenceError::no_match("rgb,ycbcr").into();
        assert!(err.to_string().contains("rgb,ycbcr"));
    }
}
