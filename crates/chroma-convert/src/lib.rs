//! # chroma-convert
//!
//! Runtime dispatch for elementary colorspace conversions.
//!
//! This crate reconciles the three axes of a conversion request -
//! colorspace, numeric range, storage type - behind a single contract:
//! every supported conversion is an affine 3x3 transform in double
//! precision, and every request either binds to one or fails before any
//! record is processed.
//!
//! # Components
//!
//! - [`registry`] - the fixed table of elementary conversions, keyed by
//!   `(source encoding, destination encoding)`
//! - [`resolve`](resolve()) - validates a destination storage type against
//!   its declared range and binds a registry entry into a
//!   [`BoundConversion`]
//! - [`infer`] - field-name based colorspace inference and channel binding
//! - [`ConversionRequest`] - the externally-visible configuration surface
//!
//! # Example
//!
//! ```
//! use chroma_convert::{resolve, Encoding};
//! use chroma_core::{Colorspace, Range};
//!
//! let bound = resolve(
//!     Encoding::new(Colorspace::Rgb, Range::Ub),
//!     Encoding::new(Colorspace::YCbCr, Range::Ub),
//!     Range::Ub,
//! )
//! .unwrap();
//! let ycbcr = bound.apply([128.0, 128.0, 128.0]);
//! assert!((ycbcr[1] - 128.0).abs() < 0.5);
//! ```
//!
//! # Errors
//!
//! All failures are fatal and pre-processing: an absent registry entry, an
//! incompatible storage type, or unresolvable field names abort a request
//! before the first record is read. Misconfiguration cannot be healed by
//! retry.

#![warn(missing_docs)]

pub mod error;
pub mod infer;
pub mod registry;
mod request;
mod resolve;

pub use error::{ConvertError, InferenceError, Result};
pub use registry::{destination_range, lookup, supported, Conversion, Encoding};
pub use request::{ConversionRequest, PreparedConversion};
pub use resolve::{resolve, BoundConversion};
