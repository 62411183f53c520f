//! # chroma-math
//!
//! Double-precision math for elementary colorspace conversions.
//!
//! This crate wraps [`glam`]'s `f64` types with the one construct the
//! conversion engine needs: the [`Affine`] transform
//! `output = matrix * (input + before) + after`.
//!
//! # Design
//!
//! All matrix operations assume **row-major** construction and **column
//! vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! glam stores matrices column-major, so the row-major constructors
//! transpose on the way in; callers only ever see rows, which is how
//! conversion matrices are written in the standards they come from.
//!
//! # Usage
//!
//! ```
//! use chroma_math::{Affine, DVec3};
//!
//! // Analog RGB -> YPbPr
//! let m = Affine::linear([
//!     [0.299, 0.587, 0.114],
//!     [-0.168736, -0.331264, 0.5],
//!     [0.5, -0.418688, -0.081312],
//! ]);
//! let ypbpr = m.apply(DVec3::new(1.0, 0.0, 0.0));
//! assert!((ypbpr.x - 0.299).abs() < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - vector/matrix arithmetic (`DMat3`, `DVec3`)

#![warn(missing_docs)]

mod affine;

pub use affine::Affine;

/// Re-export of the glam f64 types used throughout the engine.
pub use glam::{DMat3, DVec3};
