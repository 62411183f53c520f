//! Affine 3x3 transform with optional pre/post offsets.

use glam::{DMat3, DVec3};

/// An elementary affine conversion in double precision.
///
/// Applies `matrix * (input + before) + after`. Every declared colorspace
/// conversion is one of these; a pure linear transform simply carries zero
/// offset vectors.
///
/// # Example
///
/// ```
/// use chroma_math::{Affine, DVec3};
///
/// let ident = Affine::IDENTITY;
/// let v = DVec3::new(0.25, 0.5, 0.75);
/// assert_eq!(ident.apply(v), v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    /// Offset added to the input before the matrix.
    pub before: DVec3,
    /// The 3x3 transform.
    pub matrix: DMat3,
    /// Offset added to the output after the matrix.
    pub after: DVec3,
}

impl Affine {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        before: DVec3::ZERO,
        matrix: DMat3::IDENTITY,
        after: DVec3::ZERO,
    };

    /// Creates a transform from row-major matrix rows and both offsets.
    #[inline]
    pub fn from_parts(before: [f64; 3], rows: [[f64; 3]; 3], after: [f64; 3]) -> Self {
        Self {
            before: DVec3::from_array(before),
            // glam is column-major; rows go in transposed
            matrix: DMat3::from_cols_array_2d(&rows).transpose(),
            after: DVec3::from_array(after),
        }
    }

    /// Creates a pure linear transform (zero offsets) from row-major rows.
    #[inline]
    pub fn linear(rows: [[f64; 3]; 3]) -> Self {
        Self::from_parts([0.0; 3], rows, [0.0; 3])
    }

    /// Applies the transform to one value triple.
    #[inline]
    pub fn apply(&self, input: DVec3) -> DVec3 {
        self.matrix * (input + self.before) + self.after
    }
}
