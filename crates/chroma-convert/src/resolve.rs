//! Type resolver: validate a request, bind a registry entry.
//!
//! Resolution is two-staged on purpose: first the destination storage type
//! is checked against the declared destination range, then the registry
//! entry's transform is bound. The split keeps the elementary math
//! colorspace-agnostic while making precision-losing requests (say, analog
//! luma written into an 8-bit buffer without the explicit digital
//! transform) fail up front, before any record is read.

use crate::error::{ConvertError, Result};
use crate::registry::{lookup, Encoding};
use chroma_core::Range;
use chroma_math::{Affine, DVec3};

/// A resolved, runtime-checked conversion.
///
/// Binds a registry entry's affine transform to the double-precision
/// input/output contract: [`apply`](BoundConversion::apply) maps one value
/// triple per call. A bound conversion holds no cross-record state and is
/// cheap to clone; concurrent pipelines share only the immutable registry
/// behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundConversion {
    affine: Affine,
    source: Encoding,
    target: Encoding,
    storage: Range,
}

impl BoundConversion {
    /// Converts one record's channels, in double precision.
    ///
    /// Rounding into the destination storage type is the pipeline's job;
    /// the bound conversion itself is exact affine math.
    #[inline]
    pub fn apply(&self, channels: [f64; 3]) -> [f64; 3] {
        self.affine.apply(DVec3::from_array(channels)).to_array()
    }

    /// Source encoding this conversion was resolved for.
    #[inline]
    pub fn source(&self) -> Encoding {
        self.source
    }

    /// Destination encoding this conversion was resolved for.
    #[inline]
    pub fn target(&self) -> Encoding {
        self.target
    }

    /// The validated destination storage type.
    #[inline]
    pub fn storage(&self) -> Range {
        self.storage
    }
}

/// `true` when `storage` can represent every value of `range`.
///
/// An integral range accepts any integral storage of equal-or-greater
/// width, or any floating storage; a floating range accepts only floating
/// storage of equal-or-greater width.
fn storage_fits(range: Range, storage: Range) -> bool {
    match (range.is_integral(), storage.is_integral()) {
        (true, true) => storage.width() >= range.width(),
        (true, false) => true,
        (false, true) => false,
        (false, false) => storage.width() >= range.width(),
    }
}

/// Resolves a conversion request into a [`BoundConversion`].
///
/// 1. Looks up the registry entry for `(from, to)`; an absent key fails
///    with [`ConvertError::UnsupportedConversion`].
/// 2. Validates `storage` against `to.range`; a storage type that cannot
///    represent the range fails with
///    [`ConvertError::IncompatibleStorageType`], naming both dimensions.
/// 3. Binds the entry's matrix and offsets.
///
/// # Example
///
/// ```
/// use chroma_convert::{resolve, Encoding};
/// use chroma_core::{Colorspace, Range};
///
/// // digital ycbcr may be widened into u16 storage
/// let from = Encoding::new(Colorspace::Rgb, Range::Ub);
/// let to = Encoding::new(Colorspace::YCbCr, Range::Ub);
/// assert!(resolve(from, to, Range::Uw).is_ok());
///
/// // but analog ypbpr never fits an integer
/// let from = Encoding::new(Colorspace::Rgb, Range::F);
/// let to = Encoding::new(Colorspace::YPbPr, Range::F);
/// assert!(resolve(from, to, Range::Ub).is_err());
/// ```
pub fn resolve(from: Encoding, to: Encoding, storage: Range) -> Result<BoundConversion> {
    let conversion = lookup(from, to).ok_or(ConvertError::UnsupportedConversion { from, to })?;
    if !storage_fits(to.range, storage) {
        return Err(ConvertError::IncompatibleStorageType { range: to.range, storage });
    }
    tracing::debug!(%from, %to, %storage, "bound conversion");
    Ok(BoundConversion {
        affine: conversion.affine(),
        source: from,
        target: to,
        storage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::Colorspace;

    fn enc(space: Colorspace, range: Range) -> Encoding {
        Encoding::new(space, range)
    }

    #[test]
    fn test_storage_validity_matrix() {
        // integral ranges: equal-or-wider integrals, any floats
        for range in [Range::Ub, Range::Uw, Range::Ui] {
            for storage in [Range::Ub, Range::Uw, Range::Ui] {
                assert_eq!(
                    storage_fits(range, storage),
                    storage.width() >= range.width(),
                    "{range} -> {storage}"
                );
            }
            assert!(storage_fits(range, Range::F));
            assert!(storage_fits(range, Range::D));
        }
        // floating ranges: never integral storage
        for range in [Range::F, Range::D] {
            for storage in [Range::Ub, Range::Uw, Range::Ui] {
                assert!(!storage_fits(range, storage), "{range} -> {storage}");
            }
        }
        // floating widths are enforced in both directions
        assert!(storage_fits(Range::F, Range::F));
        assert!(storage_fits(Range::F, Range::D));
        assert!(!storage_fits(Range::D, Range::F));
        assert!(storage_fits(Range::D, Range::D));
    }

    #[test]
    fn test_unsupported_pair_fails_first() {
        let err = resolve(
            enc(Colorspace::YPbPr, Range::F),
            enc(Colorspace::YCbCr, Range::Ub),
            Range::Ub,
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedConversion { .. }));
    }

    #[test]
    fn test_incompatible_storage_reported_explicitly() {
        let err = resolve(
            enc(Colorspace::Rgb, Range::F),
            enc(Colorspace::YPbPr, Range::F),
            Range::Ui,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConvertError::IncompatibleStorageType { range: Range::F, storage: Range::Ui }
        );
    }

    #[test]
    fn test_digital_destination_accepts_all_wider_storage() {
        let from = enc(Colorspace::Rgb, Range::Ub);
        let to = enc(Colorspace::YCbCr, Range::Ub);
        for storage in Range::ALL {
            let bound = resolve(from, to, storage).unwrap();
            assert_eq!(bound.storage(), storage);
            assert_eq!(bound.source(), from);
            assert_eq!(bound.target(), to);
        }
    }

    #[test]
    fn test_bound_conversion_applies_entry_math() {
        let bound = resolve(
            enc(Colorspace::Rgb, Range::Ub),
            enc(Colorspace::Rgb, Range::Ub),
            Range::Ub,
        )
        .unwrap();
        assert_eq!(bound.apply([12.0, 34.0, 56.0]), [12.0, 34.0, 56.0]);
    }
}
