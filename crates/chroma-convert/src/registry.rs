//! Fixed table of elementary colorspace conversions.
//!
//! The registry maps `(source encoding, destination encoding)` keys to
//! affine transforms in double precision. It is a hand-curated,
//! intentionally partial table: an absent key means the conversion is
//! unsupported, never identity and never zero. Extending support means
//! adding an entry here; dispatch logic never changes.
//!
//! # Lifecycle
//!
//! The table is a process-wide `static` built at compile time - there is no
//! lazy population step and no concurrent writer, so any number of
//! pipelines may consult it without locking.
//!
//! # Constants
//!
//! The matrices are the literal constants of the digital video standards
//! they come from. In particular the digital YCbCr<->RGB matrices are not
//! exact inverses of one another; that asymmetry is part of the observable
//! contract and must not be "simplified" toward mathematical symmetry.

use chroma_core::{Colorspace, Range};
use chroma_math::Affine;
use std::fmt;

/// One half of a conversion key: a colorspace in a concrete numeric range.
///
/// Displayed as `space/range`, e.g. `rgb/ub` or `ypbpr/f`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Encoding {
    /// Photometric encoding.
    pub space: Colorspace,
    /// Numeric range the channel values live in.
    pub range: Range,
}

impl Encoding {
    /// Creates an encoding key.
    #[inline]
    pub const fn new(space: Colorspace, range: Range) -> Self {
        Self { space, range }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.space, self.range)
    }
}

/// An elementary conversion entry: key pair plus affine transform data.
///
/// The transform applies as `matrix * (input + before) + after`, all in
/// double precision. Entries are immutable; [`affine`](Conversion::affine)
/// materializes the math type at bind time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    from: Encoding,
    to: Encoding,
    before: [f64; 3],
    matrix: [[f64; 3]; 3],
    after: [f64; 3],
}

impl Conversion {
    /// Source encoding of this entry.
    #[inline]
    pub const fn source(&self) -> Encoding {
        self.from
    }

    /// Destination encoding of this entry.
    #[inline]
    pub const fn target(&self) -> Encoding {
        self.to
    }

    /// Materializes the entry's affine transform.
    pub fn affine(&self) -> Affine {
        Affine::from_parts(self.before, self.matrix, self.after)
    }
}

const fn enc(space: Colorspace, range: Range) -> Encoding {
    Encoding::new(space, range)
}

const NONE: [f64; 3] = [0.0, 0.0, 0.0];

const IDENTITY: [[f64; 3]; 3] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

// ITU-R BT.601 analog luma/chroma differences from analog RGB.
const RGB_TO_YPBPR: [[f64; 3]; 3] = [
    [0.299, 0.587, 0.114],
    [-0.168736, -0.331264, 0.5],
    [0.5, -0.418688, -0.081312],
];

// Digital YCbCr from analog RGB: scaled to footroom/headroom, offset 16/128.
const RGB_ANALOG_TO_YCBCR: [[f64; 3]; 3] = [
    [65.481, 128.553, 24.966],
    [-37.797, -74.203, 112.0],
    [112.0, -93.786, -18.214],
];

// Digital YCbCr from digital RGB; the 1/256 scaling is part of the constants.
const RGB_DIGITAL_TO_YCBCR: [[f64; 3]; 3] = [
    [65.738 / 256.0, 129.057 / 256.0, 25.064 / 256.0],
    [-37.945 / 256.0, -74.494 / 256.0, 112.439 / 256.0],
    [112.439 / 256.0, -94.154 / 256.0, -18.258 / 256.0],
];

// Digital RGB from digital YCbCr; not the exact inverse of the above.
const YCBCR_TO_RGB: [[f64; 3]; 3] = [
    [255.0 / 219.0, 0.0, 255.0 / 112.0 * 0.701],
    [
        255.0 / 219.0,
        -255.0 / 112.0 * 0.886 * 0.114 / 0.587,
        -255.0 / 112.0 * 0.701 * 0.299 / 0.587,
    ],
    [255.0 / 219.0, 255.0 / 112.0 * 0.886, 0.0],
];

const DIGITAL_OFFSET: [f64; 3] = [16.0, 128.0, 128.0];
const DIGITAL_ONSET: [f64; 3] = [-16.0, -128.0, -128.0];

static CONVERSIONS: [Conversion; 7] = [
    Conversion {
        from: enc(Colorspace::Rgb, Range::Ub),
        to: enc(Colorspace::Rgb, Range::Ub),
        before: NONE,
        matrix: IDENTITY,
        after: NONE,
    },
    Conversion {
        from: enc(Colorspace::Rgb, Range::F),
        to: enc(Colorspace::YPbPr, Range::F),
        before: NONE,
        matrix: RGB_TO_YPBPR,
        after: NONE,
    },
    Conversion {
        from: enc(Colorspace::Rgb, Range::D),
        to: enc(Colorspace::YPbPr, Range::D),
        before: NONE,
        matrix: RGB_TO_YPBPR,
        after: NONE,
    },
    Conversion {
        from: enc(Colorspace::Rgb, Range::F),
        to: enc(Colorspace::YCbCr, Range::Ub),
        before: NONE,
        matrix: RGB_ANALOG_TO_YCBCR,
        after: DIGITAL_OFFSET,
    },
    Conversion {
        from: enc(Colorspace::Rgb, Range::D),
        to: enc(Colorspace::YCbCr, Range::Ub),
        before: NONE,
        matrix: RGB_ANALOG_TO_YCBCR,
        after: DIGITAL_OFFSET,
    },
    Conversion {
        from: enc(Colorspace::Rgb, Range::Ub),
        to: enc(Colorspace::YCbCr, Range::Ub),
        before: NONE,
        matrix: RGB_DIGITAL_TO_YCBCR,
        after: DIGITAL_OFFSET,
    },
    Conversion {
        from: enc(Colorspace::YCbCr, Range::Ub),
        to: enc(Colorspace::Rgb, Range::Ub),
        before: DIGITAL_ONSET,
        matrix: YCBCR_TO_RGB,
        after: NONE,
    },
];

/// Looks up the elementary conversion for an encoding pair.
///
/// Returns `None` for any undeclared pair - the caller decides whether that
/// is an error; the registry only answers "known" or "not known".
pub fn lookup(from: Encoding, to: Encoding) -> Option<&'static Conversion> {
    CONVERSIONS.iter().find(|c| c.from == from && c.to == to)
}

/// Finds the destination range the table declares for a colorspace pair.
///
/// External configuration names only the destination *colorspace*; the
/// destination range follows from the table. Returns `None` when no entry
/// matches, or when several entries disagree on the range (which would make
/// the request ambiguous - the table currently never does).
pub fn destination_range(from: Encoding, to_space: Colorspace) -> Option<Range> {
    let mut found: Option<Range> = None;
    for c in CONVERSIONS.iter().filter(|c| c.from == from && c.to.space == to_space) {
        match found {
            None => found = Some(c.to.range),
            Some(range) if range != c.to.range => {
                tracing::warn!(
                    %from, to = %to_space,
                    "registry declares multiple destination ranges for one colorspace pair"
                );
                return None;
            }
            Some(_) => {}
        }
    }
    found
}

/// Iterates over all declared conversion key pairs.
pub fn supported() -> impl Iterator<Item = (Encoding, Encoding)> {
    CONVERSIONS.iter().map(|c| (c.from, c.to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chroma_math::DVec3;

    #[test]
    fn test_declared_pairs_present() {
        assert!(lookup(
            enc(Colorspace::Rgb, Range::Ub),
            enc(Colorspace::Rgb, Range::Ub)
        )
        .is_some());
        assert!(lookup(
            enc(Colorspace::Rgb, Range::D),
            enc(Colorspace::YPbPr, Range::D)
        )
        .is_some());
        assert!(lookup(
            enc(Colorspace::YCbCr, Range::Ub),
            enc(Colorspace::Rgb, Range::Ub)
        )
        .is_some());
    }

    #[test]
    fn test_undeclared_pairs_absent() {
        // absent means unsupported, never identity
        assert!(lookup(
            enc(Colorspace::YPbPr, Range::F),
            enc(Colorspace::YCbCr, Range::Ub)
        )
        .is_none());
        assert!(lookup(
            enc(Colorspace::YPbPr, Range::F),
            enc(Colorspace::YPbPr, Range::F)
        )
        .is_none());
        assert!(lookup(
            enc(Colorspace::Rgb, Range::Uw),
            enc(Colorspace::YCbCr, Range::Ub)
        )
        .is_none());
    }

    #[test]
    fn test_keys_consistent_with_colorspace_domains() {
        for (from, to) in supported() {
            assert!(
                from.space.valid_ranges().contains(&from.range),
                "bad source key {from}"
            );
            assert!(
                to.space.valid_ranges().contains(&to.range),
                "bad destination key {to}"
            );
        }
    }

    #[test]
    fn test_identity_entry() {
        let c = lookup(
            enc(Colorspace::Rgb, Range::Ub),
            enc(Colorspace::Rgb, Range::Ub),
        )
        .unwrap();
        assert_eq!(c.affine(), Affine::IDENTITY);
    }

    #[test]
    fn test_analog_ypbpr_known_values() {
        let c = lookup(
            enc(Colorspace::Rgb, Range::F),
            enc(Colorspace::YPbPr, Range::F),
        )
        .unwrap();
        let out = c.affine().apply(DVec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(out.x, 0.299, max_relative = 1e-12);
        assert_relative_eq!(out.y, -0.168736, max_relative = 1e-12);
        assert_relative_eq!(out.z, 0.5, max_relative = 1e-12);
    }

    #[test]
    fn test_digital_matrices_are_not_inverses() {
        let fwd = lookup(
            enc(Colorspace::Rgb, Range::Ub),
            enc(Colorspace::YCbCr, Range::Ub),
        )
        .unwrap()
        .affine();
        let back = lookup(
            enc(Colorspace::YCbCr, Range::Ub),
            enc(Colorspace::Rgb, Range::Ub),
        )
        .unwrap()
        .affine();
        let product = (back.matrix * fwd.matrix).to_cols_array_2d();
        let mut off_diagonal = 0.0f64;
        for c in 0..3 {
            for r in 0..3 {
                if r != c {
                    off_diagonal += product[c][r].abs();
                }
            }
        }
        // off-diagonal terms survive; the standards' constants do not cancel
        assert!(off_diagonal > 1e-6);
    }

    #[test]
    fn test_destination_range() {
        assert_eq!(
            destination_range(enc(Colorspace::Rgb, Range::Ub), Colorspace::YCbCr),
            Some(Range::Ub)
        );
        assert_eq!(
            destination_range(enc(Colorspace::Rgb, Range::F), Colorspace::YPbPr),
            Some(Range::F)
        );
        assert_eq!(
            destination_range(enc(Colorspace::YPbPr, Range::F), Colorspace::YCbCr),
            None
        );
    }

    #[test]
    fn test_supported_count() {
        assert_eq!(supported().count(), 7);
    }
}
