//! Numeric storage domains of channel values.
//!
//! A [`Range`] names both a validity class (integral or floating) and a
//! width; the same tags double as storage-type tokens in configuration
//! (`--output-type=uw` style), which is why the set is shared between the
//! "declared range" and "concrete storage" axes of a conversion.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A numeric domain and storage width for channel values.
///
/// Digital ranges are unsigned integers (`ub` = 8-bit, `uw` = 16-bit,
/// `ui` = 32-bit); analog ranges are floating point (`f` = single,
/// `d` = double). Integral widths are monotonic (`ub < uw < ui`), which the
/// type resolver relies on when it validates a destination storage type.
///
/// # Example
///
/// ```
/// use chroma_core::Range;
///
/// assert!(Range::Ub.is_integral());
/// assert!(Range::D.is_floating());
/// assert!(Range::Ub.width() < Range::Uw.width());
/// assert_eq!("ui".parse::<Range>().unwrap(), Range::Ui);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Range {
    /// 8-bit unsigned integer (digital).
    Ub,
    /// 16-bit unsigned integer (digital).
    Uw,
    /// 32-bit unsigned integer (digital).
    Ui,
    /// Single-precision float (analog).
    F,
    /// Double-precision float (analog).
    D,
}

impl Range {
    /// All ranges, narrowest-first within each validity class.
    pub const ALL: [Range; 5] = [Range::Ub, Range::Uw, Range::Ui, Range::F, Range::D];

    /// Lowercase token used in configuration and messages.
    #[inline]
    pub const fn token(self) -> &'static str {
        match self {
            Range::Ub => "ub",
            Range::Uw => "uw",
            Range::Ui => "ui",
            Range::F => "f",
            Range::D => "d",
        }
    }

    /// `true` for the digital (unsigned integer) ranges.
    #[inline]
    pub const fn is_integral(self) -> bool {
        matches!(self, Range::Ub | Range::Uw | Range::Ui)
    }

    /// `true` for the analog (floating-point) ranges.
    #[inline]
    pub const fn is_floating(self) -> bool {
        !self.is_integral()
    }

    /// Storage width in bytes.
    ///
    /// Within a validity class, a wider storage type can represent every
    /// value of a narrower range.
    #[inline]
    pub const fn width(self) -> u32 {
        match self {
            Range::Ub => 1,
            Range::Uw => 2,
            Range::Ui => 4,
            Range::F => 4,
            Range::D => 8,
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Range {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ub" => Ok(Range::Ub),
            "uw" => Ok(Range::Uw),
            "ui" => Ok(Range::Ui),
            "f" => Ok(Range::F),
            "d" => Ok(Range::D),
            _ => Err(Error::UnknownRange(s.to_string())),
        }
    }
}
