//! Colorspace definitions and canonical channel field names.
//!
//! This module provides the [`Colorspace`] enum - the closed set of
//! photometric encodings the engine converts between - together with the
//! canonical field names each encoding uses in tagged record streams.
//!
//! # Design
//!
//! Colorspaces are a small closed set used only as a dispatch key, so they
//! are modeled as a plain `Copy` enum rather than marker types: every legal
//! combination with a [`Range`] is checked at runtime by the conversion
//! registry, and every branch of that check is directly testable.
//!
//! # Supported Colorspaces
//!
//! - [`Rgb`](Colorspace::Rgb) - red-green-blue, digital (8-bit) or analog
//!   (floating-point values from 0 to 1)
//! - [`YCbCr`](Colorspace::YCbCr) - digital luma and chroma, 8-bit values
//!   between 0 and 255 minus footroom and headroom
//! - [`YPbPr`](Colorspace::YPbPr) - analog luma and chroma, floating-point
//!
//! # Usage
//!
//! ```
//! use chroma_core::Colorspace;
//!
//! let cs: Colorspace = "ycbcr".parse().unwrap();
//! assert_eq!(cs, Colorspace::YCbCr);
//! assert_eq!(cs.field_names(), ["y", "cb", "cr"]);
//! ```

use crate::error::Error;
use crate::range::Range;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generic channel slot names of the pseudo-colorspace.
///
/// Field binding renames a record's colorspace-specific fields to these
/// positional slots; downstream code never sees `r`/`cb`/`pr` again.
/// Fields already carrying these names bind without renaming.
pub const CHANNEL_FIELDS: [&str; 3] = ["channel0", "channel1", "channel2"];

/// A photometric encoding of a 3-channel pixel record.
///
/// Immutable dispatch key; carries an ordered triple of canonical field
/// names via [`field_names`](Colorspace::field_names). Parsed from and
/// displayed as the lowercase tokens `rgb`, `ycbcr`, `ypbpr`.
///
/// # Example
///
/// ```
/// use chroma_core::Colorspace;
///
/// assert_eq!(Colorspace::Rgb.to_string(), "rgb");
/// assert_eq!(Colorspace::YPbPr.field_names(), ["y", "pb", "pr"]);
/// assert!("cmyk".parse::<Colorspace>().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colorspace {
    /// Red-green-blue. Exists in every numeric range.
    Rgb,
    /// Digital luma and blue/red chroma differences.
    YCbCr,
    /// Analog luma and blue/red chroma differences.
    YPbPr,
}

impl Colorspace {
    /// All supported colorspaces, in declaration order.
    pub const ALL: [Colorspace; 3] = [Colorspace::Rgb, Colorspace::YCbCr, Colorspace::YPbPr];

    /// Lowercase token used in configuration and messages.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Colorspace::Rgb => "rgb",
            Colorspace::YCbCr => "ycbcr",
            Colorspace::YPbPr => "ypbpr",
        }
    }

    /// Ordered canonical field names of this colorspace.
    ///
    /// The order is positional: the first name binds to `channel0`, the
    /// second to `channel1`, the third to `channel2`. The generic
    /// pseudo-colorspace's names are [`CHANNEL_FIELDS`].
    #[inline]
    pub const fn field_names(self) -> [&'static str; 3] {
        match self {
            Colorspace::Rgb => ["r", "g", "b"],
            Colorspace::YCbCr => ["y", "cb", "cr"],
            Colorspace::YPbPr => ["y", "pb", "pr"],
        }
    }

    /// Numeric ranges this colorspace may legally be keyed with.
    ///
    /// The conversion registry must never declare an entry whose key pairs a
    /// colorspace with a range outside this set; a table-wide test enforces
    /// it.
    pub const fn valid_ranges(self) -> &'static [Range] {
        match self {
            Colorspace::Rgb => &[Range::Ub, Range::Uw, Range::Ui, Range::F, Range::D],
            Colorspace::YCbCr => &[Range::Ub, Range::Uw, Range::Ui],
            Colorspace::YPbPr => &[Range::F, Range::D],
        }
    }

    /// The range implied by the colorspace name alone.
    ///
    /// YCbCr sources are 8-bit by definition, so a YCbCr stream needs no
    /// declared input format. RGB and YPbPr exist in several ranges and
    /// imply nothing.
    #[inline]
    pub const fn implied_range(self) -> Option<Range> {
        match self {
            Colorspace::YCbCr => Some(Range::Ub),
            Colorspace::Rgb | Colorspace::YPbPr => None,
        }
    }
}

impl fmt::Display for Colorspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colorspace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rgb" => Ok(Colorspace::Rgb),
            "ycbcr" => Ok(Colorspace::YCbCr),
            "ypbpr" => Ok(Colorspace::YPbPr),
            _ => Err(Error::UnknownColorspace(s.to_string())),
        }
    }
}
