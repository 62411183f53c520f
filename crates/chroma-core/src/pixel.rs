//! Pixel records and the channel storage axis.
//!
//! This module provides the generic 3-channel record the streaming pipeline
//! moves around, and the [`Channel`] trait describing the concrete storage
//! types channel values may live in.
//!
//! # Design
//!
//! A [`Pixel`] is positional: `channel0..channel2` carry whatever the bound
//! colorspace put there, and the pipeline never interprets them. All
//! conversion math happens in double precision; widening a record to `f64`
//! and narrowing the result back are explicit copies through
//! [`Pixel::to_f64`] / [`Pixel::from_f64`] - there is no in-place
//! reinterpretation of storage.
//!
//! # Rounding
//!
//! Integral [`Channel`] implementations round half away from zero
//! ([`f64::round`] semantics, matching the C `round` family) and saturate at
//! the type bounds on the final cast.
//!
//! # Usage
//!
//! ```
//! use chroma_core::{Channel, Pixel, Range};
//!
//! let p: Pixel<u8> = Pixel::new(16, 128, 128);
//! let wide = p.to_f64();
//! assert_eq!(wide, [16.0, 128.0, 128.0]);
//!
//! let back: Pixel<u8> = Pixel::from_f64([15.5, 128.2, 255.9]);
//! assert_eq!(back, Pixel::new(16, 128, 255));
//! assert_eq!(<u8 as Channel>::RANGE, Range::Ub);
//! ```

use crate::range::Range;
use std::fmt;

/// Trait for channel storage types.
///
/// Implemented for exactly the five primitives the [`Range`] tags map to:
/// `u8`, `u16`, `u32`, `f32`, `f64`. The associated [`RANGE`](Channel::RANGE)
/// tag lets runtime code compare a generic storage parameter against a
/// validated storage token without reflection.
pub trait Channel:
    Copy + Clone + Default + PartialOrd + Send + Sync + fmt::Debug + 'static
{
    /// Storage tag corresponding to this primitive.
    const RANGE: Range;

    /// Widens to double precision, exactly for every integral value.
    fn to_f64(self) -> f64;

    /// Narrows from double precision.
    ///
    /// Integral implementations round half away from zero and saturate at
    /// the type bounds; floating implementations keep IEEE narrowing.
    fn from_f64(v: f64) -> Self;
}

impl Channel for u8 {
    const RANGE: Range = Range::Ub;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v.round() as u8
    }
}

impl Channel for u16 {
    const RANGE: Range = Range::Uw;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v.round() as u16
    }
}

impl Channel for u32 {
    const RANGE: Range = Range::Ui;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v.round() as u32
    }
}

impl Channel for f32 {
    const RANGE: Range = Range::F;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

impl Channel for f64 {
    const RANGE: Range = Range::D;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}

/// A 3-channel pixel record of concrete storage type `T`.
///
/// Channel order is positional. The fields are deliberately not named after
/// any colorspace - a `Pixel` may carry rgb, ycbcr or ypbpr values depending
/// on what field binding elected upstream.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Pixel<T> {
    /// First channel (r / y / y after binding).
    pub channel0: T,
    /// Second channel (g / cb / pb after binding).
    pub channel1: T,
    /// Third channel (b / cr / pr after binding).
    pub channel2: T,
}

impl<T: Channel> Pixel<T> {
    /// Creates a pixel from three channel values.
    #[inline]
    pub const fn new(channel0: T, channel1: T, channel2: T) -> Self {
        Self { channel0, channel1, channel2 }
    }

    /// Creates a pixel from a positional array.
    #[inline]
    pub const fn from_array(c: [T; 3]) -> Self {
        let [channel0, channel1, channel2] = c;
        Self::new(channel0, channel1, channel2)
    }

    /// Returns the channels as a positional array.
    #[inline]
    pub const fn to_array(self) -> [T; 3] {
        [self.channel0, self.channel1, self.channel2]
    }

    /// Widens all channels to double precision.
    #[inline]
    pub fn to_f64(self) -> [f64; 3] {
        [
            self.channel0.to_f64(),
            self.channel1.to_f64(),
            self.channel2.to_f64(),
        ]
    }

    /// Narrows a double-precision triple into storage type `T`.
    ///
    /// Rounds half away from zero for integral `T`; see [`Channel::from_f64`].
    #[inline]
    pub fn from_f64(c: [f64; 3]) -> Self {
        Self::new(T::from_f64(c[0]), T::from_f64(c[1]), T::from_f64(c[2]))
    }
}
