//! Externally-visible conversion configuration.
//!
//! A [`ConversionRequest`] carries exactly what the engine depends on from
//! the outside world: the mandatory destination colorspace, either an
//! explicit source colorspace or a field-name list to infer it from, and
//! the destination storage-type token. [`prepare`](ConversionRequest::prepare)
//! turns it into a bound conversion plus the bound field layout, or fails
//! with the precise dimension that was wrong.

use crate::error::{ConvertError, Result};
use crate::infer;
use crate::registry::{destination_range, Encoding};
use crate::resolve::{resolve, BoundConversion};
use chroma_core::{Colorspace, Range, CHANNEL_FIELDS};
use serde::{Deserialize, Serialize};

/// A conversion request as configured by the caller.
///
/// The source may be given two ways: `from` names the colorspace directly
/// (with `fields` optionally validated against it), or `fields` alone lets
/// the engine infer the colorspace from the canonical channel names it
/// finds. One of the two must be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Explicit source colorspace, if declared.
    #[serde(default)]
    pub from: Option<Colorspace>,

    /// Field names of the source records, if declared.
    #[serde(default)]
    pub fields: Option<Vec<String>>,

    /// Destination colorspace. Mandatory.
    pub to: Colorspace,

    /// Destination storage type. Mandatory; one of the five range tags.
    pub output_type: Range,
}

/// The outcome of preparing a request: everything a stream needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedConversion {
    /// The resolved, storage-validated conversion.
    pub bound: BoundConversion,
    /// The elected source colorspace.
    pub from: Colorspace,
    /// The field layout with channel fields bound to the generic slots.
    pub fields: Vec<String>,
}

impl ConversionRequest {
    /// Elects the source colorspace, binds fields, resolves the conversion.
    ///
    /// `input_range` declares the numeric range of the source records; when
    /// absent it falls back to the range implied by the source colorspace
    /// name (YCbCr sources are 8-bit by definition). The destination range
    /// is whatever the registry declares for the elected source encoding
    /// and the requested destination colorspace.
    ///
    /// # Example
    ///
    /// ```
    /// use chroma_convert::ConversionRequest;
    /// use chroma_core::{Colorspace, Range};
    ///
    /// let request = ConversionRequest {
    ///     from: None,
    ///     fields: Some(vec!["name".into(), "y".into(), "cb".into(), "cr".into()]),
    ///     to: Colorspace::Rgb,
    ///     output_type: Range::Ub,
    /// };
    /// let prepared = request.prepare(None).unwrap();
    /// assert_eq!(prepared.from, Colorspace::YCbCr);
    /// assert_eq!(prepared.fields[1], "channel0");
    /// ```
    pub fn prepare(&self, input_range: Option<Range>) -> Result<PreparedConversion> {
        let (from, fields) = match (self.from, &self.fields) {
            (Some(from), Some(fields)) => {
                let mut fields = fields.clone();
                infer::bind_declared(&mut fields, from)?;
                (from, fields)
            }
            (Some(from), None) => {
                let fields = CHANNEL_FIELDS.iter().map(|s| s.to_string()).collect();
                (from, fields)
            }
            (None, Some(fields)) => {
                let mut fields = fields.clone();
                let from = infer::infer(&fields, &Colorspace::ALL)?;
                infer::rename_to_channels(&mut fields, from);
                (from, fields)
            }
            (None, None) => return Err(ConvertError::UnderspecifiedSource),
        };

        let input_range = input_range
            .or(from.implied_range())
            .ok_or(ConvertError::UndeclaredInputFormat { space: from })?;
        let source = Encoding::new(from, input_range);
        let target_range = destination_range(source, self.to)
            .ok_or(ConvertError::NoDestination { from: source, to: self.to })?;
        let bound = resolve(source, Encoding::new(self.to, target_range), self.output_type)?;

        tracing::debug!(
            from = %source,
            to = %bound.target(),
            fields = %fields.join(","),
            "prepared conversion request"
        );
        Ok(PreparedConversion { bound, from, fields })
    }
}
