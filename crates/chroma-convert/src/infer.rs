//! Field-based colorspace inference and channel binding.
//!
//! A tagged record stream declares its layout as a list of field names. The
//! channel fields may carry colorspace-specific names (`r,g,b` / `y,cb,cr` /
//! `y,pb,pr`), the generic slot names (`channel0..2`), or sit between
//! unrelated fields (timestamps, labels). This module elects the single
//! colorspace whose canonical names are all present and rewrites them to
//! the generic slots, after which the rest of the engine is
//! colorspace-agnostic.
//!
//! Binding happens once per stream, before the first record is read.

use crate::error::InferenceError;
use chroma_core::{Colorspace, CHANNEL_FIELDS};

/// `true` when every name in `names` occurs somewhere in `fields`.
///
/// Membership is order-independent; partial overlap is not a match.
fn contains_all(fields: &[String], names: &[&str; 3]) -> bool {
    names.iter().all(|name| fields.iter().any(|field| field == name))
}

fn join(spaces: &[Colorspace]) -> String {
    spaces.iter().map(|c| c.name()).collect::<Vec<_>>().join(",")
}

/// Elects the single candidate whose canonical field names all appear in
/// `fields`.
///
/// Zero full matches fail with
/// [`NoMatchingColorspace`](InferenceError::NoMatchingColorspace); more
/// than one with [`AmbiguousColorspace`](InferenceError::AmbiguousColorspace)
/// listing the contenders.
///
/// # Example
///
/// ```
/// use chroma_convert::infer::infer;
/// use chroma_core::Colorspace;
///
/// let fields: Vec<String> =
///     ["name", "r", "g", "b", "t"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(infer(&fields, &Colorspace::ALL).unwrap(), Colorspace::Rgb);
/// ```
pub fn infer(fields: &[String], candidates: &[Colorspace]) -> Result<Colorspace, InferenceError> {
    let matches: Vec<Colorspace> = candidates
        .iter()
        .copied()
        .filter(|c| contains_all(fields, &c.field_names()))
        .collect();
    match matches.as_slice() {
        [] => Err(InferenceError::no_match(join(candidates))),
        [single] => Ok(*single),
        several => Err(InferenceError::ambiguous(join(several))),
    }
}

/// Renames `space`'s canonical fields to the generic channel slots.
///
/// The rename is positional: the first canonical name becomes `channel0`
/// and so on. Fields not belonging to the colorspace are left untouched.
pub fn rename_to_channels(fields: &mut [String], space: Colorspace) {
    let own = space.field_names();
    for field in fields.iter_mut() {
        if let Some(slot) = own.iter().position(|name| field == name) {
            *field = CHANNEL_FIELDS[slot].to_string();
        }
    }
}

/// Validates a user-declared source colorspace against actual field names.
///
/// Accepts either the declared colorspace's canonical names (which are
/// then renamed to the generic slots) or the generic slot names themselves
/// (left as-is). Fields matching both are contradictory; fields matching
/// neither do not carry the declared colorspace.
pub fn bind_declared(
    fields: &mut [String],
    declared: Colorspace,
) -> Result<(), InferenceError> {
    let own = contains_all(fields, &declared.field_names());
    let generic = contains_all(fields, &CHANNEL_FIELDS);
    match (own, generic) {
        (true, true) => Err(InferenceError::ambiguous(format!(
            "{declared} and generic channel names"
        ))),
        (true, false) => {
            rename_to_channels(fields, declared);
            Ok(())
        }
        (false, true) => Ok(()),
        (false, false) => Err(InferenceError::no_match(format!(
            "{declared} (or generic channel names)"
        ))),
    }
}
