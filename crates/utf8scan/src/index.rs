//! Code-point-oriented measurement and slicing of encoded buffers.
//!
//! Offsets and lengths here count code points, never bytes. None of these
//! operations validate their input; malformed bytes are stepped over under
//! the permissive policy (see [`walk`](crate::walk)) so that indexing over
//! dirty buffers degrades gracefully instead of failing.

use alloc::vec::Vec;

use bstr::BString;

use crate::{classify, walk::Steps};

/// Number of code points in `bytes`.
///
/// Counts lead-position bytes, which for well-formed input equals the
/// number of decoded code points. O(n); never fails.
///
/// # Examples
///
/// ```rust
/// assert_eq!(utf8scan::length_in_codepoints(b"Hello"), 5);
/// assert_eq!(utf8scan::length_in_codepoints("שלום".as_bytes()), 4);
/// assert_eq!(utf8scan::length_in_codepoints(b""), 0);
/// ```
#[must_use]
pub fn length_in_codepoints(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| classify::is_lead(b)).count()
}

/// Byte position of the lead byte of the `index`-th code point.
///
/// Returns `None` for a negative index, or when the buffer holds `index` or
/// fewer code points (an index landing exactly at end-of-buffer is out of
/// range). Only the start position is returned; callers that need the full
/// slice derive its width via [`sequence_length`](crate::sequence_length) —
/// a contract carried forward from the legacy design.
///
/// # Examples
///
/// ```rust
/// assert_eq!(utf8scan::char_at(b"Hello", 2), Some(2));
/// assert_eq!(utf8scan::char_at("aé!".as_bytes(), 2), Some(3));
/// assert_eq!(utf8scan::char_at(b"Hello", -1), None);
/// assert_eq!(utf8scan::char_at(b"Hello", 10), None);
/// ```
#[must_use]
pub fn char_at(bytes: &[u8], index: isize) -> Option<usize> {
    let Ok(index) = usize::try_from(index) else {
        return None;
    };
    bytes
        .iter()
        .enumerate()
        .filter(|&(_, &b)| classify::is_lead(b))
        .nth(index)
        .map(|(pos, _)| pos)
}

/// Copy up to `length` code points of `bytes`, starting at code-point
/// offset `start`.
///
/// A negative `start` yields an empty result; a `start` past the last code
/// point clamps silently to empty (no error — legacy behavior). The copy
/// stops after `length` code points or at end-of-buffer, whichever comes
/// first. Malformed bytes advance one byte and count as one code point.
///
/// # Examples
///
/// ```rust
/// use bstr::B;
///
/// assert_eq!(utf8scan::substring(b"Hello World", 6, 5), B("World"));
/// assert_eq!(utf8scan::substring(b"Hello", 2, 10), B("llo"));
/// assert_eq!(utf8scan::substring(b"Hello", -3, 2), B(""));
/// ```
#[must_use]
pub fn substring(bytes: &[u8], start: isize, length: usize) -> BString {
    let mut out = Vec::new();
    let Ok(start) = usize::try_from(start) else {
        return out.into();
    };
    for (pos, step) in Steps::new(bytes).skip(start).take(length) {
        out.extend_from_slice(&bytes[pos..pos + step.width()]);
    }
    out.into()
}
