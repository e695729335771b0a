use core::cmp::Ordering;

use crate::{
    error::Utf8Error,
    walk::decode_strict,
};

/// Order two encoded buffers by their decoded code-point sequences.
///
/// Decodes one code point from each side in lockstep; the first differing
/// pair decides by numeric code-point value. When one side runs out first
/// the side with remaining bytes is the greater; the remainder of the
/// longer side is not decoded. This is total lexicographic ordering over
/// decoded sequences — the implementation must not fall back to byte-wise
/// comparison, even though the two coincide for well-formed UTF-8.
///
/// # Errors
///
/// Returns the classified [`Utf8Error`] of the first malformed sequence
/// reached in lockstep, checking side `a` before side `b` at each step; an
/// ordering is never reported for input that failed to decode.
///
/// # Examples
///
/// ```rust
/// use core::cmp::Ordering;
///
/// assert_eq!(utf8scan::compare(b"Hi", b"Hello"), Ok(Ordering::Greater));
/// assert_eq!(utf8scan::compare(b"Hello", b"Hello"), Ok(Ordering::Equal));
/// assert_eq!(utf8scan::compare(b"He", b"Hello"), Ok(Ordering::Less));
/// assert!(utf8scan::compare(&[0xFF], b"a").is_err());
/// ```
pub fn compare(a: &[u8], b: &[u8]) -> Result<Ordering, Utf8Error> {
    let mut pa = 0;
    let mut pb = 0;
    loop {
        match (pa < a.len(), pb < b.len()) {
            (false, false) => return Ok(Ordering::Equal),
            (false, true) => return Ok(Ordering::Less),
            (true, false) => return Ok(Ordering::Greater),
            (true, true) => {
                let sa = decode_strict(a, pa)?;
                let sb = decode_strict(b, pb)?;
                match sa.value.cmp(&sb.value) {
                    Ordering::Equal => {
                        pa += sa.len;
                        pb += sb.len;
                    }
                    decided => return Ok(decided),
                }
            }
        }
    }
}
