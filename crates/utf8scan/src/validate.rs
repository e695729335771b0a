use crate::{error::Utf8Error, walk::Scalars};

/// Check `bytes` for UTF-8 conformance.
///
/// A linear, single-pass strict scan that stops at the first failure and
/// classifies it: bad lead byte, bad or missing continuation byte, overlong
/// encoding, invalid code point (surrogate or above `0x10FFFF`), or a
/// continuation byte in lead position. The scan is a validity oracle, not a
/// best-effort repair; on the first failure the rest of the buffer is not
/// examined.
///
/// # Errors
///
/// Returns a [`Utf8Error`] carrying the [`ErrorKind`](crate::ErrorKind) and
/// the byte offset of the first offense.
///
/// # Examples
///
/// ```rust
/// use utf8scan::{validate, ErrorKind};
///
/// assert!(validate("Hello, Ω".as_bytes()).is_ok());
///
/// let err = validate(&[b'a', 0x80]).unwrap_err();
/// assert_eq!(err.kind, ErrorKind::UnexpectedContinuationByte);
/// assert_eq!(err.position, 1);
/// ```
pub fn validate(bytes: &[u8]) -> Result<(), Utf8Error> {
    for step in Scalars::new(bytes) {
        step?;
    }
    Ok(())
}
