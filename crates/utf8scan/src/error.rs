use thiserror::Error;

/// Classification of the first malformed byte found by [`validate`].
///
/// Every rejection is one of these five kinds; nothing is silently
/// swallowed or coerced to a generic failure.
///
/// [`validate`]: crate::validate
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// The first byte of a sequence matches no 1-, 2-, 3- or 4-byte lead
    /// pattern (`11111xxx`).
    #[error("invalid lead byte")]
    InvalidLeadByte,
    /// An expected trailing byte is not of the form `10xxxxxx`, or the
    /// buffer ended before the declared sequence length was reached.
    #[error("invalid continuation byte")]
    InvalidContinuationByte,
    /// The reconstructed code point fits in fewer bytes than the sequence
    /// used.
    #[error("overlong encoding")]
    OverlongEncoding,
    /// The reconstructed value is a surrogate or exceeds `0x10FFFF`.
    #[error("invalid code point")]
    InvalidCodePoint,
    /// A continuation byte appeared where a lead byte was expected.
    #[error("unexpected continuation byte")]
    UnexpectedContinuationByte,
}

/// A malformed-input report: what went wrong and where.
///
/// `position` is the byte offset of the offending byte. For a sequence
/// truncated by the end of the buffer it is the offset at which the missing
/// continuation byte was expected, which may equal the buffer length.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind} at byte {position}")]
pub struct Utf8Error {
    /// Which of the five conformance rules the input broke.
    pub kind: ErrorKind,
    /// Byte offset of the first offense.
    pub position: usize,
}

impl Utf8Error {
    pub(crate) const fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}
