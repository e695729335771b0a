//! The shared decode walk.
//!
//! Every operation in the crate is a linear scan over the same lead-byte
//! grammar, but with one of two policies:
//!
//! - **strict**: reject the first malformed sequence with a classified
//!   [`Utf8Error`]. Used by [`validate`](crate::validate) and
//!   [`compare`](crate::compare).
//! - **permissive**: a recognized lead with enough remaining bytes is
//!   decoded (continuation bytes are *not* verified); everything else is
//!   passed through as a single literal byte. Used by the escape emitter,
//!   [`substring`](crate::substring) and [`longest_run`](crate::longest_run).
//!
//! Both are expressed over [`classify`] so the bit tests live in one place
//! and the policies differ only in what they do when a test fails.

use crate::{
    classify,
    error::{ErrorKind, Utf8Error},
};

/// One decoded code point and the number of input bytes it occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Scalar {
    pub value: u32,
    pub len: usize,
}

/// Payload bits of a lead byte for a sequence of `len` bytes.
const fn lead_payload(lead: u8, len: usize) -> u32 {
    let mask: u8 = match len {
        1 => 0x7F,
        2 => 0x1F,
        3 => 0x0F,
        _ => 0x07,
    };
    (lead & mask) as u32
}

/// Strictly decode the sequence starting at `pos`.
///
/// Callers guarantee `pos < bytes.len()`.
pub(crate) fn decode_strict(bytes: &[u8], pos: usize) -> Result<Scalar, Utf8Error> {
    let lead = bytes[pos];
    if classify::is_continuation(lead) {
        return Err(Utf8Error::new(ErrorKind::UnexpectedContinuationByte, pos));
    }
    let Some(len) = classify::sequence_length(lead) else {
        return Err(Utf8Error::new(ErrorKind::InvalidLeadByte, pos));
    };

    let mut value = lead_payload(lead, len);
    for i in 1..len {
        match bytes.get(pos + i) {
            Some(&b) if classify::is_continuation(b) => {
                value = (value << 6) | u32::from(b & 0x3F);
            }
            // A non-continuation byte, or the end of the buffer, where a
            // continuation byte was required.
            _ => return Err(Utf8Error::new(ErrorKind::InvalidContinuationByte, pos + i)),
        }
    }

    if classify::is_overlong(value, len) {
        return Err(Utf8Error::new(ErrorKind::OverlongEncoding, pos));
    }
    if !classify::is_valid_code_point(value) {
        return Err(Utf8Error::new(ErrorKind::InvalidCodePoint, pos));
    }
    Ok(Scalar { value, len })
}

/// Outcome of one permissive step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// A recognized sequence, reconstructed without verifying its
    /// continuation bytes.
    Scalar(Scalar),
    /// A byte that matched no recognized pattern (or a truncated tail),
    /// passed through as-is.
    Literal(u8),
}

impl Step {
    /// Bytes of input this step consumed.
    pub(crate) fn width(self) -> usize {
        match self {
            Step::Scalar(s) => s.len,
            Step::Literal(_) => 1,
        }
    }

    /// The code point this step stands for, taking a literal byte at its
    /// numeric value.
    pub(crate) fn value(self) -> u32 {
        match self {
            Step::Scalar(s) => s.value,
            Step::Literal(b) => u32::from(b),
        }
    }
}

/// Permissively decode the step starting at `pos`.
///
/// Callers guarantee `pos < bytes.len()`.
pub(crate) fn decode_permissive(bytes: &[u8], pos: usize) -> Step {
    let lead = bytes[pos];
    match classify::sequence_length(lead) {
        Some(1) => Step::Scalar(Scalar {
            value: u32::from(lead),
            len: 1,
        }),
        Some(len) if pos + len <= bytes.len() => {
            let mut value = lead_payload(lead, len);
            for i in 1..len {
                value = (value << 6) | u32::from(bytes[pos + i] & 0x3F);
            }
            Step::Scalar(Scalar { value, len })
        }
        // Continuation byte out of position, 11111xxx pattern, or not
        // enough bytes left for the declared length.
        _ => Step::Literal(lead),
    }
}

/// Iterator over `(byte_position, strict decode result)` pairs.
///
/// After yielding an error the iterator is exhausted; the strict walk is a
/// validity oracle, not a best-effort repair.
pub(crate) struct Scalars<'a> {
    bytes: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> Scalars<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            failed: false,
        }
    }
}

impl Iterator for Scalars<'_> {
    type Item = Result<(usize, Scalar), Utf8Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.bytes.len() {
            return None;
        }
        let pos = self.pos;
        match decode_strict(self.bytes, pos) {
            Ok(scalar) => {
                self.pos += scalar.len;
                Some(Ok((pos, scalar)))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Iterator over `(byte_position, Step)` pairs under the permissive policy.
///
/// Total: always consumes the whole buffer, one literal byte at a time when
/// nothing better matches.
pub(crate) struct Steps<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Steps<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl Iterator for Steps<'_> {
    type Item = (usize, Step);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.bytes.len() {
            return None;
        }
        let pos = self.pos;
        let step = decode_permissive(self.bytes, pos);
        self.pos += step.width();
        Some((pos, step))
    }
}
