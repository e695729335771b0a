//! Single-byte and code-point predicates shared by every walk over encoded
//! input.
//!
//! The decoder, validator, indexer and comparator all reason about the same
//! lead-byte patterns; centralizing the bit tests here keeps their policies
//! (strict rejection vs permissive copy-through) a property of the caller
//! rather than of duplicated inline masks.
//!
//! All functions are total, allocation-free and have no side effects.

/// Maximum valid Unicode scalar value.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// Returns `true` if `byte` is a continuation byte (`10xxxxxx`).
#[inline]
#[must_use]
pub const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Returns `true` if `byte` can start a code point, i.e. it is not a
/// continuation byte.
///
/// Note that this includes byte patterns (`11111xxx`) that are not valid
/// lead bytes; [`sequence_length`] distinguishes those.
#[inline]
#[must_use]
pub const fn is_lead(byte: u8) -> bool {
    !is_continuation(byte)
}

/// Number of bytes in the sequence introduced by `lead`, or `None` if the
/// byte matches no 1-, 2-, 3- or 4-byte lead pattern.
///
/// Callers decide what `None` means: the validator reports
/// [`ErrorKind::InvalidLeadByte`](crate::ErrorKind::InvalidLeadByte), the
/// escape emitter copies the byte through unchanged.
#[inline]
#[must_use]
pub const fn sequence_length(lead: u8) -> Option<usize> {
    if lead & 0x80 == 0 {
        Some(1)
    } else if lead & 0xE0 == 0xC0 {
        Some(2)
    } else if lead & 0xF0 == 0xE0 {
        Some(3)
    } else if lead & 0xF8 == 0xF0 {
        Some(4)
    } else {
        None
    }
}

/// Returns `true` if `cp` falls in the UTF-16 surrogate range
/// `[0xD800, 0xDFFF]`, which is not encodable in well-formed UTF-8.
#[inline]
#[must_use]
pub const fn is_surrogate(cp: u32) -> bool {
    cp >= 0xD800 && cp <= 0xDFFF
}

/// Returns `true` if `cp` is a Unicode scalar value: not a surrogate and
/// at most [`MAX_CODE_POINT`].
#[inline]
#[must_use]
pub const fn is_valid_code_point(cp: u32) -> bool {
    !is_surrogate(cp) && cp <= MAX_CODE_POINT
}

/// Minimal number of bytes needed to encode `cp` in UTF-8, by the standard
/// length bands.
#[inline]
#[must_use]
pub const fn encoded_length(cp: u32) -> usize {
    if cp <= 0x7F {
        1
    } else if cp <= 0x7FF {
        2
    } else if cp <= 0xFFFF {
        3
    } else {
        4
    }
}

/// Returns `true` if a sequence of `declared_len` bytes decoding to `cp` is
/// overlong, i.e. the code point's minimal encoding is shorter than the
/// sequence that carried it.
#[inline]
#[must_use]
pub const fn is_overlong(cp: u32, declared_len: usize) -> bool {
    encoded_length(cp) < declared_len
}
