//! The `\uXXXX` escape-form codec.
//!
//! Escape-form text is ASCII mixed with six-character `\uXXXX` tokens, one
//! token per code point. The fixed four-digit width limits tokens to the
//! Basic Multilingual Plane: [`decode_to_escape`] prints supplementary-plane
//! values with more than four digits, and [`encode_from_escape`] can never
//! read them back. This is a deliberate, documented limitation of the legacy
//! interchange format, not a defect to paper over (no surrogate-pair
//! emission).
//!
//! Both directions are permissive and never fail: unrecognized input is
//! copied through byte-for-byte. Callers that need well-formedness
//! guarantees run [`validate`](crate::validate) separately.

use alloc::{format, vec::Vec};

use bstr::BString;

use crate::{
    classify,
    walk::{Step, Steps},
};

/// Convert a single ASCII hex digit to its value.
#[inline]
const fn hex_val(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some((b - b'0') as u32),
        b'a'..=b'f' => Some((b - b'a') as u32 + 10),
        b'A'..=b'F' => Some((b - b'A') as u32 + 10),
        _ => None,
    }
}

/// Append the UTF-8 encoding of `cp` to `out`, using the standard length
/// bands (1 byte through `0x7F`, 2 through `0x7FF`, 3 through `0xFFFF`,
/// 4 above).
///
/// The value is encoded as declared, even when it is a surrogate; this is
/// what lets [`encode_from_escape`] reproduce legacy `\uD800`-style tokens
/// as the byte patterns [`validate`](crate::validate) then rejects.
///
/// # Examples
///
/// ```rust
/// let mut out = Vec::new();
/// utf8scan::encode_code_point(0x20AC, &mut out);
/// assert_eq!(out, "€".as_bytes());
/// ```
pub fn encode_code_point(cp: u32, out: &mut Vec<u8>) {
    match classify::encoded_length(cp) {
        1 => out.push(cp as u8),
        2 => {
            out.push(0xC0 | (cp >> 6) as u8);
            out.push(0x80 | (cp & 0x3F) as u8);
        }
        3 => {
            out.push(0xE0 | (cp >> 12) as u8);
            out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
            out.push(0x80 | (cp & 0x3F) as u8);
        }
        _ => {
            out.push(0xF0 | (cp >> 18) as u8);
            out.push(0x80 | ((cp >> 12) & 0x3F) as u8);
            out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
            out.push(0x80 | (cp & 0x3F) as u8);
        }
    }
}

/// Decode escape-form `text` into UTF-8 bytes.
///
/// Each `\u` marker consumes up to four following hex digits (stopping at
/// the first non-hex byte — malformed legacy tokens are read permissively,
/// so `\u41` encodes `U+0041` and a bare `\u` encodes `U+0000`) and emits
/// the minimal UTF-8 encoding of the parsed value. Every other byte,
/// including a backslash not followed by `u`, is copied through unchanged.
///
/// This function never fails; it is the inverse of [`decode_to_escape`] for
/// well-formed tokens.
///
/// # Examples
///
/// ```rust
/// use bstr::B;
///
/// assert_eq!(utf8scan::encode_from_escape(b"caf\\u00E9"), B("café"));
/// assert_eq!(utf8scan::encode_from_escape(b"\\u05D0"), B("א"));
/// assert_eq!(utf8scan::encode_from_escape(b"plain"), B("plain"));
/// ```
#[must_use]
pub fn encode_from_escape(text: &[u8]) -> BString {
    let mut out = Vec::with_capacity(text.len());
    let mut pos = 0;
    while pos < text.len() {
        if text[pos] == b'\\' && text.get(pos + 1) == Some(&b'u') {
            pos += 2;
            let mut cp: u32 = 0;
            let mut digits = 0;
            while digits < 4 {
                let Some(d) = text.get(pos).copied().and_then(hex_val) else {
                    break;
                };
                cp = (cp << 4) | d;
                pos += 1;
                digits += 1;
            }
            encode_code_point(cp, &mut out);
        } else {
            out.push(text[pos]);
            pos += 1;
        }
    }
    out.into()
}

/// Re-emit UTF-8 `bytes` as escape-form text.
///
/// ASCII bytes are copied through; each recognized multi-byte sequence
/// becomes an uppercase, zero-padded `\uXXXX` token. Bytes that match no
/// lead pattern (and truncated tails) are copied through literally rather
/// than rejected — this is a transcription pass, not a validation pass.
///
/// Code points above `0xFFFF` print with more than four digits and cannot
/// round-trip through [`encode_from_escape`]; see the module docs.
///
/// # Examples
///
/// ```rust
/// use bstr::B;
///
/// assert_eq!(utf8scan::decode_to_escape("café".as_bytes()), B("caf\\u00E9"));
/// assert_eq!(utf8scan::decode_to_escape(b"ascii only"), B("ascii only"));
/// ```
#[must_use]
pub fn decode_to_escape(bytes: &[u8]) -> BString {
    let mut out = Vec::with_capacity(bytes.len());
    for (_, step) in Steps::new(bytes) {
        match step {
            Step::Scalar(s) if s.len > 1 => {
                out.extend_from_slice(format!("\\u{:04X}", s.value).as_bytes());
            }
            Step::Scalar(s) => out.push(s.value as u8),
            Step::Literal(b) => out.push(b),
        }
    }
    out.into()
}
