//! A self-contained UTF-8 text codec over byte strings.
//!
//! The crate does four related jobs, all as pure functions over immutable
//! input with no global state:
//!
//! - **Escape codec**: convert between raw UTF-8 bytes and `\uXXXX`
//!   escape-form text ([`encode_from_escape`], [`decode_to_escape`]).
//! - **Validation**: classify the first conformance failure in arbitrary
//!   bytes ([`validate`], with a five-kind [`ErrorKind`] taxonomy).
//! - **Code-point indexing**: length, position lookup and slicing measured
//!   in code points rather than bytes ([`length_in_codepoints`],
//!   [`char_at`], [`substring`], [`longest_run`]).
//! - **Comparison**: lexicographic ordering by decoded code-point sequence
//!   ([`compare`]).
//!
//! Two policies run through the API. [`validate`] and [`compare`] are
//! strict: any malformed sequence is a classified error. The codec and the
//! indexer are deliberately permissive: unrecognized bytes are copied
//! through or stepped over, never rejected, so they accept dirty buffers —
//! callers that need guarantees validate first. Because permissive output
//! may not be valid UTF-8, text-producing operations return
//! [`bstr::BString`] rather than `String`.
//!
//! Buffers are `&[u8]` in and owned, growable values out; no operation
//! writes into caller-provided storage, blocks, or performs I/O.
//!
//! ```rust
//! use bstr::B;
//!
//! let bytes = utf8scan::encode_from_escape(b"caf\\u00E9");
//! assert_eq!(bytes, B("café"));
//! assert!(utf8scan::validate(&bytes).is_ok());
//! assert_eq!(utf8scan::length_in_codepoints(&bytes), 4);
//! assert_eq!(utf8scan::decode_to_escape(&bytes), B("caf\\u00E9"));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod classify;
mod compare;
mod error;
mod escape;
mod index;
mod runs;
mod validate;
mod walk;

#[cfg(test)]
mod tests;

pub use classify::{
    MAX_CODE_POINT, encoded_length, is_continuation, is_lead, is_overlong, is_surrogate,
    is_valid_code_point, sequence_length,
};
pub use compare::compare;
pub use error::{ErrorKind, Utf8Error};
pub use escape::{decode_to_escape, encode_code_point, encode_from_escape};
pub use index::{char_at, length_in_codepoints, substring};
pub use runs::{Run, longest_run};
pub use validate::validate;
