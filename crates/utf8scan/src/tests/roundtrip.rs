//! Cross-operation behavior: the escape codec, indexer and comparator
//! driving each other the way a text front-end would.

use alloc::vec::Vec;

use bstr::B;

use crate::{
    char_at, compare, decode_to_escape, encode_from_escape, length_in_codepoints,
    sequence_length, substring, validate,
};

#[test]
fn escape_text_through_the_whole_pipeline() {
    let bytes = encode_from_escape(b"Hello \\u05E9\\u05DC\\u05D5\\u05DD");
    assert_eq!(bytes, B("Hello שלום"));
    assert_eq!(validate(&bytes), Ok(()));
    assert_eq!(length_in_codepoints(&bytes), 10);
    assert_eq!(substring(&bytes, 6, 4), B("שלום"));
    assert_eq!(decode_to_escape(&bytes), B("Hello \\u05E9\\u05DC\\u05D5\\u05DD"));
}

#[test]
fn char_at_start_plus_sequence_length_yields_the_slice() {
    // char_at returns only the start; the caller derives the width, per the
    // legacy contract.
    let text = "aé√😀".as_bytes();
    let mut recovered = Vec::new();
    for index in 0..4 {
        let start = char_at(text, index).unwrap();
        let width = sequence_length(text[start]).unwrap();
        recovered.extend_from_slice(&text[start..start + width]);
    }
    assert_eq!(recovered, text);
    assert_eq!(char_at(text, 4), None);
}

#[test]
fn indexing_boundary_examples() {
    assert_eq!(char_at(b"Hello", 2), Some(2));
    assert_eq!(char_at(b"Hello", -1), None);
    assert_eq!(char_at(b"Hello", 10), None);
    assert_eq!(substring(b"Hello World", 6, 5), B("World"));
    assert_eq!(substring(b"Hello", 2, 10), B("llo"));
    assert_eq!(substring(b"", 0, 5), B(""));
    assert_eq!(length_in_codepoints(b"Hello"), 5);
    assert_eq!(length_in_codepoints(b""), 0);
}

#[test]
fn substring_of_valid_input_revalidates() {
    let text = "a😀bé€c".as_bytes();
    for start in 0..=6 {
        for len in 0..=6 {
            let sub = substring(text, start, len);
            assert_eq!(validate(&sub), Ok(()), "start {start} len {len}");
        }
    }
}

#[test]
fn comparator_agrees_with_decoded_sequences() {
    use core::cmp::Ordering;

    // Ranked by code point: "abc" < "abd" < "abé" < "ab€" < "ab😀".
    let ranked = ["abc", "abd", "abé", "ab€", "ab😀"];
    for (i, a) in ranked.iter().enumerate() {
        for (j, b) in ranked.iter().enumerate() {
            let expected = i.cmp(&j);
            assert_eq!(
                compare(a.as_bytes(), b.as_bytes()),
                Ok(expected),
                "{a} vs {b}"
            );
            // Antisymmetry.
            assert_eq!(
                compare(b.as_bytes(), a.as_bytes()),
                Ok(expected.reverse())
            );
        }
    }
    assert_eq!(compare("😀".as_bytes(), "😀".as_bytes()), Ok(Ordering::Equal));
}

#[test]
fn permissive_codec_tolerates_what_validate_rejects() {
    let dirty = [b'o', b'k', 0xFF, 0x80, b'!'];
    assert!(validate(&dirty).is_err());
    // The codec passes the junk through untouched instead of failing.
    assert_eq!(decode_to_escape(&dirty), B(b"ok\xFF\x80!"));
    assert_eq!(encode_from_escape(&dirty), B(b"ok\xFF\x80!"));
}
