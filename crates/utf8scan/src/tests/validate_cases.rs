use rstest::rstest;

use crate::{ErrorKind, Utf8Error, validate};

#[rstest]
#[case::single_ascii(b"A")]
#[case::empty(b"")]
#[case::ascii_text(b"Hello, World")]
#[case::two_byte_text("שלום".as_bytes())]
#[case::three_byte_text("€100".as_bytes())]
#[case::four_byte_text("😀".as_bytes())]
#[case::nul(b"\0")]
#[case::band_edges("\u{7F}\u{80}\u{7FF}\u{800}\u{FFFF}\u{10000}\u{10FFFF}".as_bytes())]
#[case::around_surrogate_gap("\u{D7FF}\u{E000}".as_bytes())]
fn accepts_well_formed(#[case] bytes: &[u8]) {
    assert_eq!(validate(bytes), Ok(()));
}

#[rstest]
#[case::lead_all_ones(&[0xFF], ErrorKind::InvalidLeadByte, 0)]
#[case::five_byte_pattern(&[0xF8, 0x80, 0x80, 0x80, 0x80], ErrorKind::InvalidLeadByte, 0)]
#[case::lone_continuation(&[0x80], ErrorKind::UnexpectedContinuationByte, 0)]
#[case::continuation_after_ascii(&[b'a', 0x80], ErrorKind::UnexpectedContinuationByte, 1)]
#[case::extra_continuation(&[0xC3, 0xA9, 0xA9], ErrorKind::UnexpectedContinuationByte, 2)]
#[case::overlong_ascii(&[0xC1, 0x81], ErrorKind::OverlongEncoding, 0)]
#[case::overlong_nul(&[0xC0, 0x80], ErrorKind::OverlongEncoding, 0)]
#[case::overlong_three_byte(&[0xE0, 0x80, 0x80], ErrorKind::OverlongEncoding, 0)]
#[case::overlong_four_byte(&[0xF0, 0x80, 0x80, 0x80], ErrorKind::OverlongEncoding, 0)]
#[case::bad_continuation(&[0xE2, 0x28, 0xA1], ErrorKind::InvalidContinuationByte, 1)]
#[case::truncated_two_byte(&[0xC3], ErrorKind::InvalidContinuationByte, 1)]
#[case::truncated_three_byte(&[b'a', b'b', 0xE2, 0x82], ErrorKind::InvalidContinuationByte, 4)]
#[case::truncated_four_byte(&[0xF0, 0x9F, 0x98], ErrorKind::InvalidContinuationByte, 3)]
#[case::high_surrogate(&[0xED, 0xA0, 0x80], ErrorKind::InvalidCodePoint, 0)]
#[case::low_surrogate(&[0xED, 0xBF, 0xBF], ErrorKind::InvalidCodePoint, 0)]
#[case::beyond_max(&[0xF4, 0x90, 0x80, 0x80], ErrorKind::InvalidCodePoint, 0)]
fn rejects_with_kind_and_position(
    #[case] bytes: &[u8],
    #[case] kind: ErrorKind,
    #[case] position: usize,
) {
    assert_eq!(validate(bytes), Err(Utf8Error { kind, position }));
}

#[test]
fn stops_at_the_first_failure() {
    // Both a bad continuation (at 1) and a lone continuation (at 3) are
    // present; only the first is reported.
    let err = validate(&[0xE2, 0x28, b'a', 0x80]).unwrap_err();
    assert_eq!(err.position, 1);
    assert_eq!(err.kind, ErrorKind::InvalidContinuationByte);
}

#[test]
fn error_display_names_kind_and_offset() {
    use alloc::string::ToString;

    let err = validate(&[b'x', 0xC1, 0x81]).unwrap_err();
    assert_eq!(err.to_string(), "overlong encoding at byte 1");
}
