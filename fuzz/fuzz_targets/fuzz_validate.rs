#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The strict scan must accept exactly what the standard library's
    // decoder accepts.
    let ours = utf8scan::validate(data);
    let std = core::str::from_utf8(data);
    assert_eq!(ours.is_ok(), std.is_ok());
    if let (Err(ours), Err(std)) = (ours, std) {
        // Both stop at the same malformed sequence.
        assert!(ours.position >= std.valid_up_to());
    }

    // The permissive operations must be total: no panics, no reads past
    // the buffer, on any input.
    let escaped = utf8scan::decode_to_escape(data);
    let _ = utf8scan::encode_from_escape(&escaped);
    let _ = utf8scan::longest_run(data);
    let n = utf8scan::length_in_codepoints(data);
    assert!(n <= data.len());
    let _ = utf8scan::substring(data, 0, n);
});
