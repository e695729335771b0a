use crate::walk::Steps;

/// A maximal run of non-whitespace code points inside an encoded buffer.
///
/// Produced by [`longest_run`]. `start..end` is the byte range of the run;
/// `codepoints` is its length in code points, which is what runs are ranked
/// by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    /// Byte offset of the run's first code point.
    pub start: usize,
    /// Byte offset one past the run's last code point.
    pub end: usize,
    /// Length of the run in code points.
    pub codepoints: usize,
}

/// Whitespace for run-splitting purposes: the four ASCII separators the
/// legacy tool recognized.
const fn is_run_whitespace(cp: u32) -> bool {
    matches!(cp, 0x20 | 0x09 | 0x0A | 0x0D)
}

/// Find the longest whitespace-free run of code points in `bytes`.
///
/// Runs are split on ASCII space, tab, line feed and carriage return, and
/// ranked by code-point count; the earliest of equally long runs wins.
/// Walks permissively, so malformed bytes count as single code points
/// rather than failing the scan. Returns `None` when the buffer is empty
/// or all whitespace.
///
/// # Examples
///
/// ```rust
/// use utf8scan::{longest_run, Run};
///
/// let run = longest_run(b"a bb ccc dd").unwrap();
/// assert_eq!(run, Run { start: 5, end: 8, codepoints: 3 });
/// assert_eq!(longest_run(b"  \t\n"), None);
/// ```
#[must_use]
pub fn longest_run(bytes: &[u8]) -> Option<Run> {
    let mut best: Option<Run> = None;
    let mut current: Option<Run> = None;

    for (pos, step) in Steps::new(bytes) {
        if is_run_whitespace(step.value()) {
            current = None;
            continue;
        }
        let run = current.get_or_insert(Run {
            start: pos,
            end: pos,
            codepoints: 0,
        });
        run.end = pos + step.width();
        run.codepoints += 1;
        if best.is_none_or(|b| run.codepoints > b.codepoints) {
            best = Some(*run);
        }
    }
    best
}
