//! Removal of inline ruby readings.
//!
//! Aozora Bunko style texts annotate kanji with their readings inline:
//!
//! ```text
//! 吾輩《わがはい》は猫である
//! ```
//!
//! The annotation breaks dictionary matching (the matcher sees `吾輩《`), so
//! readers usually strip it before display. Stripping happens once, right
//! after decoding; all offsets are then relative to the stripped text.

const OPEN: char = '《';
const CLOSE: char = '》';

/// Remove every `《…》` annotation with a non-empty body.
///
/// An empty `《》` and an unterminated `《` are kept as text.
///
/// ```rust
/// use yomiscan::strip_readings;
///
/// assert_eq!(strip_readings("吾輩《わがはい》は猫である"), "吾輩は猫である");
/// assert_eq!(strip_readings("《》"), "《》");
/// ```
#[must_use]
pub fn strip_readings(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(OPEN) {
        let body = &rest[open + OPEN.len_utf8()..];
        match body.find(CLOSE) {
            Some(0) => {
                out.push_str(&rest[..open + OPEN.len_utf8()]);
                rest = body;
            }
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &body[close + CLOSE.len_utf8()..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}
