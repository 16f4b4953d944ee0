//! End-to-end scanning scenarios.
//!
//! These tests drive the public API the way a reader application does:
//! open bytes, point at an offset, look up, highlight, attach the sentence.

use encoding_rs::{EUC_JP, SHIFT_JIS};
use yomiscan::{
    find_sentence, flatten, resolve, Error, Lookup, ScanConfig, Scanner, Span, TextBuffer,
    TextSearch, WordList,
};

fn dictionary() -> WordList {
    WordList::parse(
        "hello\tgreeting\n\
         日本\tJapan\n\
         日本語\tJapanese\n\
         読む\tto read\n\
         猫\tcat\n",
    )
}

// =============================================================================
// Decode -> flatten -> match -> select
// =============================================================================

#[test]
fn hello_world_round_trip() {
    let decoded = resolve(b"hello\n world.");
    assert_eq!(decoded.label(), "UTF-8");
    assert!(!decoded.had_errors);

    let window = flatten(&decoded.text, 0, 20).unwrap();
    assert_eq!(window.text(), "hello world.");

    let result = dictionary().find_term(window.text(), false);
    assert_eq!(result.matched_len, 5);
    assert_eq!(window.selection(result.matched_len), Span::new(0, 5));
}

#[test]
fn word_wrapped_across_lines_is_selected_whole() {
    let scanner = Scanner::default();
    let text = TextBuffer::from("本を読\nむ。");
    let result = scanner.scan(&text, 2, &dictionary()).unwrap();

    assert_eq!(result.window.text, "読む。");
    assert_eq!(result.matched_len, 2);
    assert_eq!(result.selection, Span::new(2, 5));
    assert_eq!(text.slice(result.selection.range()), "読\nむ");
    assert_eq!(result.definitions[0].gloss, "to read");
}

#[test]
fn word_wrapped_across_crlf_is_selected_whole() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crlf.txt");
    let (bytes, _, _) = SHIFT_JIS.encode("本を読\r\nむ。\r\n");
    std::fs::write(&path, &bytes).unwrap();

    let scanner = Scanner::default();
    let decoded = scanner.open(&path).unwrap();
    assert_eq!(decoded.text.to_string(), "本を読\nむ。\n");

    let result = scanner.scan(&decoded.text, 2, &dictionary()).unwrap();
    assert_eq!(result.window.text, "読む。");
    assert_eq!(result.matched_len, 2);
    assert_eq!(result.selection, Span::new(2, 5));
    assert_eq!(result.sentence.text, "本を読\nむ。");
}

#[test]
fn sentence_continues_across_hard_wrap() {
    let text = TextBuffer::from("吾輩は猫で\nある。名前はまだ無い。");
    let sentence = find_sentence(&text, 1);
    assert_eq!(sentence.text, "吾輩は猫で\nある。");
    assert_eq!(sentence.span, Span::new(0, 9));
}

#[test]
fn sentence_is_attached_to_results() {
    let scanner = Scanner::default();
    let text = TextBuffer::from("犬がいる。猫「にゃ。」と鳴く。次。");
    let result = scanner.scan(&text, 5, &dictionary()).unwrap();

    assert_eq!(result.definitions[0].headword, "猫");
    assert_eq!(result.sentence.text, "猫「にゃ。」と鳴く。");
}

#[test]
fn whitespace_cursor_clears_selection() {
    let scanner = Scanner::default();
    let text = TextBuffer::from("猫 猫");
    assert!(scanner.scan(&text, 1, &dictionary()).is_none());
    assert!(scanner.scan(&text, 3, &dictionary()).is_none());
}

#[test]
fn leading_newlines_are_attributed_to_selection() {
    let scanner = Scanner::default();
    let text = TextBuffer::from("\n\n日本語");
    let result = scanner.scan(&text, 0, &dictionary()).unwrap();

    assert_eq!(result.window.text, "日本語");
    assert_eq!(result.matched_len, 3);
    assert_eq!(result.selection, Span::new(0, 5));
}

// =============================================================================
// Sentences
// =============================================================================

#[test]
fn consecutive_sentences_split_on_terminators() {
    let text = TextBuffer::from("A.B.C.");
    let sentence = find_sentence(&text, 2);
    assert_eq!(sentence.text, "B.");
    assert_eq!(sentence.span, Span::new(2, 4));
}

#[test]
fn quoted_terminator_kept_inside_sentence() {
    let text = TextBuffer::from("「A.B」C.");
    let sentence = find_sentence(&text, 0);
    assert_eq!(sentence.text, "「A.B」C.");
}

#[test]
fn terminator_after_closing_quote_starts_new_sentence() {
    let text = TextBuffer::from("He said \"Stop.\" Then left.");
    assert_eq!(find_sentence(&text, 20).text, "Then left.");
    assert_eq!(find_sentence(&text, 11).text, "Stop.");
}

#[test]
fn extraction_is_stable_within_sentence() {
    let text = TextBuffer::from("今日は雨。明日も雨だろう。\n晴れ。");
    let first = find_sentence(&text, 5);
    for position in first.span.range() {
        assert_eq!(find_sentence(&text, position), first);
    }
}

// =============================================================================
// Documents on disk
// =============================================================================

#[test]
fn shift_jis_file_opens_and_scans() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("novel.txt");
    let (bytes, _, _) = SHIFT_JIS.encode("日本語の本を読む。");
    std::fs::write(&path, &bytes).unwrap();

    let scanner = Scanner::default();
    let decoded = scanner.open(&path).unwrap();
    assert_eq!(decoded.label(), "Shift_JIS");

    let result = scanner.scan(&decoded.text, 0, &dictionary()).unwrap();
    assert_eq!(result.selection, Span::new(0, 3));
    assert_eq!(result.sentence.text, "日本語の本を読む。");
}

#[test]
fn custom_priority_picks_euc_jp() {
    let (bytes, _, _) = EUC_JP.encode("猫だ");
    let config = ScanConfig::default()
        .with_encoding_labels(&["utf-8", "euc-jp"])
        .unwrap();
    let decoded = Scanner::new(config).decode(&bytes);
    assert_eq!(decoded.label(), "EUC-JP");
    assert_eq!(decoded.text.to_string(), "猫だ");
}

#[test]
fn damaged_file_still_opens() {
    let decoded = Scanner::default().decode(b"caf\xc3\xa9 \xff");
    assert!(decoded.had_errors);
    assert!(decoded.text.to_string().contains('\u{FFFD}'));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Scanner::default().open(dir.path().join("absent.txt"));
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn stripped_readings_shift_offsets() {
    let config = ScanConfig::default().with_strip_readings(true);
    let scanner = Scanner::new(config);
    let decoded = scanner.decode("日本《にほん》語".as_bytes());
    assert_eq!(decoded.text.to_string(), "日本語");

    let result = scanner.scan(&decoded.text, 0, &dictionary()).unwrap();
    assert_eq!(result.selection, Span::new(0, 3));
}

#[test]
fn search_box_uses_exact_lookup() {
    let scanner = Scanner::default();
    assert_eq!(scanner.search("日本", &dictionary()).matched_len, 2);
    assert!(scanner.search("日本の", &dictionary()).definitions.is_empty());
}

#[test]
fn find_wraps_through_document() {
    let text = Scanner::default().decode("猫と犬と猫".as_bytes()).text;
    let mut search = TextSearch::new();
    assert_eq!(search.find_next(&text, "猫"), Some(Span::new(0, 1)));
    assert_eq!(search.find_again(&text), Some(Span::new(4, 5)));
    assert_eq!(search.find_again(&text), Some(Span::new(0, 1)));
}
