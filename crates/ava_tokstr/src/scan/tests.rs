use super::*;
use pretty_assertions::assert_eq;

/// Drive `next_token` to exhaustion and collect every token as a `String`.
fn collect(text: &str, delims: &[u8], terms: &[u8]) -> Vec<String> {
    let mut buf = text.as_bytes().to_vec();
    let delims = CharSet::from_bytes(delims);
    let terms = CharSet::from_bytes(terms);
    let mut cursor = None;
    let mut out = Vec::new();
    let mut next = Some(&mut buf[..]);
    while let Some(tok) = next_token(next.take(), &delims, &terms, &mut cursor) {
        out.push(String::from_utf8_lossy(tok).into_owned());
    }
    out
}

// === Sequences ===

#[test]
fn mixed_delimiters_and_terminators() {
    assert_eq!(collect("  ab,cd; ef", b" ", b",; "), vec!["ab", "cd", "ef"]);
}

#[test]
fn single_terminator_without_delimiters() {
    assert_eq!(collect("a:b:c", b"", b":"), vec!["a", "b", "c"]);
}

#[test]
fn command_line_split() {
    assert_eq!(
        collect("\t test  all\tdump\n", b" \t", b" \t\n"),
        vec!["test", "all", "dump"]
    );
}

#[test]
fn trailing_newline_after_blank_yields_empty_token() {
    // The newline is a terminator but not a delimiter, so it starts a token.
    assert_eq!(collect("test \n", b" \t", b" \t\n"), vec!["test", ""]);
}

#[test]
fn adjacent_terminators_without_delimiters_yield_empty_tokens() {
    assert_eq!(collect("::b", b"", b":"), vec!["", "", "b"]);
}

#[test]
fn trailing_terminator_ends_sequence() {
    assert_eq!(collect("a:b:", b"", b":"), vec!["a", "b"]);
}

// === No Token ===

#[test]
fn no_text_and_no_cursor() {
    let mut cursor = None;
    assert!(next_token(None, &CharSet::BLANKS, &CharSet::BLANKS, &mut cursor).is_none());
    assert!(cursor.is_none());
}

#[test]
fn empty_text() {
    let mut buf: [u8; 0] = [];
    let mut cursor = None;
    assert!(next_token(Some(&mut buf[..]), &CharSet::EMPTY, &CharSet::EMPTY, &mut cursor).is_none());
    assert!(cursor.is_none());
}

#[test]
fn only_delimiters() {
    let mut buf = *b" \t \t";
    let mut cursor = None;
    let tok = next_token(Some(&mut buf[..]), &CharSet::BLANKS, &CharSet::EMPTY, &mut cursor);
    assert!(tok.is_none());
    assert!(cursor.is_none());
}

#[test]
fn leading_nul_is_end_of_string() {
    let mut buf = *b"\0abc";
    let mut cursor = None;
    assert!(next_token(Some(&mut buf[..]), &CharSet::EMPTY, &CharSet::EMPTY, &mut cursor).is_none());
}

#[test]
fn exhaustion_is_idempotent() {
    let mut buf = *b"x";
    let mut cursor = None;
    let tok = next_token(Some(&mut buf[..]), &CharSet::EMPTY, &CharSet::EMPTY, &mut cursor);
    assert_eq!(tok.as_deref(), Some(&b"x"[..]));
    for _ in 0..3 {
        assert!(next_token(None, &CharSet::EMPTY, &CharSet::EMPTY, &mut cursor).is_none());
        assert!(cursor.is_none());
    }
}

// === Cursor ===

#[test]
fn no_terminator_found_leaves_cursor_unset() {
    let mut buf = *b"onlyoneword";
    let set = CharSet::from_bytes(b" ");
    let mut cursor = None;
    let tok = next_token(Some(&mut buf[..]), &set, &set, &mut cursor);
    assert_eq!(tok.as_deref(), Some(&b"onlyoneword"[..]));
    assert!(cursor.is_none());
}

#[test]
fn empty_terminators_take_whole_remainder() {
    let mut buf = *b"  all of it ";
    let mut cursor = None;
    let tok = next_token(Some(&mut buf[..]), &CharSet::BLANKS, &CharSet::EMPTY, &mut cursor);
    assert_eq!(tok.as_deref(), Some(&b"all of it "[..]));
    assert!(cursor.is_none());
}

#[test]
fn cursor_points_past_terminator() {
    let mut buf = *b"ab,cd";
    let mut cursor = None;
    let terms = CharSet::from_bytes(b",");
    let tok = next_token(Some(&mut buf[..]), &CharSet::EMPTY, &terms, &mut cursor);
    assert_eq!(tok.as_deref(), Some(&b"ab"[..]));
    assert_eq!(cursor.as_deref(), Some(&b"cd"[..]));
}

#[test]
fn fresh_text_discards_saved_cursor() {
    let mut first = *b"a b c";
    let mut second = *b"x y";
    let mut cursor = None;
    let set = CharSet::BLANKS;

    let tok = next_token(Some(&mut first[..]), &set, &set, &mut cursor);
    assert_eq!(tok.as_deref(), Some(&b"a"[..]));
    assert!(cursor.is_some());

    let tok = next_token(Some(&mut second[..]), &set, &set, &mut cursor);
    assert_eq!(tok.as_deref(), Some(&b"x"[..]));
    let tok = next_token(None, &set, &set, &mut cursor);
    assert_eq!(tok.as_deref(), Some(&b"y"[..]));
    assert!(next_token(None, &set, &set, &mut cursor).is_none());
}

#[test]
fn fresh_text_of_only_delimiters_still_clears_cursor() {
    let mut first = *b"a b";
    let mut second = *b"   ";
    let mut cursor = None;
    let set = CharSet::BLANKS;

    assert!(next_token(Some(&mut first[..]), &set, &set, &mut cursor).is_some());
    assert!(cursor.is_some());
    assert!(next_token(Some(&mut second[..]), &set, &set, &mut cursor).is_none());
    assert!(cursor.is_none());
}

#[test]
fn sets_may_change_between_calls() {
    let mut buf = *b"key=value;rest";
    let mut cursor = None;
    let eq = CharSet::from_bytes(b"=");
    let semi = CharSet::from_bytes(b";");

    let key = next_token(Some(&mut buf[..]), &CharSet::EMPTY, &eq, &mut cursor);
    assert_eq!(key.as_deref(), Some(&b"key"[..]));
    let value = next_token(None, &CharSet::EMPTY, &semi, &mut cursor);
    assert_eq!(value.as_deref(), Some(&b"value"[..]));
    let rest = next_token(None, &CharSet::EMPTY, &CharSet::EMPTY, &mut cursor);
    assert_eq!(rest.as_deref(), Some(&b"rest"[..]));
}

// === Delimiter / Terminator Overlap ===

#[test]
fn first_byte_terminator_with_empty_delimiters_gives_empty_token() {
    let mut buf = *b",x";
    let mut cursor = None;
    let terms = CharSet::from_bytes(b",");
    let tok = next_token(Some(&mut buf[..]), &CharSet::EMPTY, &terms, &mut cursor);
    assert_eq!(tok.as_deref(), Some(&b""[..]));
    assert_eq!(cursor.as_deref(), Some(&b"x"[..]));
}

#[test]
fn overlapping_byte_is_skipped_as_delimiter_first() {
    let mut buf = *b"  x y";
    let mut cursor = None;
    let set = CharSet::from_bytes(b" ");
    let tok = next_token(Some(&mut buf[..]), &set, &set, &mut cursor);
    assert_eq!(tok.as_deref(), Some(&b"x"[..]));
    assert_eq!(cursor.as_deref(), Some(&b"y"[..]));
}

// === Buffer Mutation ===

#[test]
fn terminators_are_overwritten_with_nul() {
    let mut buf = *b"  ab,cd; ef";
    let delims = CharSet::from_bytes(b" ");
    let terms = CharSet::from_bytes(b",; ");
    let mut cursor = None;
    let mut next = Some(&mut buf[..]);
    while next_token(next.take(), &delims, &terms, &mut cursor).is_some() {}
    assert_eq!(&buf, b"  ab\0cd\0 ef");
}

#[test]
fn interior_nul_truncates_token() {
    let mut buf = *b"ab\0cd,ef";
    let terms = CharSet::from_bytes(b",");
    let mut cursor = None;
    let tok = next_token(Some(&mut buf[..]), &CharSet::EMPTY, &terms, &mut cursor);
    assert_eq!(tok.as_deref(), Some(&b"ab"[..]));
    assert!(cursor.is_none());
    // Nothing after the NUL was touched.
    assert_eq!(&buf, b"ab\0cd,ef");
}

// === Fast Path Agreement ===

#[test]
fn large_terminator_sets_match_small_ones() {
    // Three members disables the memchr path; the third never occurs.
    let small = collect("a,b;c", b"", b",;");
    let large = collect("a,b;c", b"", b",;#");
    assert_eq!(small, large);
    assert_eq!(small, vec!["a", "b", "c"]);
}
