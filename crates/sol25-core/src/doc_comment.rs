//! Doc-comment extraction (spec §4.5).
//!
//! Scans the *raw* source — not the token stream — for the first substring
//! delimited by double quotes, DOTALL-style (newlines included), and returns
//! its contents with the delimiters stripped. This mirrors
//! `original_source/src/parse.py`'s `re.search(r'"(.*?)"', src, re.DOTALL)`
//! exactly, including the lack of escape handling: unlike `STR` literals,
//! a doc comment's contents are taken verbatim.
//!
//! Deliberately independent of [`crate::lexer`]: the lexer's `COMMENT` rule
//! exists only to know what to skip during tokenization, and by the time a
//! `Program` is built the source positions of comments are gone. A raw scan
//! is simpler than threading a side channel through lexing for a detail only
//! the root XML element cares about.
pub fn extract_doc_comment(source: &str) -> Option<String> {
    let start = source.find('"')?;
    let rest = &source[start + 1..];
    let end = rest.find('"')?;
    Some(rest[..end].to_string())
}
