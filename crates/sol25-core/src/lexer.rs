//! Lexer for SOL25 source text.
//!
//! Produces span-based tokens; text is sliced from the source only when a
//! caller needs it (selector fragments, literal values, identifier names).
//! Whitespace and comments are skipped by the lexer itself — the first
//! comment in the source is recovered separately by [`crate::doc_comment`]
//! from the raw text, not from this token stream.
//!
//! Unlike a recovering lexer, this one stops at the first unrecognized byte:
//! the grammar has no error-recovery requirement (spec §1 Non-goals), so a
//! single `Garbage` token would only delay a failure that must happen anyway.

use logos::Logos;
use rowan::TextRange;

use crate::Error;

/// Token and node kinds are unified in other SOL25-adjacent grammars, but this
/// front-end never builds a concrete syntax tree, so `SyntaxKind` here is
/// tokens only.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r#""[^"]*""#)]
pub enum SyntaxKind {
    #[token("class")]
    KwClass,

    #[regex(r"[A-Z][A-Za-z0-9]*")]
    Cid,

    #[regex(r"[a-z_][A-Za-z0-9_]*:")]
    IdColon,

    #[regex(r":[a-z_][A-Za-z0-9_]*")]
    ColonId,

    #[regex(r"[a-z_][A-Za-z0-9_]*")]
    Id,

    #[regex(r"0|[+-]?[1-9][0-9]*")]
    Int,

    #[regex(r"'(?:[^'\\\n]|\\['\\n])*'")]
    Str,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("|")]
    Pipe,
    #[token(":=")]
    Assign,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
}

/// A lexed token: kind plus byte span into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes `source`, failing on the first unrecognized byte.
pub fn lex(source: &str) -> Result<Vec<Token>, Error> {
    let mut tokens = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => {
                let span = lexer.span();
                tokens.push(Token::new(
                    kind,
                    TextRange::new((span.start as u32).into(), (span.end as u32).into()),
                ));
            }
            Err(()) => {
                let span = lexer.span();
                return Err(Error::Lexical {
                    range: TextRange::new((span.start as u32).into(), (span.end as u32).into()),
                });
            }
        }
    }

    Ok(tokens)
}

/// Slices the text a token covers. O(1): a view into `source`.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[std::ops::Range::<usize>::from(token.span)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<SyntaxKind> {
        lex(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn punctuation_and_keyword() {
        use SyntaxKind::*;
        assert_eq!(
            kinds("class Main : Object { }"),
            vec![KwClass, Cid, Colon, Cid, LBrace, RBrace]
        );
    }

    #[test]
    fn keyword_selector_fragment() {
        use SyntaxKind::*;
        assert_eq!(kinds("add:"), vec![IdColon]);
        assert_eq!(kinds("add: x"), vec![IdColon, Id]);
    }

    #[test]
    fn block_parameter() {
        use SyntaxKind::*;
        assert_eq!(kinds(":x"), vec![ColonId]);
    }

    #[test]
    fn integers() {
        use SyntaxKind::*;
        assert_eq!(kinds("0"), vec![Int]);
        assert_eq!(kinds("-5"), vec![Int]);
        assert_eq!(kinds("+5"), vec![Int]);
        assert_eq!(kinds("42"), vec![Int]);
    }

    #[test]
    fn leading_zero_is_rejected_as_a_single_zero_token() {
        // '0' lexes as Int, then '1' lexes as a second Int -- the parser, not
        // the lexer, is responsible for rejecting the resulting malformed
        // program (there is no valid grammar production for two adjacent
        // integer literals), matching the "leading zeros forbidden" rule
        // being a lexical consequence of the regex rather than a special case.
        use SyntaxKind::*;
        assert_eq!(kinds("01"), vec![Int, Int]);
    }

    #[test]
    fn string_with_escapes() {
        use SyntaxKind::*;
        assert_eq!(kinds(r"'hello \n \\ \' world'"), vec![Str]);
    }

    #[test]
    fn comment_is_skipped() {
        use SyntaxKind::*;
        assert_eq!(
            kinds("\"a doc comment\nspanning lines\" class Main : Object {}"),
            vec![KwClass, Cid, Colon, Cid, LBrace, RBrace]
        );
    }

    #[test]
    fn unrecognized_byte_is_lexical_error() {
        let err = lex("class Main : Object { run [ | x := 1 $ ] }").unwrap_err();
        assert!(matches!(err, Error::Lexical { .. }));
    }

    #[test]
    fn self_super_nil_true_false_are_plain_identifiers() {
        use SyntaxKind::*;
        assert_eq!(
            kinds("self super nil true false"),
            vec![Id, Id, Id, Id, Id]
        );
    }
}
