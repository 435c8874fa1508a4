//! Low-level parser state: token cursor, `bump`/`expect`, and the single
//! failure path every production shares.
//!
//! Modeled on the teacher's `Parser` (`plotnik-lib/src/parser/core.rs`):
//! a token vector plus a monotonically increasing position, with `bump`/
//! `expect` as the only ways to advance. Dropped relative to the teacher:
//! the `rowan::GreenNodeBuilder` tree, trivia buffering (the lexer already
//! strips trivia), checkpoints, and all recovery machinery — this parser
//! has exactly one way to fail, and it propagates immediately via `?`.

use rowan::TextRange;

use crate::Error;
use crate::lexer::{SyntaxKind, Token, token_text};

pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
        }
    }

    pub(super) fn current(&self) -> Option<SyntaxKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    pub(super) fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == Some(kind)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Span of the current token, or an empty span at end-of-input.
    pub(super) fn current_span(&self) -> TextRange {
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty((self.source.len() as u32).into()), |t| t.span)
    }

    pub(super) fn current_text(&self) -> &'src str {
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(self.source, t))
    }

    /// Consumes and returns the current token. Panics at EOF — callers must
    /// check `at`/`eof` first, mirroring the teacher's `bump` contract.
    pub(super) fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos];
        self.pos += 1;
        token
    }

    pub(super) fn bump_text(&mut self) -> (&'src str, TextRange) {
        let token = self.bump();
        (token_text(self.source, &token), token.span)
    }

    /// Consumes the current token if it matches `kind`, else fails with a
    /// syntactic error. Spec §4.2: "On any mismatch the parser fails with
    /// SYNTACTIC. Premature end-of-input is also SYNTACTIC."
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> Result<Token, Error> {
        if self.at(kind) {
            Ok(self.bump())
        } else {
            Err(self.error(what))
        }
    }

    pub(super) fn error(&self, what: &str) -> Error {
        let message = if self.eof() {
            format!("expected {what}, found end of input")
        } else {
            format!("expected {what}, found {:?} {:?}", self.current().unwrap(), self.current_text())
        };
        Error::Syntactic {
            range: self.current_span(),
            message,
        }
    }
}
