//! Recursive-descent parser over the lexer's token stream.
//!
//! See `core` for the token cursor and `grammar` for the production rules
//! (spec §4.2). The module boundary mirrors the teacher's `parser::core` /
//! `parser::grammar` split.

mod core;
mod grammar;

pub use self::core::Parser;

use crate::Error;
use crate::ast::Program;
use crate::lexer::lex;

/// Lexes and parses `source` into a [`Program`]. The returned AST's `doc`
/// field is always `None` — doc-comment extraction (§4.5) runs independently
/// on the raw source and is stitched on by [`crate::compile`].
pub fn parse(source: &str) -> Result<Program, Error> {
    let tokens = lex(source)?;
    let mut parser = Parser::new(source, tokens);
    parser.parse_program()
}
