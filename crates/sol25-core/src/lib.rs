//! SOL25: lexer, parser, static semantic analyzer, and XML emitter for the
//! SOL25 language front-end.
//!
//! # Example
//!
//! ```
//! use sol25_core::compile;
//!
//! let xml = compile("class Main : Object { run [ | ] }").expect("valid program");
//! assert!(xml.contains(r#"<class name="Main" parent="Object">"#));
//! ```

pub mod analyze;
pub mod ast;
pub mod doc_comment;
pub mod emit;
mod error;
pub mod lexer;
pub mod parser;

pub use error::{Error, Result};

use ast::Program;

/// Runs the full pipeline (spec §4.7): lex, parse, attach the doc comment,
/// validate, and emit. Stops at the first failure.
pub fn compile(source: &str) -> Result<String> {
    let mut program: Program = parser::parse(source)?;
    program.doc = doc_comment::extract_doc_comment(source);
    analyze::analyze(&program)?;
    Ok(emit::emit(&program))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_program_compiles() {
        let xml = compile("class Main : Object { run [ | ] }").unwrap();
        assert!(xml.contains(r#"<class name="Main" parent="Object">"#));
    }

    #[test]
    fn doc_comment_is_attached_before_emission() {
        let xml = compile(r#""hello" class Main : Object { run [ | ] }"#).unwrap();
        assert!(xml.contains(r#"description="hello""#));
    }

    #[test]
    fn lexical_error_propagates() {
        let err = compile("class Main : Object { run [ | x := 1 $ ] }").unwrap_err();
        assert_eq!(err.exit_code(), 21);
    }

    #[test]
    fn semantic_error_propagates() {
        let err = compile("class Foo : Object { bar [ | ] }").unwrap_err();
        assert_eq!(err.exit_code(), 31);
    }
}
