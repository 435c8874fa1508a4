//! The front-end's error type and its mapping to process exit codes.
//!
//! Mirrors the teacher's `Error` (`plotnik-lib/src/lib.rs`): a small
//! `thiserror` enum with one variant per failure *kind*, not per message.
//! Unlike the teacher, every variant here also has a fixed exit code (§6 of
//! the spec), since that table — not a rendered diagnostic — is this
//! front-end's real contract with its caller.

use rowan::TextRange;

/// A single fatal failure of the front-end pipeline.
///
/// The front-end stops at the first failure (spec §7): there is no
/// diagnostic collection, only ever one `Error` in flight.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("lexical error at {range:?}: unrecognized input")]
    Lexical { range: TextRange },

    #[error("syntax error at {range:?}: {message}")]
    Syntactic { range: TextRange, message: String },

    #[error("no Main class or no run method")]
    NoMainOrRun,

    #[error("{message}")]
    NoDefinition { message: String },

    #[error("{message}")]
    BadArity { message: String },

    #[error("{message}")]
    Collision { message: String },

    #[error("{message}")]
    OtherSemantic { message: String },

    /// Never constructed by this hand-written pipeline; documents exit code
    /// 99 for callers that match exhaustively on exit codes.
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// The exit code this error maps to, per spec §6.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Lexical { .. } => 21,
            Error::Syntactic { .. } => 22,
            Error::NoMainOrRun => 31,
            Error::NoDefinition { .. } => 32,
            Error::BadArity { .. } => 33,
            Error::Collision { .. } => 34,
            Error::OtherSemantic { .. } => 35,
            Error::Internal(_) => 99,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
