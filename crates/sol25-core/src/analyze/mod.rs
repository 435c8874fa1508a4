//! Static semantic analysis (spec §4.4).
//!
//! Split the way the teacher splits its own multi-stage checks
//! (`plotnik-lib/src/diagnostics/`): a table (`class_table`), a resolution
//! context (`scope`), and the pass itself (`checker`).

mod checker;
mod class_table;
mod scope;

pub use checker::analyze;
