//! The class table: `name -> parent name`, registered in declaration order
//! (spec §4.4 Phase 1).
//!
//! Uses `indexmap::IndexMap` rather than `std::collections::HashMap` for the
//! same reason the teacher's symbol tables do (`analyze/symbol_table.rs`,
//! `query/symbol_table.rs`): lookups must be O(1), but iteration order still
//! needs to follow declaration order for deterministic diagnostics.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::ast::is_builtin_class;

#[derive(Debug, Default)]
pub struct ClassTable {
    parents: IndexMap<String, String>,
}

impl ClassTable {
    pub fn new() -> Self {
        Self {
            parents: IndexMap::new(),
        }
    }

    pub fn register(&mut self, name: String, parent: String) {
        self.parents.insert(name, parent);
    }

    pub fn is_user_class(&self, name: &str) -> bool {
        self.parents.contains_key(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        is_builtin_class(name) || self.is_user_class(name)
    }

    pub fn has_main(&self) -> bool {
        self.parents.contains_key("Main")
    }

    fn parent_of(&self, name: &str) -> Option<&str> {
        self.parents.get(name).map(|s| s.as_str())
    }

    /// True if ascending from `class` through user-class parents revisits
    /// any class already seen (including `class` itself) before reaching a
    /// builtin. The original implementation (`original_source/src/parse.py`,
    /// `check_cyclic_inheritance`) only re-checks against the starting
    /// class, which can loop forever on a cycle that doesn't pass back
    /// through the start (e.g. `A:B`, `B:C`, `C:B`, checked from `A`). We
    /// track the full visited set instead, so ascent always terminates —
    /// see `DESIGN.md`.
    pub fn has_cycle_from(&self, class: &str) -> bool {
        let mut visited = HashSet::new();
        visited.insert(class);
        let mut current = class;
        loop {
            let Some(parent) = self.parent_of(current) else {
                return false;
            };
            if is_builtin_class(parent) {
                return false;
            }
            if !visited.insert(parent) {
                return true;
            }
            current = parent;
        }
    }

    /// Whether `class` is `base` or has `base` in its ancestor chain.
    /// `Object` is an ancestor of every class (spec §4.4).
    pub fn is_subclass(&self, class: &str, base: &str) -> bool {
        if class == base || base == "Object" {
            return true;
        }
        if is_builtin_class(class) {
            return false;
        }
        let mut current = class;
        loop {
            let Some(parent) = self.parent_of(current) else {
                return false;
            };
            if parent == base {
                return true;
            }
            if is_builtin_class(parent) {
                return false;
            }
            current = parent;
        }
    }
}
