//! Typed abstract syntax tree for SOL25 (spec §3).
//!
//! Built directly by the parser's grammar functions (§4.3): there is no
//! intermediate concrete syntax tree to fold, since nothing downstream needs
//! a lossless view of the source.

use rowan::TextRange;

/// Identifiers that can never name a variable, parameter, or selector.
pub const RESERVED_KEYWORDS: &[&str] = &["class", "self", "super", "nil", "true", "false"];

/// Classes that exist without being declared in the program.
pub const BUILTIN_CLASSES: &[&str] = &["Object", "Nil", "True", "False", "Integer", "String", "Block"];

/// Class-side selectors every class supports without declaring them.
pub const UNIVERSAL_CLASS_SELECTORS: &[&str] = &["new", "from:"];

pub fn is_reserved_keyword(name: &str) -> bool {
    RESERVED_KEYWORDS.contains(&name)
}

pub fn is_builtin_class(name: &str) -> bool {
    BUILTIN_CLASSES.contains(&name)
}

/// Root of the tree: an ordered list of classes plus the program's optional
/// doc string (spec §3, §4.5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub classes: Vec<ClassDecl>,
    pub doc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: String,
    pub name_range: TextRange,
    pub parent: String,
    pub parent_range: TextRange,
    pub methods: Vec<MethodDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub selector: Selector,
    pub selector_range: TextRange,
    pub body: Block,
}

/// A unary or keyword selector (spec §3). Kept as a fragment list rather
/// than a pre-concatenated string so arity is a `Vec::len`, not a byte scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Unary(String),
    Keyword(Vec<String>),
}

impl Selector {
    pub fn arity(&self) -> usize {
        match self {
            Selector::Unary(_) => 0,
            Selector::Keyword(fragments) => fragments.len(),
        }
    }

    /// The concatenated textual form, e.g. `"add:and:"` or `"run"`.
    pub fn text(&self) -> String {
        match self {
            Selector::Unary(name) => name.clone(),
            Selector::Keyword(fragments) => fragments.concat(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub parameters: Vec<Parameter>,
    pub assignments: Vec<Assignment>,
    pub range: TextRange,
}

impl Block {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub var: String,
    pub var_range: TextRange,
    pub expr: Expression,
}

/// A receiver plus an optional message send (spec §3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub receiver: Atom,
    pub message: Message,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Empty,
    Unary { selector: String, range: TextRange },
    Keyword { args: Vec<KeywordArg> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordArg {
    pub fragment: String,
    pub arg: Atom,
}

impl Message {
    /// The concatenated selector text, or `None` for an empty message.
    pub fn selector_text(&self) -> Option<String> {
        match self {
            Message::Empty => None,
            Message::Unary { selector, .. } => Some(selector.clone()),
            Message::Keyword { args } => {
                Some(args.iter().map(|a| a.fragment.as_str()).collect())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    IntLiteral {
        digits: String,
        range: TextRange,
    },
    StrLiteral {
        value: String,
        range: TextRange,
    },
    VarRef {
        name: String,
        range: TextRange,
    },
    ClassRef {
        name: String,
        range: TextRange,
    },
    NestedExpr(Box<Expression>),
    BlockExpr(Box<Block>),
}

impl Atom {
    pub fn range(&self) -> TextRange {
        match self {
            Atom::IntLiteral { range, .. }
            | Atom::StrLiteral { range, .. }
            | Atom::VarRef { range, .. }
            | Atom::ClassRef { range, .. } => *range,
            Atom::NestedExpr(expr) => expr.range,
            Atom::BlockExpr(block) => block.range,
        }
    }
}
