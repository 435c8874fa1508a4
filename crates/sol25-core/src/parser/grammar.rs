//! Grammar productions (spec §4.2), each building its typed AST node
//! directly (spec §4.3) — see `parser::core` for why there is no
//! intermediate tree to fold.
//!
//! ```text
//! program     := class_def*
//! class_def   := 'class' CID ':' CID '{' method* '}'
//! method      := selector block
//! selector    := ID | ID_COLON+
//! block       := '[' block_par* '|' block_stat* ']'
//! block_par   := COLON_ID
//! block_stat  := ID ':=' expr '.'
//! expr        := expr_atom expr_tail
//! expr_tail   := ε | ID | ( ID_COLON expr_atom )+
//! expr_atom   := '(' expr ')' | block | ID | CID | INT | STR
//! ```

use rowan::TextRange;

use super::core::Parser;
use crate::Error;
use crate::ast::*;
use crate::lexer::SyntaxKind;

fn join(a: TextRange, b: TextRange) -> TextRange {
    TextRange::new(a.start().min(b.start()), a.end().max(b.end()))
}

impl<'src> Parser<'src> {
    pub fn parse_program(&mut self) -> Result<Program, Error> {
        let mut classes = Vec::new();
        while !self.eof() {
            classes.push(self.parse_class_def()?);
        }
        Ok(Program { classes, doc: None })
    }

    fn parse_class_def(&mut self) -> Result<ClassDecl, Error> {
        self.expect(SyntaxKind::KwClass, "'class'")?;
        let (name, name_range) = self.expect_cid("a class name")?;
        self.expect(SyntaxKind::Colon, "':'")?;
        let (parent, parent_range) = self.expect_cid("a parent class name")?;
        self.expect(SyntaxKind::LBrace, "'{'")?;

        let mut methods = Vec::new();
        while !self.at(SyntaxKind::RBrace) {
            if self.eof() {
                return Err(self.error("'}'"));
            }
            methods.push(self.parse_method()?);
        }
        self.expect(SyntaxKind::RBrace, "'}'")?;

        Ok(ClassDecl {
            name,
            name_range,
            parent,
            parent_range,
            methods,
        })
    }

    fn parse_method(&mut self) -> Result<MethodDecl, Error> {
        let (selector, selector_range) = self.parse_selector()?;
        let body = self.parse_block()?;
        Ok(MethodDecl {
            selector,
            selector_range,
            body,
        })
    }

    fn parse_selector(&mut self) -> Result<(Selector, TextRange), Error> {
        if self.at(SyntaxKind::Id) {
            let (text, range) = self.bump_text();
            return Ok((Selector::Unary(text.to_string()), range));
        }
        if self.at(SyntaxKind::IdColon) {
            let mut fragments = Vec::new();
            let mut range = self.current_span();
            while self.at(SyntaxKind::IdColon) {
                let (text, frag_range) = self.bump_text();
                fragments.push(text.to_string());
                range = join(range, frag_range);
            }
            return Ok((Selector::Keyword(fragments), range));
        }
        Err(self.error("a selector"))
    }

    fn parse_block(&mut self) -> Result<Block, Error> {
        let open = self.expect(SyntaxKind::LBracket, "'['")?;

        let mut parameters = Vec::new();
        while self.at(SyntaxKind::ColonId) {
            let (text, range) = self.bump_text();
            parameters.push(Parameter {
                name: text[1..].to_string(),
                range,
            });
        }

        self.expect(SyntaxKind::Pipe, "'|'")?;

        let mut assignments = Vec::new();
        while !self.at(SyntaxKind::RBracket) {
            if self.eof() {
                return Err(self.error("']'"));
            }
            assignments.push(self.parse_assignment()?);
        }
        let close = self.expect(SyntaxKind::RBracket, "']'")?;

        Ok(Block {
            parameters,
            assignments,
            range: join(open.span, close.span),
        })
    }

    fn parse_assignment(&mut self) -> Result<Assignment, Error> {
        let (var, var_range) = self.expect_id("a variable name")?;
        self.expect(SyntaxKind::Assign, "':='")?;
        let expr = self.parse_expr()?;
        self.expect(SyntaxKind::Dot, "'.'")?;
        Ok(Assignment {
            var,
            var_range,
            expr,
        })
    }

    fn parse_expr(&mut self) -> Result<Expression, Error> {
        let receiver = self.parse_expr_atom()?;
        let receiver_range = receiver.range();
        let message = self.parse_expr_tail()?;
        let range = match &message {
            Message::Empty => receiver_range,
            Message::Unary { range, .. } => join(receiver_range, *range),
            Message::Keyword { args } => args.iter().fold(receiver_range, |acc, arg| {
                join(acc, arg.arg.range())
            }),
        };
        Ok(Expression {
            receiver,
            message,
            range,
        })
    }

    /// Greedy: once a keyword fragment starts a message, consume the longest
    /// run of `ID_COLON expr_atom` pairs available (spec §4.2 tie-break).
    fn parse_expr_tail(&mut self) -> Result<Message, Error> {
        if self.at(SyntaxKind::Id) {
            let (text, range) = self.bump_text();
            return Ok(Message::Unary {
                selector: text.to_string(),
                range,
            });
        }
        if self.at(SyntaxKind::IdColon) {
            let mut args = Vec::new();
            while self.at(SyntaxKind::IdColon) {
                let (text, _) = self.bump_text();
                let arg = self.parse_expr_atom()?;
                args.push(KeywordArg {
                    fragment: text.to_string(),
                    arg,
                });
            }
            return Ok(Message::Keyword { args });
        }
        Ok(Message::Empty)
    }

    fn parse_expr_atom(&mut self) -> Result<Atom, Error> {
        match self.current() {
            Some(SyntaxKind::LParen) => {
                self.bump();
                let inner = self.parse_expr()?;
                self.expect(SyntaxKind::RParen, "')'")?;
                Ok(Atom::NestedExpr(Box::new(inner)))
            }
            Some(SyntaxKind::LBracket) => Ok(Atom::BlockExpr(Box::new(self.parse_block()?))),
            Some(SyntaxKind::Id) => {
                let (text, range) = self.bump_text();
                Ok(Atom::VarRef {
                    name: text.to_string(),
                    range,
                })
            }
            Some(SyntaxKind::Cid) => {
                let (text, range) = self.bump_text();
                Ok(Atom::ClassRef {
                    name: text.to_string(),
                    range,
                })
            }
            Some(SyntaxKind::Int) => {
                let (text, range) = self.bump_text();
                Ok(Atom::IntLiteral {
                    digits: text.to_string(),
                    range,
                })
            }
            Some(SyntaxKind::Str) => {
                let (text, range) = self.bump_text();
                // Strip the delimiting quotes only; escape sequences are kept
                // raw in the AST (spec §4.3).
                let value = text[1..text.len() - 1].to_string();
                Ok(Atom::StrLiteral { value, range })
            }
            _ => Err(self.error("an expression")),
        }
    }

    fn expect_cid(&mut self, what: &str) -> Result<(String, TextRange), Error> {
        if self.at(SyntaxKind::Cid) {
            let (text, range) = self.bump_text();
            Ok((text.to_string(), range))
        } else {
            Err(self.error(what))
        }
    }

    fn expect_id(&mut self, what: &str) -> Result<(String, TextRange), Error> {
        if self.at(SyntaxKind::Id) {
            let (text, range) = self.bump_text();
            Ok((text.to_string(), range))
        } else {
            Err(self.error(what))
        }
    }
}
