//! XML emission (spec §4.6): walks the validated AST into the fixed
//! element schema and pretty-prints it. There is no XML crate in the
//! dependency stack — the schema is small, fixed, and entirely our own, so
//! a hand-written writer is simpler than adapting a general-purpose one.

use crate::ast::*;


const INDENT: &str = "  ";

struct Writer {
    out: String,
    depth: usize,
}

impl Writer {
    fn new() -> Self {
        Self {
            out: String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"),
            depth: 0,
        }
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
    }

    fn open(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.indent();
        self.out.push('<');
        self.out.push_str(name);
        for (key, value) in attrs {
            self.out.push(' ');
            self.out.push_str(key);
            self.out.push_str("=\"");
            escape_into(&mut self.out, value);
            self.out.push('"');
        }
        self.out.push_str(">\n");
        self.depth += 1;
    }

    fn close(&mut self, name: &str) {
        self.depth -= 1;
        self.indent();
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push_str(">\n");
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.indent();
        self.out.push('<');
        self.out.push_str(name);
        for (key, value) in attrs {
            self.out.push(' ');
            self.out.push_str(key);
            self.out.push_str("=\"");
            escape_into(&mut self.out, value);
            self.out.push('"');
        }
        self.out.push_str(" />\n");
    }
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
}

/// Renders a validated [`Program`] as the spec's XML document. Callers are
/// expected to have run [`crate::analyze::analyze`] first — this function
/// does not re-check anything.
pub fn emit(program: &Program) -> String {
    let mut w = Writer::new();

    let mut attrs = vec![("language", "SOL25")];
    if let Some(doc) = &program.doc {
        attrs.push(("description", doc.as_str()));
    }
    w.open("program", &attrs);
    for class in &program.classes {
        emit_class(&mut w, class);
    }
    w.close("program");

    w.out
}

fn emit_class(w: &mut Writer, class: &ClassDecl) {
    w.open("class", &[("name", &class.name), ("parent", &class.parent)]);
    for method in &class.methods {
        emit_method(w, method);
    }
    w.close("class");
}

fn emit_method(w: &mut Writer, method: &MethodDecl) {
    let selector = method.selector.text();
    w.open("method", &[("selector", &selector)]);
    emit_block(w, &method.body);
    w.close("method");
}

fn emit_block(w: &mut Writer, block: &Block) {
    let arity = block.arity().to_string();
    w.open("block", &[("arity", &arity)]);
    for (i, param) in block.parameters.iter().enumerate() {
        let order = (i + 1).to_string();
        w.empty("parameter", &[("name", &param.name), ("order", &order)]);
    }
    for (i, assignment) in block.assignments.iter().enumerate() {
        emit_assignment(w, assignment, i + 1);
    }
    w.close("block");
}

fn emit_assignment(w: &mut Writer, assignment: &Assignment, order: usize) {
    let order = order.to_string();
    w.open("assign", &[("order", &order)]);
    w.empty("var", &[("name", &assignment.var)]);
    emit_expr_wrapper(w, &assignment.expr);
    w.close("assign");
}

/// Opens the `<expr>` wrapper required around an assignment's right-hand
/// side, then emits its content, then closes it.
fn emit_expr_wrapper(w: &mut Writer, expr: &Expression) {
    w.open("expr", &[]);
    emit_expr_content(w, expr);
    w.close("expr");
}

/// Emits the content of an `<expr>` whose opening/closing tags the caller
/// already wrote: either one literal/var/block (empty message) or one
/// `send` (non-empty message).
fn emit_expr_content(w: &mut Writer, expr: &Expression) {
    match expr.message.selector_text() {
        None => emit_atom(w, &expr.receiver),
        Some(selector) => {
            w.open("send", &[("selector", &selector)]);
            emit_expr_wrapper(w, &receiver_as_expression(expr));
            if let Message::Keyword { args } = &expr.message {
                for (i, arg) in args.iter().enumerate() {
                    emit_argument(w, &arg.arg, i + 1);
                }
            }
            w.close("send");
        }
    }
}

/// The receiver on its own, as if it were an expression with an empty
/// message — used to give the receiver its own `<expr>` wrapper inside a
/// `<send>` (spec §4.6: "receiver emitted as `expr`").
fn receiver_as_expression(expr: &Expression) -> Expression {
    Expression {
        receiver: expr.receiver.clone(),
        message: Message::Empty,
        range: expr.receiver.range(),
    }
}

fn emit_argument(w: &mut Writer, arg: &Atom, order: usize) {
    let order = order.to_string();
    w.open("arg", &[("order", &order)]);
    emit_atom_wrapper(w, arg);
    w.close("arg");
}

/// Arguments and nested receivers are atoms, not expressions, but the
/// schema still wants them inside an `expr` element unless they're already
/// a `send`'s receiver — both call sites here need exactly one `<expr>`.
fn emit_atom_wrapper(w: &mut Writer, atom: &Atom) {
    w.open("expr", &[]);
    emit_atom(w, atom);
    w.close("expr");
}

fn emit_atom(w: &mut Writer, atom: &Atom) {
    match atom {
        Atom::IntLiteral { digits, .. } => {
            w.empty("literal", &[("class", "Integer"), ("value", digits)]);
        }
        Atom::StrLiteral { value, .. } => {
            w.empty("literal", &[("class", "String"), ("value", value)]);
        }
        Atom::VarRef { name, .. } if matches!(name.as_str(), "nil" | "true" | "false") => {
            let class_name = capitalize(name);
            w.empty("literal", &[("class", &class_name), ("value", name)]);
        }
        Atom::VarRef { name, .. } => {
            w.empty("var", &[("name", name)]);
        }
        Atom::ClassRef { name, .. } => {
            w.empty("literal", &[("class", "class"), ("value", name)]);
        }
        Atom::NestedExpr(inner) => emit_expr_content(w, inner),
        Atom::BlockExpr(block) => emit_block(w, block),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn minimal_program() {
        let mut program = parse("class Main : Object { run [ | ] }").unwrap();
        program.doc = None;
        let xml = emit(&program);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(xml.contains(r#"<program language="SOL25">"#));
        assert!(xml.contains(r#"<class name="Main" parent="Object">"#));
        assert!(xml.contains(r#"<method selector="run">"#));
        assert!(xml.contains(r#"<block arity="0">"#));
    }

    #[test]
    fn doc_comment_becomes_description_attribute() {
        let mut program = parse("class Main : Object { run [ | ] }").unwrap();
        program.doc = Some("hello world".into());
        let xml = emit(&program);
        assert!(xml.contains(r#"description="hello world""#));
    }

    #[test]
    fn nil_true_false_are_literals() {
        let mut program =
            parse("class Main : Object { run [ | x := nil. y := true. z := false. ] }")
                .unwrap();
        program.doc = None;
        let xml = emit(&program);
        assert!(xml.contains(r#"<literal class="Nil" value="nil" />"#));
        assert!(xml.contains(r#"<literal class="True" value="true" />"#));
        assert!(xml.contains(r#"<literal class="False" value="false" />"#));
    }

    #[test]
    fn keyword_send_emits_receiver_and_args() {
        let mut program = parse(
            "class Main : Object { run [ | x := 1 add: 2 and: 3. ] }",
        )
        .unwrap();
        program.doc = None;
        let xml = emit(&program);
        assert!(xml.contains(r#"<send selector="add:and:">"#));
        assert!(xml.contains(r#"<arg order="1">"#));
        assert!(xml.contains(r#"<arg order="2">"#));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let mut program =
            parse(r#"class Main : Object { run [ | x := '<&"'. ] }"#).unwrap();
        program.doc = None;
        let xml = emit(&program);
        assert!(xml.contains("&lt;&amp;&quot;"));
    }
}
