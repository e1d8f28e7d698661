//! Statement emission.

use jspector_parser::Node;
use jspector_parser::ast::VariableKind;

use super::Printer;

impl Printer {
    /// Emit a statement without leading indentation or trailing line break.
    pub(super) fn emit_statement(&mut self, node: &Node) {
        match node {
            Node::Program { body } => self.emit_program(body),
            Node::ExpressionStatement { expression } => self.emit_expression_statement(expression),
            Node::BlockStatement { body } => self.emit_block(body),
            Node::EmptyStatement => self.write_char(';'),
            Node::DebuggerStatement => self.write("debugger;"),
            Node::ReturnStatement { argument } => {
                self.write("return");
                if let Some(argument) = argument {
                    self.write_char(' ');
                    self.emit_expression(argument);
                }
                self.write_char(';');
            }
            Node::ThrowStatement { argument } => {
                self.write("throw ");
                self.emit_expression(argument);
                self.write_char(';');
            }
            Node::BreakStatement { label } => self.emit_jump("break", label.as_deref()),
            Node::ContinueStatement { label } => self.emit_jump("continue", label.as_deref()),
            Node::IfStatement {
                test,
                consequent,
                alternate,
            } => {
                self.write("if (");
                self.emit_expression(test);
                self.write(") ");
                self.emit_statement(consequent);
                if let Some(alternate) = alternate {
                    self.write(" else ");
                    self.emit_statement(alternate);
                }
            }
            Node::WhileStatement { test, body } => {
                self.write("while (");
                self.emit_expression(test);
                self.write(") ");
                self.emit_statement(body);
            }
            Node::DoWhileStatement { body, test } => {
                self.write("do ");
                self.emit_statement(body);
                self.write(" while (");
                self.emit_expression(test);
                self.write(");");
            }
            Node::ForStatement {
                init,
                test,
                update,
                body,
            } => {
                self.write("for (");
                if let Some(init) = init {
                    self.emit_for_head_left(init);
                }
                self.write("; ");
                if let Some(test) = test {
                    self.emit_expression(test);
                }
                self.write("; ");
                if let Some(update) = update {
                    self.emit_expression(update);
                }
                self.write(") ");
                self.emit_statement(body);
            }
            Node::ForInStatement { left, right, body } => {
                self.emit_for_in_of(left, " in ", right, body);
            }
            Node::ForOfStatement { left, right, body } => {
                self.emit_for_in_of(left, " of ", right, body);
            }
            Node::TryStatement {
                block,
                handler,
                finalizer,
            } => {
                self.write("try ");
                self.emit_statement(block);
                if let Some(handler) = handler {
                    self.emit_statement(handler);
                }
                if let Some(finalizer) = finalizer {
                    self.write(" finally ");
                    self.emit_statement(finalizer);
                }
            }
            Node::CatchClause { param, body } => {
                match param {
                    Some(param) => {
                        self.write(" catch (");
                        self.emit_expression(param);
                        self.write(") ");
                    }
                    None => self.write(" catch "),
                }
                self.emit_statement(body);
            }
            Node::SwitchStatement {
                discriminant,
                cases,
            } => {
                self.write("switch (");
                self.emit_expression(discriminant);
                self.write(") {");
                self.write_line();
                self.increase_indent();
                for case in cases {
                    self.write_indent();
                    self.emit_statement(case);
                }
                self.decrease_indent();
                self.write_indent();
                self.write_char('}');
            }
            Node::SwitchCase { test, consequent } => {
                match test {
                    Some(test) => {
                        self.write("case ");
                        self.emit_expression(test);
                        self.write_char(':');
                    }
                    None => self.write("default:"),
                }
                self.write_line();
                self.increase_indent();
                for statement in consequent {
                    self.write_indent();
                    self.emit_statement(statement);
                    self.write_line();
                }
                self.decrease_indent();
            }
            Node::LabeledStatement { label, body } => {
                self.write(label);
                self.write(": ");
                self.emit_statement(body);
            }
            Node::VariableDeclaration { kind, declarations } => {
                self.emit_variable_declaration(*kind, declarations);
                self.write_char(';');
            }
            Node::FunctionDeclaration(function) => self.emit_function(function),
            Node::ClassDeclaration(class) => self.emit_class(class),
            _ => self.emit_expression(node),
        }
    }

    /// `{`, one indented line per statement, `}`; `{}` when empty.
    pub(super) fn emit_block(&mut self, body: &[Node]) {
        self.write_char('{');
        if !body.is_empty() {
            self.write_line();
            self.increase_indent();
            for statement in body {
                self.write_indent();
                self.emit_statement(statement);
                self.write_line();
            }
            self.decrease_indent();
            self.write_indent();
        }
        self.write_char('}');
    }

    fn emit_jump(&mut self, keyword: &str, label: Option<&str>) {
        self.write(keyword);
        if let Some(label) = label {
            self.write_char(' ');
            self.write(label);
        }
        self.write_char(';');
    }

    /// Declaration without its terminating semicolon, as used in `for` heads.
    fn emit_variable_declaration(&mut self, kind: VariableKind, declarations: &[Node]) {
        self.write(kind.as_str());
        self.write_char(' ');
        for (i, declarator) in declarations.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_expression(declarator);
        }
    }

    fn emit_for_head_left(&mut self, node: &Node) {
        match node {
            Node::VariableDeclaration { kind, declarations } => {
                self.emit_variable_declaration(*kind, declarations);
            }
            _ => self.emit_expression(node),
        }
    }

    fn emit_for_in_of(&mut self, left: &Node, keyword: &str, right: &Node, body: &Node) {
        self.write("for (");
        self.emit_for_head_left(left);
        self.write(keyword);
        self.emit_expression(right);
        self.write(") ");
        self.emit_statement(body);
    }
}
