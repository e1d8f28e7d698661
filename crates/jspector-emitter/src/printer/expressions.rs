//! Expression, pattern and class-member emission.

use jspector_parser::Node;
use jspector_parser::ast::{BinaryOperator, Class, Function, MethodKind, PropertyKind};

use super::Printer;
use super::precedence::{
    NEEDS_PARENTHESES, PRECEDENCE_ASSIGNMENT, PRECEDENCE_CONDITIONAL, PRECEDENCE_MEMBER,
    expression_precedence, needs_parentheses,
};

impl Printer {
    pub(super) fn emit_expression(&mut self, node: &Node) {
        match node {
            Node::Identifier { name } => self.write(name),
            Node::Literal { raw, .. } => self.write(raw),
            Node::ThisExpression => self.write("this"),
            Node::Super => self.write("super"),
            Node::TemplateLiteral {
                quasis,
                expressions,
            } => self.emit_template_literal(quasis, expressions),
            Node::TaggedTemplateExpression { tag, quasi } => {
                self.emit_callee(tag, false);
                self.emit_expression(quasi);
            }
            Node::ArrayExpression { elements } | Node::ArrayPattern { elements } => {
                self.emit_array_elements(elements);
            }
            Node::ObjectExpression { properties } => self.emit_object_expression(properties),
            Node::ObjectPattern { properties } => {
                self.write_char('{');
                self.emit_comma_separated(properties);
                self.write_char('}');
            }
            Node::Property {
                key,
                value,
                kind,
                computed,
                shorthand,
                method,
            } => {
                if *method || *kind != PropertyKind::Init {
                    let method_kind = match kind {
                        PropertyKind::Get => MethodKind::Get,
                        PropertyKind::Set => MethodKind::Set,
                        PropertyKind::Init => MethodKind::Method,
                    };
                    self.emit_method(key, value, method_kind, *computed, false);
                } else {
                    if !*shorthand {
                        self.emit_property_key(key, *computed);
                        self.write(": ");
                    }
                    self.emit_expression(value);
                }
            }
            Node::FunctionExpression(function) => self.emit_function(function),
            Node::ArrowFunctionExpression {
                params,
                body,
                is_async,
                ..
            } => self.emit_arrow_function(params, body, *is_async),
            Node::ClassExpression(class) => self.emit_class(class),
            Node::MethodDefinition {
                key,
                value,
                kind,
                computed,
                is_static,
            } => self.emit_method(key, value, *kind, *computed, *is_static),
            Node::UnaryExpression { operator, argument } => {
                let text = operator.as_str();
                self.write(text);
                let parenthesize = needs_parentheses(argument, node, false);
                if !parenthesize && (text.len() > 1 || repeats_sign(text, argument)) {
                    self.write_char(' ');
                }
                if parenthesize {
                    self.write(if text.len() > 1 { " (" } else { "(" });
                    self.emit_expression(argument);
                    self.write_char(')');
                } else {
                    self.emit_expression(argument);
                }
            }
            Node::UpdateExpression {
                operator,
                prefix,
                argument,
            } => {
                if *prefix {
                    self.write(operator.as_str());
                    self.emit_expression(argument);
                } else {
                    self.emit_expression(argument);
                    self.write(operator.as_str());
                }
            }
            Node::BinaryExpression {
                operator,
                left,
                right,
            } => {
                // `in` is always parenthesized so it cannot leak into a `for` head.
                let is_in = *operator == BinaryOperator::In;
                if is_in {
                    self.write_char('(');
                }
                self.emit_operand(left, node, false);
                self.write_char(' ');
                self.write(operator.as_str());
                self.write_char(' ');
                self.emit_operand(right, node, true);
                if is_in {
                    self.write_char(')');
                }
            }
            Node::LogicalExpression {
                operator,
                left,
                right,
            } => {
                self.emit_operand(left, node, false);
                self.write_char(' ');
                self.write(operator.as_str());
                self.write_char(' ');
                self.emit_operand(right, node, true);
            }
            Node::AssignmentExpression {
                operator,
                left,
                right,
            } => {
                self.emit_expression(left);
                self.write_char(' ');
                self.write(operator.as_str());
                self.write_char(' ');
                self.emit_expression(right);
            }
            Node::AssignmentPattern { left, right } => {
                self.emit_expression(left);
                self.write(" = ");
                self.emit_expression(right);
            }
            Node::ConditionalExpression {
                test,
                consequent,
                alternate,
            } => {
                let precedence = expression_precedence(test);
                if precedence == NEEDS_PARENTHESES || precedence <= PRECEDENCE_CONDITIONAL {
                    self.emit_parenthesized(test);
                } else {
                    self.emit_expression(test);
                }
                self.write(" ? ");
                self.emit_expression(consequent);
                self.write(" : ");
                self.emit_expression(alternate);
            }
            Node::CallExpression {
                callee,
                arguments,
                optional,
            } => {
                self.emit_callee(callee, false);
                if *optional {
                    self.write("?.");
                }
                self.emit_sequence(arguments);
            }
            Node::NewExpression { callee, arguments } => {
                self.write("new ");
                self.emit_callee(callee, true);
                self.emit_sequence(arguments);
            }
            Node::MemberExpression {
                object,
                property,
                computed,
                optional,
            } => {
                self.emit_callee(object, false);
                if *computed {
                    if *optional {
                        self.write("?.");
                    }
                    self.write_char('[');
                    self.emit_expression(property);
                    self.write_char(']');
                } else {
                    self.write(if *optional { "?." } else { "." });
                    self.emit_expression(property);
                }
            }
            Node::SequenceExpression { expressions } => self.emit_sequence(expressions),
            Node::SpreadElement { argument } | Node::RestElement { argument } => {
                self.write("...");
                self.emit_expression(argument);
            }
            Node::YieldExpression { argument, delegate } => {
                self.write(if *delegate { "yield*" } else { "yield" });
                if let Some(argument) = argument {
                    self.write_char(' ');
                    self.emit_expression(argument);
                }
            }
            Node::AwaitExpression { argument } => {
                self.write("await ");
                self.emit_operand(argument, node, false);
            }
            Node::VariableDeclarator { id, init } => {
                self.emit_expression(id);
                if let Some(init) = init {
                    self.write(" = ");
                    self.emit_expression(init);
                }
            }
            _ => self.emit_statement(node),
        }
    }

    /// Operand of a unary, binary or logical expression.
    fn emit_operand(&mut self, node: &Node, parent: &Node, is_right_hand: bool) {
        if needs_parentheses(node, parent, is_right_hand) {
            self.emit_parenthesized(node);
        } else {
            self.emit_expression(node);
        }
    }

    pub(super) fn emit_parenthesized(&mut self, node: &Node) {
        self.write_char('(');
        self.emit_expression(node);
        self.write_char(')');
    }

    /// Callee of a call or `new`, object of a member access, or template tag.
    fn emit_callee(&mut self, callee: &Node, is_new: bool) {
        let precedence = expression_precedence(callee);
        if precedence == NEEDS_PARENTHESES
            || precedence < PRECEDENCE_MEMBER
            || (is_new && has_call_expression(callee))
        {
            self.emit_parenthesized(callee);
        } else {
            self.emit_expression(callee);
        }
    }

    /// `(a, b, c)`
    pub(super) fn emit_sequence(&mut self, nodes: &[Node]) {
        self.write_char('(');
        self.emit_comma_separated(nodes);
        self.write_char(')');
    }

    fn emit_comma_separated(&mut self, nodes: &[Node]) {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_expression(node);
        }
    }

    fn emit_array_elements(&mut self, elements: &[Option<Node>]) {
        self.write_char('[');
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            if let Some(element) = element {
                self.emit_expression(element);
            }
        }
        // A trailing hole needs its own comma to survive.
        if matches!(elements.last(), Some(None)) {
            self.write(", ");
        }
        self.write_char(']');
    }

    fn emit_object_expression(&mut self, properties: &[Node]) {
        if properties.is_empty() {
            self.write("{}");
            return;
        }
        self.write_char('{');
        self.write_line();
        self.increase_indent();
        for (i, property) in properties.iter().enumerate() {
            if i > 0 {
                self.write_char(',');
                self.write_line();
            }
            self.write_indent();
            self.emit_expression(property);
        }
        self.write_line();
        self.decrease_indent();
        self.write_indent();
        self.write_char('}');
    }

    fn emit_property_key(&mut self, key: &Node, computed: bool) {
        if computed {
            self.write_char('[');
            self.emit_expression(key);
            self.write_char(']');
        } else {
            self.emit_expression(key);
        }
    }

    fn emit_template_literal(&mut self, quasis: &[String], expressions: &[Node]) {
        self.write_char('`');
        for (quasi, expression) in quasis.iter().zip(expressions) {
            self.write(quasi);
            self.write("${");
            self.emit_expression(expression);
            self.write_char('}');
        }
        if let Some(last) = quasis.get(expressions.len()) {
            self.write(last);
        }
        self.write_char('`');
    }

    // =========================================================================
    // Functions and classes
    // =========================================================================

    pub(super) fn emit_function(&mut self, function: &Function) {
        if function.is_async {
            self.write("async ");
        }
        self.write(if function.is_generator {
            "function* "
        } else {
            "function "
        });
        if let Some(id) = &function.id {
            self.write(id);
        }
        self.emit_sequence(&function.params);
        self.write_char(' ');
        self.emit_statement(&function.body);
    }

    fn emit_arrow_function(&mut self, params: &[Node], body: &Node, is_async: bool) {
        if is_async {
            self.write("async ");
        }
        match params {
            [Node::Identifier { name }] => self.write(name),
            _ => self.emit_sequence(params),
        }
        self.write(" => ");
        if matches!(body, Node::ObjectExpression { .. }) {
            self.emit_parenthesized(body);
        } else {
            self.emit_expression(body);
        }
    }

    pub(super) fn emit_class(&mut self, class: &Class) {
        self.write("class ");
        if let Some(id) = &class.id {
            self.write(id);
            self.write_char(' ');
        }
        if let Some(super_class) = &class.super_class {
            self.write("extends ");
            let precedence = expression_precedence(super_class);
            let is_class = matches!(super_class.as_ref(), Node::ClassExpression(_));
            if !is_class && (precedence == NEEDS_PARENTHESES || precedence < PRECEDENCE_MEMBER) {
                self.emit_parenthesized(super_class);
            } else {
                self.emit_expression(super_class);
            }
            self.write_char(' ');
        }
        self.emit_block(&class.body);
    }

    fn emit_method(
        &mut self,
        key: &Node,
        value: &Node,
        kind: MethodKind,
        computed: bool,
        is_static: bool,
    ) {
        if is_static {
            self.write("static ");
        }
        match kind {
            MethodKind::Get => self.write("get "),
            MethodKind::Set => self.write("set "),
            MethodKind::Constructor | MethodKind::Method => {}
        }
        let Node::FunctionExpression(function) = value else {
            // Methods always carry a function value; print anything else as-is.
            self.emit_property_key(key, computed);
            self.write(": ");
            self.emit_expression(value);
            return;
        };
        if function.is_async {
            self.write("async ");
        }
        if function.is_generator {
            self.write_char('*');
        }
        self.emit_property_key(key, computed);
        self.emit_sequence(&function.params);
        self.write_char(' ');
        self.emit_statement(&function.body);
    }

    /// Statement position: an expression that would be read as a declaration
    /// or a block is parenthesized.
    pub(super) fn emit_expression_statement(&mut self, expression: &Node) {
        let precedence = expression_precedence(expression);
        let object_pattern_assignment = precedence == PRECEDENCE_ASSIGNMENT
            && matches!(
                expression,
                Node::AssignmentExpression { left, .. }
                    if matches!(left.as_ref(), Node::ObjectPattern { .. })
            );
        if precedence == NEEDS_PARENTHESES || object_pattern_assignment {
            self.emit_parenthesized(expression);
        } else {
            self.emit_expression(expression);
        }
        self.write_char(';');
    }
}

/// `- -x` and `+ +x` must not fuse into `--x` / `++x`.
fn repeats_sign(sign: &str, argument: &Node) -> bool {
    let argument_operator = match argument {
        Node::UnaryExpression { operator, .. } => operator.as_str(),
        Node::UpdateExpression {
            operator,
            prefix: true,
            ..
        } => operator.as_str(),
        _ => return false,
    };
    matches!(sign, "+" | "-") && argument_operator.starts_with(sign)
}

/// `new (a().b)()` needs parentheses so the inner call is not taken as the `new` arguments.
fn has_call_expression(node: &Node) -> bool {
    let mut current = node;
    loop {
        match current {
            Node::CallExpression { .. } => return true,
            Node::MemberExpression { object, .. } => current = object,
            Node::TaggedTemplateExpression { tag, .. } => current = tag,
            _ => return false,
        }
    }
}
