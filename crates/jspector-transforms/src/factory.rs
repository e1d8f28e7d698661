//! Node factory for synthesized code.
//!
//! Every structural edit made by the passes is "build a fragment, splice it
//! in place of the current node". Fragments are built directly as typed nodes,
//! so there is no text template and no reparse step.
//!
//! ```text
//! ProxyConstruct          new Proxy.Variable(<body>)  |  new Proxy.Function(<body>)
//! NamedProxyDeclaration   const <name> = new Proxy.Function(<body>);
//! AccessorRead            <name>.get()
//! AccessorWrite           <name>.set(<value>)
//! CompoundUpdate          <name>.set(<name>.get() <op> <value>)
//! ```

use jspector_parser::Node;
use jspector_parser::ast::{BinaryOperator, LiteralKind, VariableKind};

use crate::context::ProxyNames;

/// Which runtime wrapper a value is constructed with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProxyKind {
    Variable,
    Function,
}

impl ProxyKind {
    /// Function and arrow expressions get a function proxy, anything else a
    /// variable proxy.
    #[must_use]
    pub fn for_value(value: Option<&Node>) -> Self {
        match value {
            Some(value) if value.is_function_expression() => Self::Function,
            _ => Self::Variable,
        }
    }

    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Variable => ProxyNames::VARIABLE_TYPE,
            Self::Function => ProxyNames::FUNCTION_TYPE,
        }
    }
}

/// The closed set of fragments the passes can synthesize.
#[derive(Clone, Debug, PartialEq)]
pub enum Skeleton {
    /// `new <namespace>.<kind>(<body>)`; no argument when `body` is `None`.
    ProxyConstruct { kind: ProxyKind, body: Option<Node> },
    /// `const <name> = new <namespace>.<kind>(<body>);`
    NamedProxyDeclaration {
        name: String,
        kind: ProxyKind,
        body: Node,
    },
    AccessorRead { name: String },
    AccessorWrite { name: String, value: Node },
    CompoundUpdate {
        name: String,
        operator: BinaryOperator,
        value: Node,
    },
}

/// Builds the synthesized nodes for one transform run.
#[derive(Clone, Copy, Debug)]
pub struct NodeFactory<'a> {
    names: &'a ProxyNames,
}

impl<'a> NodeFactory<'a> {
    #[must_use]
    pub const fn new(names: &'a ProxyNames) -> Self {
        Self { names }
    }

    #[must_use]
    pub const fn names(&self) -> &'a ProxyNames {
        self.names
    }

    /// Fill a skeleton.
    #[must_use]
    pub fn synthesize(&self, skeleton: Skeleton) -> Node {
        match skeleton {
            Skeleton::ProxyConstruct { kind, body } => self.make_proxy_construct(kind, body),
            Skeleton::NamedProxyDeclaration { name, kind, body } => self
                .make_variable_declaration(
                    VariableKind::Const,
                    &name,
                    Some(self.make_proxy_construct(kind, Some(body))),
                ),
            Skeleton::AccessorRead { name } => self.make_accessor_read(&name),
            Skeleton::AccessorWrite { name, value } => {
                self.make_member_call(self.make_identifier(&name), "set", vec![value])
            }
            Skeleton::CompoundUpdate {
                name,
                operator,
                value,
            } => {
                let current = Node::binary(self.make_accessor_read(&name), operator, value);
                self.make_member_call(self.make_identifier(&name), "set", vec![current])
            }
        }
    }

    // =========================================================================
    // Builder primitives
    // =========================================================================

    #[must_use]
    pub fn make_identifier(&self, name: &str) -> Node {
        Node::ident(name)
    }

    /// `object.property`
    #[must_use]
    pub fn make_member(&self, object: Node, property: &str) -> Node {
        Node::member(object, property)
    }

    /// `new <namespace>.<type_name>(args)`
    #[must_use]
    pub fn make_new_expression(&self, type_name: &str, arguments: Vec<Node>) -> Node {
        let callee = self.make_member(self.make_identifier(&self.names.namespace), type_name);
        Node::new_expr(callee, arguments)
    }

    #[must_use]
    pub fn make_call_expression(&self, callee: Node, arguments: Vec<Node>) -> Node {
        Node::call(callee, arguments)
    }

    /// `object.method(args)`
    #[must_use]
    pub fn make_member_call(&self, object: Node, method: &str, arguments: Vec<Node>) -> Node {
        self.make_call_expression(self.make_member(object, method), arguments)
    }

    #[must_use]
    pub fn make_variable_declaration(
        &self,
        kind: VariableKind,
        name: &str,
        init: Option<Node>,
    ) -> Node {
        Node::var_decl(kind, name, init)
    }

    /// Single-quoted string literal.
    #[must_use]
    pub fn make_string_literal(&self, value: &str) -> Node {
        let mut raw = String::with_capacity(value.len() + 2);
        raw.push('\'');
        for ch in value.chars() {
            match ch {
                '\'' => raw.push_str("\\'"),
                '\\' => raw.push_str("\\\\"),
                '\n' => raw.push_str("\\n"),
                '\r' => raw.push_str("\\r"),
                _ => raw.push(ch),
            }
        }
        raw.push('\'');
        Node::Literal {
            kind: LiteralKind::String,
            raw,
        }
    }

    /// `const <namespace> = require('<runtime module>');`
    #[must_use]
    pub fn make_client_import(&self) -> Node {
        let require = self.make_call_expression(
            self.make_identifier("require"),
            vec![self.make_string_literal(&self.names.runtime_module)],
        );
        self.make_variable_declaration(VariableKind::Const, &self.names.namespace, Some(require))
    }

    fn make_proxy_construct(&self, kind: ProxyKind, body: Option<Node>) -> Node {
        self.make_new_expression(kind.type_name(), body.into_iter().collect())
    }

    fn make_accessor_read(&self, name: &str) -> Node {
        self.make_member_call(self.make_identifier(name), "get", Vec::new())
    }
}

#[cfg(test)]
#[path = "../tests/factory_tests.rs"]
mod tests;
