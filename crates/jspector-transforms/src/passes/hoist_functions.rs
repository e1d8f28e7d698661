//! Pass 2: function declarations become proxy-backed `const` bindings.
//!
//! ```text
//! function sum(x, y) { ... }  ->  const sum = new Proxy.Function(function sum(x, y) { ... });
//! ```
//!
//! Only declarations that sit directly in a statement list are rewritten; a
//! `const` is not allowed as the body of `if` or a label.

use jspector_parser::Node;
use jspector_parser::ast::{Function, NodeKind, Visitor, replace};
use tracing::{debug, debug_span, trace};

use super::take;
use crate::factory::{NodeFactory, ProxyKind, Skeleton};

pub fn run(program: &mut Node, factory: NodeFactory<'_>) -> usize {
    let _span = debug_span!("hoist_functions").entered();
    let mut pass = FunctionHoister {
        factory,
        rewrites: 0,
    };
    replace(program, &mut pass);
    debug!(rewrites = pass.rewrites, "hoisted function declarations");
    pass.rewrites
}

struct FunctionHoister<'a> {
    factory: NodeFactory<'a>,
    rewrites: usize,
}

impl Visitor for FunctionHoister<'_> {
    fn enter(&mut self, node: &mut Node, parent: Option<NodeKind>) -> Option<Node> {
        let name = match node {
            Node::FunctionDeclaration(Function { id: Some(name), .. })
                if is_statement_list(parent) =>
            {
                name.clone()
            }
            _ => return None,
        };
        let Node::FunctionDeclaration(function) = take(node) else {
            return None;
        };
        trace!(%name, "hoisting function declaration");
        self.rewrites += 1;
        Some(self.factory.synthesize(Skeleton::NamedProxyDeclaration {
            name,
            kind: ProxyKind::Function,
            body: Node::FunctionExpression(function),
        }))
    }
}

const fn is_statement_list(parent: Option<NodeKind>) -> bool {
    matches!(
        parent,
        Some(NodeKind::Program | NodeKind::BlockStatement | NodeKind::SwitchCase)
    )
}
