//! Pass 1: wrap declarator initializers and call-site function literals.
//!
//! ```text
//! var a;              ->  var a = new Proxy.Variable();
//! var b = 42;         ->  var b = new Proxy.Variable(42);
//! var f = x => x;     ->  var f = new Proxy.Function(x => x);
//! list.map(x => x);   ->  list.map(new Proxy.Function(x => x));
//! ```
//!
//! Declarators with a destructuring target, and the declarator of a
//! `for-in`/`for-of` head, are left alone.

use jspector_parser::Node;
use jspector_parser::ast::{NodeKind, Visitor, replace};
use rustc_hash::FxHashSet;
use tracing::{debug, debug_span, trace};

use super::take;
use crate::factory::{NodeFactory, ProxyKind, Skeleton};

/// Rewrites made by one run of the pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassifyCounts {
    pub declarators: usize,
    pub function_literals: usize,
    pub call_arguments: usize,
}

pub fn run(program: &mut Node, factory: NodeFactory<'_>, unwrap_call_arguments: bool) -> ClassifyCounts {
    let _span = debug_span!("classify_declarators").entered();
    let variable_bindings = unwrap_call_arguments.then(|| {
        let mut bindings = FxHashSet::default();
        collect_variable_bindings(program, &mut bindings);
        debug!(bindings = bindings.len(), "variable proxy bindings");
        bindings
    });
    let mut pass = DeclaratorClassifier {
        factory,
        variable_bindings,
        pending_for_head: 0,
        counts: ClassifyCounts::default(),
    };
    replace(program, &mut pass);
    debug!(
        declarators = pass.counts.declarators,
        function_literals = pass.counts.function_literals,
        call_arguments = pass.counts.call_arguments,
        "classified"
    );
    pass.counts
}

struct DeclaratorClassifier<'a> {
    factory: NodeFactory<'a>,
    /// Names bound to variable proxies; `None` unless call arguments are unwrapped.
    variable_bindings: Option<FxHashSet<String>>,
    /// Declarators of the current `for-in`/`for-of` head not yet visited.
    pending_for_head: usize,
    counts: ClassifyCounts,
}

impl Visitor for DeclaratorClassifier<'_> {
    fn enter(&mut self, node: &mut Node, _parent: Option<NodeKind>) -> Option<Node> {
        match node {
            Node::ForInStatement { left, .. } | Node::ForOfStatement { left, .. } => {
                // The head is the first child, so its declarators are the next ones entered.
                if let Node::VariableDeclaration { declarations, .. } = left.as_ref() {
                    self.pending_for_head = declarations.len();
                }
            }
            Node::VariableDeclarator { id, init } => {
                if self.pending_for_head > 0 {
                    self.pending_for_head -= 1;
                    return None;
                }
                let Node::Identifier { name } = id.as_ref() else {
                    return None;
                };
                let body = init.take().map(|init| *init);
                let kind = ProxyKind::for_value(body.as_ref());
                trace!(%name, ?kind, "wrapping declarator");
                *init = Some(Box::new(
                    self.factory.synthesize(Skeleton::ProxyConstruct { kind, body }),
                ));
                self.counts.declarators += 1;
            }
            Node::CallExpression {
                callee, arguments, ..
            } => {
                self.wrap_function_literal(callee);
                for argument in arguments.iter_mut() {
                    self.wrap_function_literal(argument);
                    self.unwrap_call_argument(argument);
                }
            }
            _ => {}
        }
        None
    }
}

impl DeclaratorClassifier<'_> {
    fn wrap_function_literal(&mut self, slot: &mut Node) {
        if !slot.is_function_expression() {
            return;
        }
        let function = take(slot);
        trace!(kind = ?function.kind(), "wrapping function literal");
        *slot = self.factory.synthesize(Skeleton::ProxyConstruct {
            kind: ProxyKind::Function,
            body: Some(function),
        });
        self.counts.function_literals += 1;
    }

    fn unwrap_call_argument(&mut self, argument: &mut Node) {
        let Some(bindings) = &self.variable_bindings else {
            return;
        };
        let Some(name) = argument.identifier_name() else {
            return;
        };
        if !bindings.contains(name) {
            return;
        }
        let name = name.to_string();
        trace!(%name, "unwrapping call argument");
        *argument = self.factory.synthesize(Skeleton::AccessorRead { name });
        self.counts.call_arguments += 1;
    }
}

/// Names that the pass will bind to a variable proxy anywhere in `node`.
fn collect_variable_bindings(node: &Node, bindings: &mut FxHashSet<String>) {
    match node {
        Node::ForInStatement { right, body, .. } | Node::ForOfStatement { right, body, .. } => {
            collect_variable_bindings(right, bindings);
            collect_variable_bindings(body, bindings);
            return;
        }
        Node::VariableDeclarator { id, init } => {
            if let Node::Identifier { name } = id.as_ref() {
                if ProxyKind::for_value(init.as_deref()) == ProxyKind::Variable {
                    bindings.insert(name.clone());
                }
            }
        }
        _ => {}
    }
    for child in node.children() {
        collect_variable_bindings(child, bindings);
    }
}
