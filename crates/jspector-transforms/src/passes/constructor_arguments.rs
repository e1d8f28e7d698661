//! Pass 5: identifiers passed to a proxy constructor are read through `get`.
//!
//! ```text
//! var y = new Proxy.Variable(x);  ->  var y = new Proxy.Variable(x.get());
//! ```

use jspector_parser::Node;
use jspector_parser::ast::{NodeKind, Visitor, replace};
use tracing::{debug, debug_span, trace};

use crate::context::ProxyNames;
use crate::factory::{NodeFactory, Skeleton};

pub fn run(program: &mut Node, factory: NodeFactory<'_>) -> usize {
    let _span = debug_span!("constructor_arguments").entered();
    let mut pass = ConstructorArgumentRewriter {
        factory,
        rewrites: 0,
    };
    replace(program, &mut pass);
    debug!(rewrites = pass.rewrites, "unwrapped constructor arguments");
    pass.rewrites
}

struct ConstructorArgumentRewriter<'a> {
    factory: NodeFactory<'a>,
    rewrites: usize,
}

impl Visitor for ConstructorArgumentRewriter<'_> {
    fn enter(&mut self, node: &mut Node, _parent: Option<NodeKind>) -> Option<Node> {
        let Node::VariableDeclarator {
            init: Some(init), ..
        } = node
        else {
            return None;
        };
        let Node::NewExpression { callee, arguments } = init.as_mut() else {
            return None;
        };
        if !is_proxy_constructor(callee, self.factory.names()) {
            return None;
        }
        for argument in arguments.iter_mut() {
            let Some(name) = argument.identifier_name() else {
                continue;
            };
            let name = name.to_string();
            trace!(%name, "unwrapping constructor argument");
            *argument = self.factory.synthesize(Skeleton::AccessorRead { name });
            self.rewrites += 1;
        }
        None
    }
}

/// `<namespace>.Variable` or `<namespace>.Function`.
fn is_proxy_constructor(callee: &Node, names: &ProxyNames) -> bool {
    let Node::MemberExpression {
        object,
        property,
        computed: false,
        ..
    } = callee
    else {
        return false;
    };
    match (object.identifier_name(), property.identifier_name()) {
        (Some(object), Some(property)) => names.is_proxy_type(object, property),
        _ => false,
    }
}
