//! Client import: `const Proxy = require('jspector');` at the top of the
//! outermost program. Nested programs never occur in a parsed tree, so the
//! root is the only place the statement can go.

use jspector_parser::Node;
use tracing::{debug, debug_span};

use crate::factory::NodeFactory;

/// Returns whether the statement was inserted; `false` when `root` is not a program.
pub fn run(root: &mut Node, factory: NodeFactory<'_>) -> bool {
    let _span = debug_span!("client_import").entered();
    let Node::Program { body } = root else {
        return false;
    };
    body.insert(0, factory.make_client_import());
    debug!(
        module = %factory.names().runtime_module,
        "injected client import"
    );
    true
}
