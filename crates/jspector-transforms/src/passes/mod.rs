//! Rewrite passes, in pipeline order.
//!
//! Each pass is a single top-down [`replace`](jspector_parser::ast::replace)
//! sweep. A node the pass does not recognize is left untouched and traversal
//! continues into its children, so unsupported constructs are emitted as
//! written. Order matters:
//!
//! 1. `classify_declarators` wraps declarator initializers and function
//!    literals at call sites in proxy constructors
//! 2. `hoist_functions` turns function declarations into proxy-backed `const`
//!    bindings; it runs after pass 1 so nothing is wrapped twice
//! 3. `assignments` turns writes into `set` calls
//! 4. `updates` turns `++`/`--` into `set(get() +/- 1)`
//! 5. `constructor_arguments` unwraps identifiers passed to proxy constructors
//!
//! `client_import` optionally runs last.

pub mod assignments;
pub mod classify_declarators;
pub mod client_import;
pub mod constructor_arguments;
pub mod hoist_functions;
pub mod updates;

use jspector_parser::Node;

/// Move a node out of its slot, leaving an empty statement behind.
pub(crate) fn take(slot: &mut Node) -> Node {
    std::mem::replace(slot, Node::EmptyStatement)
}
