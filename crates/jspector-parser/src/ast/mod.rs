//! Owned syntax tree.
//!
//! Every node exclusively owns its children. Rewrite passes replace nodes in
//! place through [`visit::replace`]; nothing is shared and nothing outlives a
//! single parse/rewrite/print run.

mod node;
pub mod operators;
pub mod visit;

pub use node::*;
pub use operators::{
    AssignmentOperator, BinaryOperator, LogicalOperator, UnaryOperator, UpdateOperator,
};
pub use visit::{Visitor, replace, walk};
