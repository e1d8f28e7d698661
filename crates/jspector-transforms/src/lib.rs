//! Proxy instrumentation for JavaScript sources.
//!
//! The pipeline rewrites a parsed program so every binding and function value
//! goes through an observable proxy object:
//! - `factory` - typed construction of proxy constructors and accessor calls
//! - `passes` - the five ordered rewrite passes plus the client import
//! - `pipeline` - parse, run the passes in order, print
//!
//! Binding correlation is purely by name. Shadowed names in nested scopes
//! are rewritten the same way as the outer binding.

pub mod context;
pub use context::{ProxyNames, TransformOptions};

pub mod factory;
pub use factory::{NodeFactory, ProxyKind, Skeleton};

pub mod passes;

pub mod pipeline;
pub use pipeline::{
    PassStats, TransformError, TransformOutput, transform, transform_program,
    transform_with_stats,
};
