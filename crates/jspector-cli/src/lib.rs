//! Command-line front end for the jspector source rewriter.
//!
//! - `args` - clap argument definitions
//! - `config` - `jspector.json` loading and option resolution
//! - `driver` - input discovery, per-file rewriting and output placement
//! - `reporter` - parse error formatting
//! - `runtime` - the embedded JavaScript proxy runtime
//! - `tracing_config` - opt-in tracing subscriber

pub mod args;
pub mod config;
pub mod driver;
pub mod reporter;
pub mod runtime;
pub mod tracing_config;
