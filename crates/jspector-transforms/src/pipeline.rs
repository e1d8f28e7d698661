//! Orchestrator: parse, run the passes in order, print.
//!
//! The output is a pure function of the input text and the options. Running
//! the pipeline on its own output wraps everything a second time.

use jspector_emitter::Printer;
use jspector_parser::{Node, ParseError, parse_program};
use thiserror::Error;
use tracing::{debug, debug_span};

use crate::context::TransformOptions;
use crate::factory::NodeFactory;
use crate::passes::{
    assignments, classify_declarators, client_import, constructor_arguments, hoist_functions,
    updates,
};

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Number of nodes each pass rewrote.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    pub declarators_wrapped: usize,
    pub function_literals_wrapped: usize,
    pub call_arguments_unwrapped: usize,
    pub functions_hoisted: usize,
    pub assignments_rewritten: usize,
    pub updates_rewritten: usize,
    pub constructor_arguments_unwrapped: usize,
    pub client_injected: bool,
}

impl PassStats {
    /// Rewritten nodes across all passes, the client import excluded.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.declarators_wrapped
            + self.function_literals_wrapped
            + self.call_arguments_unwrapped
            + self.functions_hoisted
            + self.assignments_rewritten
            + self.updates_rewritten
            + self.constructor_arguments_unwrapped
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformOutput {
    pub code: String,
    pub stats: PassStats,
}

/// Rewrite `source` and return the instrumented text.
pub fn transform(source: &str, options: &TransformOptions) -> Result<String, TransformError> {
    transform_with_stats(source, options).map(|output| output.code)
}

pub fn transform_with_stats(
    source: &str,
    options: &TransformOptions,
) -> Result<TransformOutput, TransformError> {
    let _span = debug_span!("transform", bytes = source.len()).entered();
    let mut program = parse_program(source)?;
    let stats = transform_program(&mut program, options);

    let mut printer = Printer::with_source_len(options.printer.clone(), source.len());
    printer.emit(&program);
    let code = printer.take_output();
    debug!(rewrites = stats.total(), bytes = code.len(), "transform complete");
    Ok(TransformOutput { code, stats })
}

/// Run every pass over an already parsed program.
pub fn transform_program(program: &mut Node, options: &TransformOptions) -> PassStats {
    let factory = NodeFactory::new(&options.names);

    let classified = classify_declarators::run(program, factory, options.unwrap_call_arguments);
    let mut stats = PassStats {
        declarators_wrapped: classified.declarators,
        function_literals_wrapped: classified.function_literals,
        call_arguments_unwrapped: classified.call_arguments,
        ..PassStats::default()
    };
    stats.functions_hoisted = hoist_functions::run(program, factory);
    stats.assignments_rewritten = assignments::run(program, factory);
    stats.updates_rewritten = updates::run(program, factory);
    stats.constructor_arguments_unwrapped = constructor_arguments::run(program, factory);
    if options.inject_client {
        stats.client_injected = client_import::run(program, factory);
    }
    stats
}
