use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the jspector binary.
#[derive(Parser, Debug, Default)]
#[command(
    name = "jspector",
    version,
    about = "Rewrite JavaScript so every binding and function goes through an observable proxy"
)]
pub struct CliArgs {
    /// Files or directories to rewrite. Source is read from stdin when none are given.
    pub inputs: Vec<PathBuf>,

    /// Write rewritten files here, mirroring the input names, instead of to stdout.
    #[arg(short = 'o', long = "out-dir", alias = "outDir")]
    pub out_dir: Option<PathBuf>,

    /// Prepend `const <namespace> = require('<runtime module>');` to every output.
    #[arg(long)]
    pub client: bool,

    /// Binding that holds the proxy runtime in generated code.
    #[arg(long)]
    pub namespace: Option<String>,

    /// Module specifier required by the client import.
    #[arg(long = "runtime-module", alias = "runtimeModule")]
    pub runtime_module: Option<String>,

    /// Read identifier call arguments that name a variable proxy through `get()`.
    #[arg(long = "unwrap-call-arguments", alias = "unwrapCallArguments")]
    pub unwrap_call_arguments: bool,

    /// Path to a jspector.json file. Defaults to ./jspector.json when present.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Print the rewritten syntax tree as JSON instead of source.
    #[arg(long = "dump-ast", alias = "dumpAst")]
    pub dump_ast: bool,

    /// Write the JavaScript proxy runtime to this path.
    #[arg(long = "emit-runtime", alias = "emitRuntime")]
    pub emit_runtime: Option<PathBuf>,

    /// Disable colored error output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[cfg(test)]
#[path = "../tests/args_tests.rs"]
mod tests;
