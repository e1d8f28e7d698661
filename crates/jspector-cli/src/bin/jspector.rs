use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;

use jspector_cli::args::CliArgs;
use jspector_cli::driver::{self, DriverIo};
use jspector_cli::tracing_config;

fn main() -> Result<ExitCode> {
    // Zero cost unless JSPECTOR_LOG or RUST_LOG is set.
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let stderr = std::io::stderr();
    let color = !args.no_color && stderr.is_terminal();
    let mut io = DriverIo {
        stdin: &mut std::io::stdin().lock(),
        stdout: &mut std::io::stdout().lock(),
        stderr: &mut stderr.lock(),
        color,
    };

    let outcome = driver::run(&args, &cwd, &mut io)?;
    Ok(if outcome.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
