//! Input discovery, per-file rewriting and output placement.
//!
//! Inputs are files or directories; directories are walked for `.js`, `.mjs`
//! and `.cjs` files. A file that cannot be read or fails to parse is reported
//! and skipped, and the run carries on with the remaining files.
//!
//! Under `--out-dir`, a file input keeps its path relative to the working
//! directory and a directory input's files keep their path below that
//! directory. Two inputs that map to the same output path are an error.

use anyhow::{Context, Result, bail};
use std::io::{Read, Write};
use rustc_hash::FxHashSet;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use jspector_parser::parse_program;
use jspector_transforms::{TransformError, TransformOptions, transform_program, transform_with_stats};

use crate::args::CliArgs;
use crate::config::{self, ResolvedOptions};
use crate::reporter::Reporter;
use crate::runtime;

const SCRIPT_EXTENSIONS: [&str; 3] = ["js", "mjs", "cjs"];

/// Label used in diagnostics for source read from stdin.
pub const STDIN_LABEL: &str = "<stdin>";

/// Streams the driver reads from and writes to.
pub struct DriverIo<'a> {
    pub stdin: &'a mut dyn Read,
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
    /// Color parse errors written to `stderr`.
    pub color: bool,
}

/// A discovered input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInput {
    pub path: PathBuf,
    /// Path below `--out-dir` where the output goes.
    pub relative: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverOutcome {
    pub processed: usize,
    pub failed: usize,
}

impl DriverOutcome {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.failed == 0
    }
}

pub fn run(args: &CliArgs, cwd: &Path, io: &mut DriverIo<'_>) -> Result<DriverOutcome> {
    let config = config::load_for_args(args, cwd)?;
    let resolved = config::resolve_options(args, &config, cwd);
    debug!(?resolved, "resolved options");

    if let Some(path) = &args.emit_runtime {
        runtime::write_runtime(&cwd.join(path))?;
    }

    let reporter = Reporter::new(io.color);
    let mut outcome = DriverOutcome::default();

    if args.inputs.is_empty() {
        // `--emit-runtime` alone does not wait on stdin.
        if args.emit_runtime.is_some() {
            return Ok(outcome);
        }
        let mut source = String::new();
        io.stdin
            .read_to_string(&mut source)
            .context("failed to read stdin")?;
        outcome.processed += 1;
        match rewrite_or_report(&source, STDIN_LABEL, &resolved, args.dump_ast, &reporter, io)? {
            Some(output) => io
                .stdout
                .write_all(output.as_bytes())
                .context("failed to write stdout")?,
            None => outcome.failed += 1,
        }
        report_summary(&outcome, io)?;
        return Ok(outcome);
    }

    let sources = discover_sources(&args.inputs, cwd)?;
    info!(files = sources.len(), "discovered sources");
    if resolved.out_dir.is_some() {
        check_output_collisions(&sources)?;
    }
    for input in &sources {
        let label = input
            .path
            .strip_prefix(cwd)
            .unwrap_or(&input.path)
            .display()
            .to_string();
        outcome.processed += 1;

        let source = match std::fs::read_to_string(&input.path) {
            Ok(source) => source,
            Err(err) => {
                warn!(input = %label, %err, "unreadable input");
                let message = format!("failed to read file: {err}");
                writeln!(io.stderr, "{}", reporter.format_file_error(&label, &message))
                    .context("failed to write stderr")?;
                outcome.failed += 1;
                continue;
            }
        };

        let Some(output) =
            rewrite_or_report(&source, &label, &resolved, args.dump_ast, &reporter, io)?
        else {
            outcome.failed += 1;
            continue;
        };

        match &resolved.out_dir {
            Some(out_dir) => {
                let target = output_path(out_dir, &input.relative, args.dump_ast);
                write_output(&target, &output)?;
                info!(input = %label, output = %target.display(), "rewrote file");
            }
            None => io
                .stdout
                .write_all(output.as_bytes())
                .context("failed to write stdout")?,
        }
    }

    report_summary(&outcome, io)?;
    Ok(outcome)
}

/// Collect the script files named by `inputs`, resolved against `cwd`.
pub fn discover_sources(inputs: &[PathBuf], cwd: &Path) -> Result<Vec<SourceInput>> {
    let mut sources = Vec::new();
    for input in inputs {
        let root = cwd.join(input);
        if root.is_dir() {
            for entry in WalkDir::new(&root).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
                let path = entry.path();
                if !entry.file_type().is_file() || !is_script(path) {
                    continue;
                }
                let relative = path.strip_prefix(&root).unwrap_or(path).to_path_buf();
                sources.push(SourceInput {
                    path: path.to_path_buf(),
                    relative,
                });
            }
        } else if root.is_file() {
            let relative = file_output_path(&root, cwd);
            sources.push(SourceInput {
                path: root,
                relative,
            });
        } else {
            bail!("input not found: {}", input.display());
        }
    }
    Ok(sources)
}

/// Path of a file input below `cwd`, or only its file name when the file
/// lies outside `cwd`.
fn file_output_path(path: &Path, cwd: &Path) -> PathBuf {
    match path.strip_prefix(cwd) {
        Ok(relative)
            if relative
                .components()
                .all(|component| matches!(component, Component::Normal(_))) =>
        {
            relative.to_path_buf()
        }
        _ => path
            .file_name()
            .map_or_else(|| path.to_path_buf(), PathBuf::from),
    }
}

/// Fail when two inputs would be written to the same place under `--out-dir`.
fn check_output_collisions(sources: &[SourceInput]) -> Result<()> {
    let mut seen = FxHashSet::default();
    for input in sources {
        if !seen.insert(input.relative.as_path()) {
            bail!(
                "{} would overwrite another output at {}",
                input.path.display(),
                input.relative.display()
            );
        }
    }
    Ok(())
}

fn is_script(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext))
}

/// Rewritten text, or `None` after reporting a parse error to `io.stderr`.
fn rewrite_or_report(
    source: &str,
    label: &str,
    resolved: &ResolvedOptions,
    dump_ast: bool,
    reporter: &Reporter,
    io: &mut DriverIo<'_>,
) -> Result<Option<String>> {
    match rewrite(source, &resolved.transform, dump_ast) {
        Ok(output) => Ok(Some(output)),
        Err(err) => match err.downcast::<TransformError>() {
            Ok(TransformError::Parse(error)) => {
                writeln!(io.stderr, "{}", reporter.format_parse_error(label, source, &error))
                    .context("failed to write stderr")?;
                Ok(None)
            }
            Err(err) => Err(err.context(format!("failed to rewrite {label}"))),
        },
    }
}

fn rewrite(source: &str, options: &TransformOptions, dump_ast: bool) -> Result<String> {
    if !dump_ast {
        let output = transform_with_stats(source, options)?;
        debug!(stats = ?output.stats, "rewrote source");
        return Ok(output.code);
    }
    let mut program = parse_program(source).map_err(TransformError::from)?;
    let stats = transform_program(&mut program, options);
    debug!(?stats, "rewrote syntax tree");
    let mut json =
        serde_json::to_string_pretty(&program).context("failed to serialize syntax tree")?;
    json.push('\n');
    Ok(json)
}

/// `<out_dir>/<relative>`, with `.json` appended for tree dumps.
fn output_path(out_dir: &Path, relative: &Path, dump_ast: bool) -> PathBuf {
    let target = out_dir.join(relative);
    if !dump_ast {
        return target;
    }
    let mut name = target.into_os_string();
    name.push(".json");
    PathBuf::from(name)
}

fn write_output(target: &Path, output: &str) -> Result<()> {
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(target, output)
        .with_context(|| format!("failed to write {}", target.display()))
}

fn report_summary(outcome: &DriverOutcome, io: &mut DriverIo<'_>) -> Result<()> {
    if outcome.success() {
        return Ok(());
    }
    let noun = if outcome.failed == 1 { "error" } else { "errors" };
    writeln!(io.stderr, "\nFound {} {noun}.", outcome.failed).context("failed to write stderr")
}

#[cfg(test)]
#[path = "../tests/driver_tests.rs"]
mod tests;
