//! `jspector.json` loading and option resolution.
//!
//! ```json
//! {
//!   "namespace": "Proxy",
//!   "runtimeModule": "jspector",
//!   "injectClient": true,
//!   "unwrapCallArguments": false,
//!   "outDir": "instrumented",
//!   "indent": "  "
//! }
//! ```
//!
//! Every key is optional. Command-line flags win over file values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use jspector_transforms::TransformOptions;

use crate::args::CliArgs;

pub const CONFIG_FILE_NAME: &str = "jspector.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JspectorConfig {
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub runtime_module: Option<String>,
    #[serde(default)]
    pub inject_client: Option<bool>,
    #[serde(default)]
    pub unwrap_call_arguments: Option<bool>,
    /// Relative paths are resolved against the directory of the config file.
    #[serde(default)]
    pub out_dir: Option<PathBuf>,
    #[serde(default)]
    pub indent: Option<String>,
}

/// Fully resolved settings for one CLI run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub transform: TransformOptions,
    pub out_dir: Option<PathBuf>,
}

pub fn parse_config(source: &str) -> Result<JspectorConfig> {
    serde_json::from_str(source).context("failed to parse jspector.json")
}

pub fn load_config(path: &Path) -> Result<JspectorConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let mut config =
        parse_config(&source).with_context(|| format!("invalid config: {}", path.display()))?;
    if let Some(out_dir) = config.out_dir.take() {
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.out_dir = Some(base.join(out_dir));
    }
    Ok(config)
}

/// `jspector.json` in `cwd`, if there is one.
pub fn find_config(cwd: &Path) -> Option<PathBuf> {
    let candidate = cwd.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Load the config named by `--config`, or the one in `cwd`; none is fine.
pub fn load_for_args(args: &CliArgs, cwd: &Path) -> Result<JspectorConfig> {
    let path = match &args.config {
        Some(path) => Some(cwd.join(path)),
        None => find_config(cwd),
    };
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_config(&path)
        }
        None => Ok(JspectorConfig::default()),
    }
}

/// Merge file values and command-line flags.
pub fn resolve_options(args: &CliArgs, config: &JspectorConfig, cwd: &Path) -> ResolvedOptions {
    let mut transform = TransformOptions::default();
    if let Some(namespace) = args.namespace.as_ref().or(config.namespace.as_ref()) {
        transform.names.namespace.clone_from(namespace);
    }
    if let Some(module) = args
        .runtime_module
        .as_ref()
        .or(config.runtime_module.as_ref())
    {
        transform.names.runtime_module.clone_from(module);
    }
    transform.inject_client = args.client || config.inject_client.unwrap_or(false);
    transform.unwrap_call_arguments =
        args.unwrap_call_arguments || config.unwrap_call_arguments.unwrap_or(false);
    if let Some(indent) = &config.indent {
        transform.printer.indent.clone_from(indent);
    }

    let out_dir = match &args.out_dir {
        Some(out_dir) => Some(cwd.join(out_dir)),
        None => config.out_dir.as_ref().map(|out_dir| cwd.join(out_dir)),
    };

    ResolvedOptions { transform, out_dir }
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod tests;
