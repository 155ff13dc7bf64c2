//! Node properties loading
//!
//! Layers, lowest precedence first:
//! 1. built-in defaults (`NodeProperties::default`)
//! 2. a properties file (TOML/YAML/JSON, picked by extension)
//! 3. `PREFLIGHT_*` environment variables (e.g. `PREFLIGHT_ES_HEAP_SIZE=2g`)
//!
//! CLI flags are applied on top by the caller.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

use preflight_core::domain::NodeProperties;

/// Properties file read when `--config` is not given (optional)
pub const DEFAULT_CONFIG_FILE: &str = "preflight.toml";

/// Environment variable prefix for node properties
pub const ENV_PREFIX: &str = "PREFLIGHT";

/// Load node properties from the file (if any) and the process environment
///
/// An explicitly given file must exist; the default file is optional.
pub fn load_properties(path: Option<&Path>) -> Result<NodeProperties> {
    build_properties(path, Environment::with_prefix(ENV_PREFIX))
}

fn build_properties(path: Option<&Path>, env: Environment) -> Result<NodeProperties> {
    let (file, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    let settings = Config::builder()
        .add_source(File::from(file.as_path()).required(required))
        .add_source(env)
        .build()
        .with_context(|| format!("Failed to load properties from {}", file.display()))?;

    let mut properties: NodeProperties = settings
        .try_deserialize()
        .context("Invalid node properties")?;

    properties.install_path = expand_path(&properties.install_path);
    Ok(properties)
}

/// Expand `~` and `$VAR` in a configured path
pub fn expand_path(path: &Path) -> PathBuf {
    match shellexpand::full(&path.to_string_lossy()) {
        Ok(expanded) => PathBuf::from(expanded.into_owned()),
        Err(_) => path.to_path_buf(),
    }
}
