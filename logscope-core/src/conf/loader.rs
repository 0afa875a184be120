use crate::conf::error::ConfigError;
use crate::conf::types::{AnalyzerConfig, EntrypointConfig, ModuleConfig};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads the module table from a TOML file.
///
/// Module paths in the file are relative to the file's own directory.
pub fn load_config(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let content = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let entry: EntrypointConfig =
        toml::from_str(&content).map_err(|e| ConfigError::parse(path, e))?;

    validate_modules(&entry.modules)?;

    let root = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    tracing::debug!(
        path = %path.display(),
        modules = entry.modules.len(),
        "loaded configuration"
    );

    Ok(AnalyzerConfig {
        root,
        modules: entry.modules,
    })
}

/// Loads `path` when given, the built-in module table otherwise.
pub fn load_or_builtin(path: Option<&Path>) -> Result<AnalyzerConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(AnalyzerConfig::builtin()),
    }
}

fn validate_modules(modules: &[ModuleConfig]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for module in modules {
        if module.name.trim().is_empty() {
            return Err(ConfigError::EmptyModuleName);
        }
        if module.path.trim().is_empty() {
            return Err(ConfigError::EmptyModulePath {
                name: module.name.clone(),
            });
        }
        if !seen.insert(module.name.as_str()) {
            return Err(ConfigError::DuplicateModule {
                name: module.name.clone(),
            });
        }
    }

    Ok(())
}
