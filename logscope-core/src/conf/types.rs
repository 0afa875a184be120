use crate::conf::constants::{BUILTIN_MODULES, DEFAULT_LOG_PATH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Represents the top-level configuration file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EntrypointConfig {
    #[serde(rename = "module", default)]
    pub modules: Vec<ModuleConfig>,
}

/// One analyzable service and the glob locating its log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    pub name: String,
    pub path: String,
}

/// Immutable module table handed to the analyzer.
///
/// `root` is the directory that relative module paths are resolved against:
/// the config file's directory, or the working directory for the built-in
/// table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzerConfig {
    pub root: PathBuf,
    pub modules: Vec<ModuleConfig>,
}

impl AnalyzerConfig {
    pub fn builtin() -> Self {
        Self {
            root: PathBuf::from("."),
            modules: BUILTIN_MODULES
                .iter()
                .map(|name| ModuleConfig {
                    name: (*name).to_string(),
                    path: format!("../{name}/{DEFAULT_LOG_PATH}"),
                })
                .collect(),
        }
    }
}
