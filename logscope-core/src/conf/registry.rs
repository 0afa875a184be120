use crate::analyze::AnalyzeError;
use crate::conf::discover::{discover, resolve_glob};
use crate::conf::types::AnalyzerConfig;
use indexmap::IndexMap;
use std::path::PathBuf;

/// Module name → log path pattern lookup.
#[derive(Debug, Clone)]
pub struct ModuleRegistry {
    root: PathBuf,
    patterns: IndexMap<String, String>,
}

impl ModuleRegistry {
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            root: config.root.clone(),
            patterns: config
                .modules
                .iter()
                .map(|m| (m.name.clone(), m.path.clone()))
                .collect(),
        }
    }

    pub fn contains(&self, module: &str) -> bool {
        self.patterns.contains_key(module)
    }

    /// Configured modules with their patterns resolved against the root.
    pub fn entries(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.patterns
            .iter()
            .map(|(name, pattern)| (name.as_str(), resolve_glob(&self.root, pattern)))
    }

    /// Returns the first file (in sorted order) matching the module's pattern.
    pub fn resolve(&self, module: &str) -> Result<PathBuf, AnalyzeError> {
        let pattern = self
            .patterns
            .get(module)
            .ok_or_else(|| AnalyzeError::ModuleNotFound {
                module: module.to_string(),
            })?;

        discover(&self.root, pattern)?
            .into_iter()
            .next()
            .ok_or_else(|| AnalyzeError::SourceUnavailable {
                module: module.to_string(),
                pattern: resolve_glob(&self.root, pattern),
            })
    }
}
