use logscope_core::conf::{AnalyzerConfig, EntrypointConfig, ModuleConfig, load_config};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Throwaway workspace laid out like a deployment:
///
/// ```text
/// <tmp>/cli/logscope.toml
/// <tmp>/<module>/logs/app.log
/// ```
///
/// Module paths in the generated config are relative to `cli/`.
pub struct LogFixture {
    dir: TempDir,
    modules: Vec<ModuleConfig>,
}

impl LogFixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join("cli")).expect("failed to create cli dir");

        Self {
            dir,
            modules: Vec::new(),
        }
    }

    /// Writes `lines` as the module's `app.log` and registers the module.
    pub fn with_log(self, module: &str, lines: &[&str]) -> Self {
        let logs = self.dir.path().join(module).join("logs");
        fs::create_dir_all(&logs).expect("failed to create logs dir");

        let mut content = lines.join("\n");
        content.push('\n');
        fs::write(logs.join("app.log"), content).expect("failed to write log file");

        self.with_module(module, &format!("../{module}/logs/app.log"))
    }

    /// Registers a module without creating its log file.
    pub fn with_module(mut self, module: &str, path: &str) -> Self {
        self.modules.push(ModuleConfig {
            name: module.to_string(),
            path: path.to_string(),
        });
        self
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `cli/logscope.toml` and returns its path.
    pub fn config_path(&self) -> PathBuf {
        let content = toml::to_string(&EntrypointConfig {
            modules: self.modules.clone(),
        })
        .expect("failed to serialize fixture config");

        let path = self.dir.path().join("cli").join("logscope.toml");
        fs::write(&path, content).expect("failed to write config");
        path
    }

    pub fn load(&self) -> AnalyzerConfig {
        load_config(&self.config_path()).expect("failed to load fixture config")
    }
}

impl Default for LogFixture {
    fn default() -> Self {
        Self::new()
    }
}
