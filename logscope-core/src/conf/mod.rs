mod constants;
mod discover;
mod error;
mod loader;
mod registry;
mod types;

#[cfg(test)]
mod tests;

pub use constants::{BUILTIN_MODULES, DEFAULT_LOG_PATH};
pub use discover::{discover, resolve_glob};
pub use error::ConfigError;
pub use loader::{load_config, load_or_builtin};
pub use registry::ModuleRegistry;
pub use types::{AnalyzerConfig, EntrypointConfig, ModuleConfig};
