pub const DEFAULT_LOG_PATH: &str = "logs/app.log";

pub const BUILTIN_MODULES: &[&str] = &["search-api", "poke-api", "poke-stats", "poke-images"];
