use crate::analyze::AnalyzeError;
use crate::conf::{ModuleRegistry, load_or_builtin};
use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ModulesArgs {
    /// Path to a module config file (TOML). Built-in modules are used when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Lists configured modules, marking the ones whose log file is present.
pub fn run_modules(args: ModulesArgs) -> Result<()> {
    let config = load_or_builtin(args.config.as_deref()).map_err(AnalyzeError::from)?;
    let registry = ModuleRegistry::from_config(&config);

    print!("{}", render_modules(&registry, io::stdout().is_terminal()));
    Ok(())
}

pub fn render_modules(registry: &ModuleRegistry, color: bool) -> String {
    let mut out = String::new();

    for (name, pattern) in registry.entries() {
        let found = registry.resolve(name).is_ok();
        let mark = match (found, color) {
            (true, true) => "✔".green().to_string(),
            (false, true) => "✘".red().to_string(),
            (true, false) => "✔".to_string(),
            (false, false) => "✘".to_string(),
        };
        out.push_str(&format!("{mark} {name:<16} {pattern}\n"));
    }

    out
}
