use clap::{Parser, Subcommand};
use logscope_core::analyze::AnalyzeError;
use logscope_core::cli::{self, AnalyzeArgs, ModulesArgs, error_hint};
use logscope_core::logging::{default_log_format, init_logging};
use miette::Report;
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal};

#[derive(Parser, Debug)]
#[command(
    name = "logscope",
    version,
    about = "logscope: latency and availability from JSON service logs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Aggregate one module's log over a date range
    Analyze(AnalyzeArgs),

    /// List configured modules and their log paths
    Modules(ModulesArgs),
}

fn main() {
    let cli = Cli::parse();

    init_logging(default_log_format());

    let result = match cli.command {
        Command::Analyze(args) => cli::run_analyze(args),
        Command::Modules(args) => cli::run_modules(args),
    };

    if let Err(err) = result {
        report_error(err);
        std::process::exit(1);
    }
}

fn report_error(err: anyhow::Error) {
    let hint = error_hint(&err);
    let plain = !io::stderr().is_terminal();

    tracing::debug!(error = ?err, "command failed");

    match err.downcast::<AnalyzeError>() {
        Ok(err) if !plain => {
            eprintln!();
            eprintln!("{:?}", Report::new(err));
        }
        Ok(err) => eprintln!("error: {err}"),
        Err(err) if !plain => eprintln!("{} {err:#}", "error:".red().bold()),
        Err(err) => eprintln!("error: {err:#}"),
    }

    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{hint}");
    }
}
