//! `refcheck` binary: runs the pointer emulation suite and reports

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{filter::Directive, EnvFilter};

use refcheck::{scenarios, RunConfig, Runner, SuiteReport, TracingReporter};

/// Environment variable used to control log filtering.
const LOG_ENV_VAR: &str = "REFCHECK_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Log lines only
    Text,
    /// Log lines on stderr, JSON report on stdout
    Json,
}

/// Run the reference-cell conformance suite.
#[derive(Debug, Parser)]
#[command(name = "refcheck", version, about)]
struct Args {
    /// Run only this scenario (repeatable)
    #[arg(long, value_name = "NAME")]
    only: Vec<String>,

    /// Skip this scenario (repeatable)
    #[arg(long, value_name = "NAME")]
    skip: Vec<String>,

    /// Do not run the `init` prelude
    #[arg(long)]
    no_init: bool,

    /// List scenarios and exit
    #[arg(long)]
    list: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Extra log directive, e.g. `debug` or `refcheck::runner=debug`
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

/// Initialize the logger from REFCHECK_LOG and the --log-level argument.
fn init_logger(log_level: Option<&str>) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    let filter = match log_level {
        Some(level) => {
            let directive: Directive = level
                .parse()
                .with_context(|| format!("invalid log level: {}", level))?;
            filter.add_directive(directive)
        }
        None => filter,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn list() {
    for def in std::iter::once(&scenarios::INIT).chain(scenarios::SCENARIOS.iter()) {
        println!("{:<18} {}", def.name, def.description);
    }
}

fn summarize(report: &SuiteReport) {
    if report.all_passed() {
        info!("{} scenarios passed", report.total());
    } else {
        for scenario in report.scenarios.iter().filter(|s| !s.passed()) {
            warn!("failed: {}", scenario.name);
        }
        warn!(
            "{} of {} scenarios failed",
            report.failed_count(),
            report.total()
        );
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logger(args.log_level.as_deref())?;

    if args.list {
        list();
        return Ok(ExitCode::SUCCESS);
    }

    let config = RunConfig::new()
        .with_only(args.only)
        .with_skip(args.skip)
        .with_init(!args.no_init);

    let mut runner = Runner::new(TracingReporter);
    let report = runner.run_suite(&config)?;
    summarize(&report);

    if args.format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(ExitCode::from(report.exit_code()))
}
