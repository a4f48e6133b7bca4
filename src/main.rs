// jsmetrics - Line-oriented JavaScript metrics
//
// Author : kelexine (https://github.com/kelexine)
// Version: Dynamic (Cargo.toml)
// License: MIT
//
// Thin binary over the jsmetrics library: parses the command line, resolves
// the target, runs one analyzer and prints or exports the outcome. This is
// the only place the process exits with an error status.

mod cli;

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use jsmetrics::analyzer::{
    CommentCounter, CommentPercentAnalyzer, DeclarationCounter, DependencyScanner, FullAnalyzer,
    FunctionSizeScanner, IndentationAnalyzer, LineCounter, MethodCounter,
};
use jsmetrics::config::GlobalConfig;
use jsmetrics::display;
use jsmetrics::export::{self, json::Summary, payload};
use jsmetrics::models::Describe;
use jsmetrics::paths::Target;
use jsmetrics::scan::{self, ScanConfig, ScanOutcome, ScanOverrides};
use jsmetrics::{Aggregate, Analyzer};

use cli::{Cli, Command, TargetArgs};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Err(e) = run(cli.command) {
        eprintln!("{} {:#}", "[ERROR]".red().bold(), e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn run(command: Command) -> Result<()> {
    let global = GlobalConfig::load();

    match command {
        Command::Lines(args) => run_metric(&LineCounter, "Line count", &args, &global),
        Command::Comments(args) => {
            run_metric(&CommentCounter::default(), "Comment lines", &args, &global)
        }
        Command::Percent(args) => run_metric(
            &CommentPercentAnalyzer::default(),
            "Comment percentage",
            &args,
            &global,
        ),
        Command::Classes(args) => run_metric(
            &DeclarationCounter::default(),
            "Classes and functions",
            &args,
            &global,
        ),
        Command::Methods(args) => {
            run_metric(&MethodCounter::default(), "Method visibility", &args, &global)
        }
        Command::FunctionSize(args) => {
            run_metric(&FunctionSizeScanner, "Average function size", &args, &global)
        }
        Command::Indentation(args) => {
            run_metric(&IndentationAnalyzer, "Indentation", &args, &global)
        }
        Command::Dependencies(args) => {
            run_metric(&DependencyScanner::default(), "Dependencies", &args, &global)
        }
        Command::Analyze(args) => {
            let outcome = scan_target(&FullAnalyzer::default(), &args.target, &global)?;
            match (&args.target.output, args.payload) {
                (Some(out), true) => payload::export_payload(&outcome, Path::new(out)),
                _ => present(&outcome, "Analysis results", &args.target),
            }
        }
    }
}

fn scan_target<A: Analyzer>(
    analyzer: &A,
    args: &TargetArgs,
    global: &GlobalConfig,
) -> Result<ScanOutcome<A::Output>> {
    let target = Target::resolve(args.file.as_deref(), args.directory.as_deref())?
        .context("either --file or --directory is required")?;

    let overrides = ScanOverrides {
        extra_ignore: args.ignore.clone(),
        key_by_path: args.by_path,
        no_parallel: args.no_parallel,
    };
    let config = ScanConfig::new(target, global, &overrides);

    scan::run(analyzer, &config)
        .with_context(|| format!("{} scan of {} failed", analyzer.name(), config.target.path().display()))
}

fn present<T>(outcome: &ScanOutcome<T>, title: &str, args: &TargetArgs) -> Result<()>
where
    T: Aggregate + Describe + Summary,
    T::Total: Describe + Summary,
{
    match &args.output {
        Some(out) => export::export(outcome, out, title, args.detailed),
        None => {
            display::display_outcome(outcome, title, args.detailed);
            Ok(())
        }
    }
}

fn run_metric<A>(analyzer: &A, title: &str, args: &TargetArgs, global: &GlobalConfig) -> Result<()>
where
    A: Analyzer,
    A::Output: Describe + Summary,
    <A::Output as Aggregate>::Total: Describe + Summary,
{
    let outcome = scan_target(analyzer, args, global)?;
    present(&outcome, title, args)
}
