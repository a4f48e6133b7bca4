// Author: kelexine (https://github.com/kelexine)
// cli.rs - CLI argument parsing via clap derive

use clap::{Args, Parser, Subcommand};

/// jsmetrics - line-oriented metrics for JavaScript sources
///
/// Counts lines, comments, classes, functions, methods, function sizes,
/// indentation and dependencies in a single file or a whole directory tree.
#[derive(Parser, Debug)]
#[command(
    name = "jsmetrics",
    version,
    author = "kelexine <https://github.com/kelexine>",
    about = "Line-oriented JavaScript metrics: comments, declarations, indentation, dependencies",
    after_help = "\
EXAMPLES:
  jsmetrics lines -f src/app.js            Non-blank lines in one file
  jsmetrics comments -d .                  Comment lines under the current directory
  jsmetrics percent -d ~/project -o r.html Comment share as an HTML dashboard
  jsmetrics methods -d src --detailed      Public/private methods per file
  jsmetrics function-size -d .             Average function length
  jsmetrics dependencies -d . -o deps.json External and native imports
  jsmetrics analyze -d . --by-path         Every metric, keyed by relative path
  jsmetrics analyze -d . -o m.json --payload
                                           Body for the metrics API

CONFIG:
  <config dir>/jsmetrics/config.toml
    extra_ignore = [\"fixtures\"]
    key_by_path  = false
    parallel     = true"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Debug logging on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Count non-blank lines
    #[command(visible_alias = "count-lines")]
    Lines(TargetArgs),

    /// Count comment lines
    #[command(visible_alias = "count-comments")]
    Comments(TargetArgs),

    /// Comment lines as a share of all physical lines
    #[command(visible_alias = "count-percent")]
    Percent(TargetArgs),

    /// Count class and function declarations
    #[command(visible_alias = "count-class-and-functions")]
    Classes(TargetArgs),

    /// Count public and private methods
    #[command(visible_alias = "count-methods")]
    Methods(TargetArgs),

    /// Average function body length
    #[command(visible_alias = "count-average-function")]
    FunctionSize(TargetArgs),

    /// Indentation depth and style
    Indentation(TargetArgs),

    /// External and native module imports
    Dependencies(TargetArgs),

    /// Every metric in one pass
    #[command(visible_alias = "run-all")]
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Path to a single JavaScript file (.js or .mjs)
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        conflicts_with = "directory",
        required_unless_present = "directory"
    )]
    pub file: Option<String>,

    /// Directory to scan recursively ("." for the current directory, "~/" is expanded)
    #[arg(
        short = 'd',
        long = "directory",
        value_name = "DIR",
        required_unless_present = "file"
    )]
    pub directory: Option<String>,

    /// Write the report to FILE (.json or .html) instead of the console
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<String>,

    /// Include per-file results
    #[arg(long = "detailed")]
    pub detailed: bool,

    /// Key per-file results by relative path instead of file name
    #[arg(long = "by-path")]
    pub by_path: bool,

    /// Disable parallel file processing
    #[arg(long = "no-parallel")]
    pub no_parallel: bool,

    /// Extra file or directory names to skip
    #[arg(long = "ignore", value_name = "NAME", num_args = 1..)]
    pub ignore: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// With -o FILE.json, write the metrics API request body instead of the report
    #[arg(long = "payload", requires = "output")]
    pub payload: bool,
}
