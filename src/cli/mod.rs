//! Command-line interface
//!
//! Reports and histograms go to stdout; logs go to stderr.

mod args;
mod commands;

pub use args::{Cli, Command, FetchArgs, FilterArgs, HistogramArgs, ReportArgs, ReportKind, Target};
pub use commands::run;
