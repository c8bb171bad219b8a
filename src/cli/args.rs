//! Command-line arguments

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments accepted by the `menu-nutrition` binary.
#[derive(Parser, Debug)]
#[command(
    name = "menu-nutrition",
    version,
    about = "Download and summarize restaurant menu nutrition data"
)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        global = true,
        help = "Settings file (default: first of settings.yml, config/settings.yml, user config dir)"
    )]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up restaurant brand ids and write the id file
    Ids {
        /// Restaurant names (default: the configured list)
        names: Vec<String>,
    },

    /// Fetch one restaurant's full menu into a flat dump
    Fetch(FetchArgs),

    /// Fetch every restaurant in the id file into a menu collection
    FetchAll {
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Keep the items of a dump whose field matches a value
    Filter(FilterArgs),

    /// Print a sugar report for one brand
    Report(ReportArgs),

    /// Print a histogram of a numeric field
    Histogram(HistogramArgs),

    /// List the field names present in a dump
    Keys {
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct Target {
    /// Brand id to fetch
    #[arg(long, value_name = "ID")]
    pub brand_id: Option<String>,

    /// Restaurant name, resolved through a brand search
    #[arg(long, value_name = "NAME")]
    pub restaurant: Option<String>,
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    #[command(flatten)]
    pub target: Target,

    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct FilterArgs {
    #[arg(short, long)]
    pub field: String,

    /// Value to compare against; parsed as JSON when possible, else a string
    #[arg(long)]
    pub value: String,

    /// Keep the items that do not match instead
    #[arg(short, long)]
    pub negate: bool,

    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: print to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Entrees with the most sugar
    MaxSugar,
    /// Entrees under the sugar threshold, by calories
    LowSugar,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[arg(value_enum)]
    pub kind: ReportKind,

    #[arg(short, long)]
    pub brand: String,

    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct HistogramArgs {
    #[arg(short, long)]
    pub field: String,

    /// Upper edge of the last bin (default: largest value)
    #[arg(long, value_name = "N")]
    pub x_max: Option<f64>,

    /// Bin count (default: from settings)
    #[arg(long, value_name = "N")]
    pub bins: Option<usize>,

    #[arg(long)]
    pub title: Option<String>,

    /// X-axis label (default: the field name)
    #[arg(long)]
    pub label: Option<String>,

    /// Read a restaurant menu collection and plot each restaurant on a shared axis
    #[arg(long)]
    pub collection: bool,

    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fetch_by_brand_id() {
        let cli = Cli::try_parse_from([
            "menu-nutrition",
            "-v",
            "fetch",
            "--brand-id",
            "513fbc1283aa2dc80c00001f",
            "--out",
            "mcd.json",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Command::Fetch(args) => {
                assert_eq!(args.target.brand_id.as_deref(), Some("513fbc1283aa2dc80c00001f"));
                assert!(args.target.restaurant.is_none());
                assert_eq!(args.out, Some(PathBuf::from("mcd.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_fetch_needs_exactly_one_target() {
        assert!(Cli::try_parse_from(["menu-nutrition", "fetch"]).is_err());
        assert!(Cli::try_parse_from([
            "menu-nutrition",
            "fetch",
            "--brand-id",
            "x",
            "--restaurant",
            "Qdoba"
        ])
        .is_err());
    }

    #[test]
    fn test_parse_report_and_histogram() {
        let cli = Cli::try_parse_from([
            "menu-nutrition",
            "report",
            "low-sugar",
            "--brand",
            "Qdoba",
            "--config",
            "alt.yml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("alt.yml")));
        assert!(matches!(
            cli.command,
            Command::Report(ReportArgs { kind: ReportKind::LowSugar, .. })
        ));

        let cli = Cli::try_parse_from([
            "menu-nutrition",
            "histogram",
            "--field",
            "nf_sugars",
            "--x-max",
            "100",
            "--collection",
        ])
        .unwrap();
        match cli.command {
            Command::Histogram(args) => {
                assert_eq!(args.x_max, Some(100.0));
                assert!(args.collection);
                assert!(args.bins.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_ids_defaults_to_empty_list() {
        let cli = Cli::try_parse_from(["menu-nutrition", "ids"]).unwrap();
        assert!(matches!(cli.command, Command::Ids { names } if names.is_empty()));
    }
}
