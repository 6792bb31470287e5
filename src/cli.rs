use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::pipeline::stage1_classify::SortPolicy;
use crate::pipeline::{DEFAULT_XMAX, DEFAULT_XMIN};

#[derive(Debug, Parser)]
#[command(
    name = "kira-mutsig",
    version,
    about = "Turn mutational-signature counts into grouped bar chart data"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify a counts table and write chart.json, legend.tsv and report.txt
    Run(RunArgs),
    /// Print the effective category rule table
    Rules(RulesArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "Counts table (.tsv or .json, optionally .gz)")]
    pub input: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, help = "Chart version tag (ID selects the indel chart); default: first row")]
    pub version_tag: Option<String>,

    #[arg(long, help = "Keep only rows of this sampleId")]
    pub sample: Option<String>,

    #[arg(long, default_value_t = false, help = "Plot percentages instead of raw counts")]
    pub percentage: bool,

    #[arg(long, value_enum, default_value_t = SortArg::Auto)]
    pub sort: SortArg,

    #[arg(long, help = "Category rule TSV replacing the built-in table")]
    pub rules: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_XMIN)]
    pub xmin: f64,

    #[arg(long, default_value_t = DEFAULT_XMAX)]
    pub xmax: f64,
}

#[derive(Debug, Args)]
pub struct RulesArgs {
    #[arg(long, help = "Category rule TSV replacing the built-in table")]
    pub rules: Option<PathBuf>,

    #[arg(long, help = "Show which rules match this signature label")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Auto,
    Group,
    Preserve,
}

impl From<SortArg> for SortPolicy {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Auto => SortPolicy::Auto,
            SortArg::Group => SortPolicy::ByGroup,
            SortArg::Preserve => SortPolicy::Preserve,
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/cli.rs"]
mod tests;
