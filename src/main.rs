use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use kira_mutsig::cli::{Cli, Commands, RulesArgs, RunArgs};
use kira_mutsig::input::load_counts;
use kira_mutsig::logging::init_logging;
use kira_mutsig::model::ChartVersion;
use kira_mutsig::model::sentinel;
use kira_mutsig::pipeline::stage5_report::write_reports;
use kira_mutsig::pipeline::{ChartOptions, ValueUnit, build_chart};
use kira_mutsig::report::ReportMeta;
use kira_mutsig::signatures::matcher::{matching_rules, resolve_rule};
use kira_mutsig::signatures::{RuleTable, builtin_table, load_rule_table};

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => run_chart(args),
        Commands::Rules(args) => print_rules(args),
    }
}

fn run_chart(args: RunArgs) -> Result<()> {
    let table = resolve_table(args.rules.as_deref())?;
    let counts = load_counts(&args.input, args.sample.as_deref())
        .with_context(|| format!("failed to load counts from {}", args.input.display()))?;

    let options = ChartOptions {
        version: args.version_tag.as_deref().map(ChartVersion::from_tag),
        sort: args.sort.into(),
        unit: if args.percentage {
            ValueUnit::Percentage
        } else {
            ValueUnit::Count
        },
        xmin: args.xmin,
        xmax: args.xmax,
    };
    if options.xmax <= options.xmin {
        anyhow::bail!("--xmax ({}) must be greater than --xmin ({})", options.xmax, options.xmin);
    }

    let chart = build_chart(&counts, &table, &options).context("failed to build chart data")?;

    let meta = ReportMeta::new(&table.source, Some(args.input.display().to_string()));
    let paths = write_reports(&chart, &meta, &args.out)?;
    info!(
        chart = %paths.chart_json.display(),
        legend = %paths.legend_tsv.display(),
        report = %paths.report_txt.display(),
        "done"
    );
    Ok(())
}

fn print_rules(args: RulesArgs) -> Result<()> {
    let table = resolve_table(args.rules.as_deref())?;

    match &args.label {
        None => {
            println!("# source: {} ({} rules)", table.source, table.len());
            println!("name\tcategory\tcolor\tsubcategory");
            for rule in &table.rules {
                println!(
                    "{}\t{}\t{}\t{}",
                    rule.name,
                    rule.category,
                    rule.color,
                    rule.subcategory.as_deref().unwrap_or("")
                );
            }
        }
        Some(label) => {
            let matches = matching_rules(&table, label);
            println!("label: {}", label);
            println!("matching rules: {}", matches.len());
            for rule in &matches {
                println!("  {} -> {} ({})", rule.name, rule.category, rule.color);
            }
            match resolve_rule(&table, label) {
                Some(rule) => println!(
                    "selected: {} -> {} / {} ({})",
                    rule.name,
                    rule.category,
                    sentinel::key(&rule.subcategory),
                    rule.color
                ),
                None => println!("selected: none (falls back to 'unknown')"),
            }
        }
    }
    Ok(())
}

fn resolve_table(path: Option<&std::path::Path>) -> Result<RuleTable> {
    match path {
        Some(p) => Ok(load_rule_table(p)?),
        None => Ok(builtin_table().clone()),
    }
}
