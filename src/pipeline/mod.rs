use std::collections::HashMap;
use std::hash::Hash;

use thiserror::Error;
use tracing::{info, warn};

use crate::model::{ChartVersion, ClassifiedEntry, LegendEntry, LegendLabel, MutationalCount, Span};
use crate::signatures::RuleTable;

pub mod stage1_classify;
pub mod stage2_percent;
pub mod stage3_legend;
pub mod stage4_spans;
pub mod stage5_report;

use stage1_classify::{BatchReport, SortPolicy, check_batch, classify_with};
use stage2_percent::{NormalizeError, normalize};
use stage3_legend::{BandScale, build_legend};
use stage4_spans::{CollapseError, collapse, group_boundaries};

pub const DEFAULT_XMIN: f64 = 0.0;
pub const DEFAULT_XMAX: f64 = 600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueUnit {
    Count,
    Percentage,
}

impl ValueUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueUnit::Count => "count",
            ValueUnit::Percentage => "percentage",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// `None` takes the tag from the first row.
    pub version: Option<ChartVersion>,
    pub sort: SortPolicy,
    pub unit: ValueUnit,
    pub xmin: f64,
    pub xmax: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            version: None,
            sort: SortPolicy::Auto,
            unit: ValueUnit::Count,
            xmin: DEFAULT_XMIN,
            xmax: DEFAULT_XMAX,
        }
    }
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error(transparent)]
    Collapse(#[from] CollapseError),
}

/// Everything the rendering layer needs for one batch.
#[derive(Debug, Clone)]
pub struct ChartData {
    pub version: ChartVersion,
    pub sort: SortPolicy,
    pub unit: ValueUnit,
    pub entries: Vec<ClassifiedEntry>,
    pub unmatched: Vec<String>,
    pub batch: BatchReport,
    pub scale: BandScale,
    pub legend: Vec<LegendEntry>,
    pub group_keys: Vec<Option<String>>,
    pub group_sizes: Vec<usize>,
    pub group_centers: Vec<usize>,
    pub boundaries: Vec<LegendEntry>,
    pub spans: Vec<Span>,
}

pub fn build_chart(
    counts: &[MutationalCount],
    table: &RuleTable,
    options: &ChartOptions,
) -> Result<ChartData, ChartError> {
    let batch = check_batch(counts);
    for warning in batch.warnings() {
        warn!(warning = %warning, "inconsistent input batch");
    }

    let version = match &options.version {
        Some(v) => v.clone(),
        None => ChartVersion::from_tag(
            counts
                .first()
                .map(|c| c.version.as_str())
                .unwrap_or_default(),
        ),
    };

    let values = match options.unit {
        ValueUnit::Count => counts.to_vec(),
        ValueUnit::Percentage => normalize(counts)?,
    };

    let classified = classify_with(&values, table, options.sort);
    if !classified.unmatched.is_empty() {
        warn!(
            unmatched = classified.unmatched.len(),
            rules = %table.source,
            "signature labels without a category rule were assigned to 'unknown'"
        );
    }

    let labels: Vec<LegendLabel> = classified.entries.iter().map(LegendLabel::from).collect();
    let layout = build_legend(&labels, options.xmin, options.xmax);
    let spans = collapse(
        &layout.group_sizes,
        &layout.entries,
        &layout.group_keys,
        &version,
    )?;
    let boundaries = group_boundaries(&layout.group_sizes, &layout.entries, &layout.group_keys)?;

    info!(
        version = %version,
        rows = classified.entries.len(),
        groups = layout.group_keys.len(),
        spans = spans.len(),
        "chart data built"
    );

    Ok(ChartData {
        version,
        sort: options.sort,
        unit: options.unit,
        entries: classified.entries,
        unmatched: classified.unmatched,
        batch,
        scale: layout.scale,
        legend: layout.entries,
        group_keys: layout.group_keys,
        group_sizes: layout.group_sizes,
        group_centers: layout.group_centers,
        boundaries,
        spans,
    })
}

/// JS-style rounding: halves go toward positive infinity.
pub(crate) fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Groups items by key, keeping keys in first-seen order and members in
/// input order.
pub(crate) fn group_ordered<'a, T, K, F>(items: &'a [T], key: F) -> Vec<(K, Vec<&'a T>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a T>)> = Vec::new();
    for item in items {
        let k = key(item);
        match index.get(&k) {
            Some(&pos) => groups[pos].1.push(item),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![item]));
            }
        }
    }
    groups
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
