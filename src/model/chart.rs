use serde::{Deserialize, Serialize};

use crate::model::MutationalCount;
use crate::model::sentinel;

/// A count row after rule lookup.
///
/// `group` is `None` only for rows without a signature label; labels that
/// no rule matches land in the `unknown` group instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedEntry {
    #[serde(flatten)]
    pub count: MutationalCount,
    #[serde(with = "sentinel", default)]
    pub group: Option<String>,
    pub label: String,
    pub color_value: String,
    #[serde(with = "sentinel", default)]
    pub subcategory: Option<String>,
}

/// Label record handed to the legend builder by the chart layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendLabel {
    #[serde(with = "sentinel", default)]
    pub group: Option<String>,
    pub label: String,
    pub color: String,
    #[serde(with = "sentinel", default)]
    pub subcategory: Option<String>,
}

impl From<&ClassifiedEntry> for LegendLabel {
    fn from(entry: &ClassifiedEntry) -> Self {
        Self {
            group: entry.group.clone(),
            label: entry.label.clone(),
            color: entry.color_value.clone(),
            subcategory: entry.subcategory.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    #[serde(with = "sentinel", default)]
    pub group: Option<String>,
    pub color: String,
    pub label: String,
    /// Display key, not a count.
    pub value: String,
    #[serde(with = "sentinel", default)]
    pub subcategory: Option<String>,
}

/// Background/label rectangle covering a contiguous run of legend entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub color: String,
    pub start: String,
    pub end: String,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub indel: Option<SpanGroup>,
}

/// Extra span attributes emitted for the indel chart.
///
/// Both keys are required on read, so a span without them stays a standard
/// span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanGroup {
    #[serde(with = "sentinel")]
    pub category: Option<String>,
    #[serde(with = "sentinel")]
    pub group: Option<String>,
}
