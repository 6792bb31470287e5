pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::sentinel;
use crate::model::{ChartVersion, ClassifiedEntry, LegendEntry, Span};

/// Provenance stamped into every report.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub tool_name: String,
    pub tool_version: String,
    pub rules_source: String,
    pub input: Option<String>,
}

impl ReportMeta {
    pub fn new(rules_source: &str, input: Option<String>) -> Self {
        Self {
            tool_name: "kira-mutsig".to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            rules_source: rules_source.to_string(),
            input,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDocument {
    pub tool: String,
    pub tool_version: String,
    pub input: Option<String>,
    pub rules: String,
    pub version: ChartVersion,
    pub sort: &'static str,
    pub unit: &'static str,
    pub entries: Vec<ClassifiedEntry>,
    pub legend: Vec<LegendEntry>,
    pub groups: Vec<GroupSummary>,
    pub boundaries: Vec<LegendEntry>,
    pub spans: Vec<SpanView>,
    pub scale: ScaleSummary,
    pub unmatched_labels: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    #[serde(serialize_with = "sentinel::serialize")]
    pub group: Option<String>,
    pub size: usize,
    pub center: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanView {
    #[serde(flatten)]
    pub span: Span,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x0: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x1: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleSummary {
    pub xmin: f64,
    pub xmax: f64,
    pub step: f64,
    pub domain: Vec<String>,
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
