use crate::pipeline::ChartData;
use crate::report::{ChartDocument, GroupSummary, ReportMeta, ScaleSummary, SpanView};

pub fn build_chart_document(data: &ChartData, meta: &ReportMeta) -> ChartDocument {
    let groups = data
        .group_keys
        .iter()
        .zip(&data.group_sizes)
        .zip(&data.group_centers)
        .map(|((group, &size), &center)| GroupSummary {
            group: group.clone(),
            size,
            center,
        })
        .collect();

    let spans = data
        .spans
        .iter()
        .map(|span| {
            let extent = data.scale.extent(&span.start, &span.end);
            SpanView {
                span: span.clone(),
                x0: extent.map(|(x0, _)| x0),
                x1: extent.map(|(_, x1)| x1),
            }
        })
        .collect();

    let (xmin, xmax) = data.scale.range();

    ChartDocument {
        tool: meta.tool_name.clone(),
        tool_version: meta.tool_version.clone(),
        input: meta.input.clone(),
        rules: meta.rules_source.clone(),
        version: data.version.clone(),
        sort: data.sort.as_str(),
        unit: data.unit.as_str(),
        entries: data.entries.clone(),
        legend: data.legend.clone(),
        groups,
        boundaries: data.boundaries.clone(),
        spans,
        scale: ScaleSummary {
            xmin,
            xmax,
            step: data.scale.step(),
            domain: data.scale.domain().to_vec(),
        },
        unmatched_labels: data.unmatched.clone(),
        warnings: data.batch.warnings(),
    }
}

pub fn render_chart_json(doc: &ChartDocument) -> serde_json::Result<String> {
    serde_json::to_string_pretty(doc)
}
