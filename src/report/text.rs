use crate::pipeline::ChartData;
use crate::report::{ReportMeta, format_f64_2};

pub fn render_report_text(data: &ChartData, meta: &ReportMeta) -> String {
    let mut out = String::new();

    out.push_str("Mutational Signature Chart Report\n");
    out.push_str("=================================\n\n");

    out.push_str("1. Input\n");
    if let Some(input) = &meta.input {
        out.push_str(&format!("Source: {}\n", input));
    }
    out.push_str(&format!("Rows: {}\n", data.entries.len()));
    out.push_str(&format!("Chart version: {}\n", data.version));
    out.push_str(&format!("Values: {}\n", data.unit.as_str()));
    out.push_str(&format!("Sort policy: {}\n", data.sort.as_str()));
    out.push_str(&format!("Category rules: {}\n\n", meta.rules_source));

    out.push_str("2. Groups\n");
    for ((group, size), center) in data
        .group_keys
        .iter()
        .zip(&data.group_sizes)
        .zip(&data.group_centers)
    {
        out.push_str(&format!(
            "{:<16} members={:<4} center={}\n",
            display_key(group),
            size,
            center
        ));
    }
    out.push('\n');

    out.push_str("3. Spans\n");
    for span in &data.spans {
        let extent = data
            .scale
            .extent(&span.start, &span.end)
            .map(|(x0, x1)| format!(" [{} .. {}]", format_f64_2(x0), format_f64_2(x1)))
            .unwrap_or_default();
        match &span.indel {
            Some(g) => out.push_str(&format!(
                "{} / {}: {} -> {} ({}){}\n",
                display_key(&g.group),
                display_key(&g.category),
                span.start,
                span.end,
                span.color,
                extent
            )),
            None => out.push_str(&format!(
                "{} -> {} ({}){}\n",
                span.start, span.end, span.color, extent
            )),
        }
    }
    out.push('\n');

    out.push_str("4. Quality and caveats\n");
    if data.unmatched.is_empty() {
        out.push_str("All signature labels matched a category rule.\n");
    } else {
        out.push_str(&format!(
            "Unmatched labels ({}): {}\n",
            data.unmatched.len(),
            data.unmatched.join(", ")
        ));
    }
    for warning in data.batch.warnings() {
        out.push_str(&format!("Warning: {}\n", warning));
    }

    out
}

fn display_key(key: &Option<String>) -> &str {
    key.as_deref().unwrap_or("(none)")
}
