use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::model::LegendEntry;
use crate::model::sentinel;
use crate::pipeline::ChartData;
use crate::report::ReportMeta;
use crate::report::json::{build_chart_document, render_chart_json};
use crate::report::text::render_report_text;

pub const CHART_JSON: &str = "chart.json";
pub const LEGEND_TSV: &str = "legend.tsv";
pub const REPORT_TXT: &str = "report.txt";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize chart document: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub chart_json: PathBuf,
    pub legend_tsv: PathBuf,
    pub report_txt: PathBuf,
}

pub fn write_reports(
    data: &ChartData,
    meta: &ReportMeta,
    out_dir: &Path,
) -> Result<ReportPaths, ReportError> {
    fs::create_dir_all(out_dir).map_err(|source| ReportError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let paths = ReportPaths {
        chart_json: out_dir.join(CHART_JSON),
        legend_tsv: out_dir.join(LEGEND_TSV),
        report_txt: out_dir.join(REPORT_TXT),
    };

    let doc = build_chart_document(data, meta);
    let json = render_chart_json(&doc)?;
    write_text(&paths.chart_json, &json)?;

    write_legend_tsv(&data.legend, &paths.legend_tsv)?;

    let report = render_report_text(data, meta);
    write_text(&paths.report_txt, &report)?;

    info!(out_dir = %out_dir.display(), "reports written");
    Ok(paths)
}

pub fn render_legend_tsv(entries: &[LegendEntry]) -> String {
    let mut out = String::from("group\tsubcategory\tlabel\tcolor\tvalue\n");
    for e in entries {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            sentinel::key(&e.group),
            sentinel::key(&e.subcategory),
            e.label,
            e.color,
            e.value
        ));
    }
    out
}

fn write_legend_tsv(entries: &[LegendEntry], path: &Path) -> Result<(), ReportError> {
    write_text(path, &render_legend_tsv(entries))
}

fn write_text(path: &Path, contents: &str) -> Result<(), ReportError> {
    let io_err = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut w = BufWriter::new(File::create(path).map_err(io_err)?);
    w.write_all(contents.as_bytes()).map_err(io_err)?;
    w.flush().map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
