use serde::Serialize;

use crate::model::{LegendEntry, LegendLabel};
use crate::pipeline::group_ordered;

/// Equal-width slots over `[xmin, xmax]`, one per distinct label in
/// first-seen order. No padding between slots.
///
/// A reversed range (`xmin > xmax`) keeps a positive step and lays the
/// domain out from the right, the way d3's `scaleBand` does.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandScale {
    domain: Vec<String>,
    xmin: f64,
    xmax: f64,
}

impl BandScale {
    pub fn new<'a, I>(labels: I, xmin: f64, xmax: f64) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut domain: Vec<String> = Vec::new();
        for label in labels {
            if !domain.iter().any(|d| d == label) {
                domain.push(label.to_string());
            }
        }
        Self { domain, xmin, xmax }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        (self.xmin, self.xmax)
    }

    pub fn step(&self) -> f64 {
        if self.domain.is_empty() {
            return 0.0;
        }
        (self.xmax - self.xmin).abs() / self.domain.len() as f64
    }

    fn is_reversed(&self) -> bool {
        self.xmax < self.xmin
    }

    pub fn bandwidth(&self) -> f64 {
        self.step()
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.domain.iter().position(|d| d == label)
    }

    /// Left edge of the slot for `label`.
    pub fn position(&self, label: &str) -> Option<f64> {
        let idx = self.index_of(label)?;
        let slot = if self.is_reversed() {
            self.domain.len() - 1 - idx
        } else {
            idx
        };
        Some(self.xmin.min(self.xmax) + slot as f64 * self.step())
    }

    /// Pixel interval covering the slots of `start` and `end`, left edge
    /// first.
    pub fn extent(&self, start: &str, end: &str) -> Option<(f64, f64)> {
        let a = self.position(start)?;
        let b = self.position(end)?;
        Some((a.min(b), a.max(b) + self.bandwidth()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendLayout {
    pub scale: BandScale,
    pub entries: Vec<LegendEntry>,
    pub group_keys: Vec<Option<String>>,
    pub group_sizes: Vec<usize>,
    pub group_centers: Vec<usize>,
}

pub fn build_legend(labels: &[LegendLabel], xmin: f64, xmax: f64) -> LegendLayout {
    let scale = band_scale(labels, xmin, xmax);
    let entries = legend_entries(labels);
    let groups = group_ordered(&entries, |e| e.group.clone());

    let mut group_keys = Vec::with_capacity(groups.len());
    let mut group_sizes = Vec::with_capacity(groups.len());
    let mut group_centers = Vec::with_capacity(groups.len());
    for (key, members) in groups {
        group_keys.push(key);
        group_sizes.push(members.len());
        group_centers.push(center_index(members.len()));
    }

    LegendLayout {
        scale,
        entries,
        group_keys,
        group_sizes,
        group_centers,
    }
}

pub fn band_scale(labels: &[LegendLabel], xmin: f64, xmax: f64) -> BandScale {
    BandScale::new(labels.iter().map(|l| l.label.as_str()), xmin, xmax)
}

pub fn legend_entries(labels: &[LegendLabel]) -> Vec<LegendEntry> {
    labels
        .iter()
        .map(|item| LegendEntry {
            group: item.group.clone(),
            color: item.color.clone(),
            label: item.label.clone(),
            value: item.label.clone(),
            subcategory: item.subcategory.clone(),
        })
        .collect()
}

/// `round(size / 2)` with halves rounding up.
fn center_index(size: usize) -> usize {
    size.div_ceil(2)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_legend.rs"]
mod tests;
