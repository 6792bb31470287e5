use thiserror::Error;

use crate::model::sentinel;
use crate::model::{ChartVersion, LegendEntry, Span, SpanGroup};
use crate::pipeline::group_ordered;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollapseError {
    #[error("missing group: no legend entries for group '{0}'")]
    MissingGroup(String),
    #[error("group '{group}' has {available} legend entries but a size of {requested} was requested")]
    GroupSizeMismatch {
        group: String,
        requested: usize,
        available: usize,
    },
    #[error("{sizes} group sizes given for {keys} group keys")]
    KeyCountMismatch { sizes: usize, keys: usize },
}

/// Turns legend entries into group rectangles.
///
/// Standard charts emit one span per entry of `group_keys`, ending at the
/// member whose position equals that group's size. Indel charts ignore the
/// sizes and keys and emit one span per (subcategory, group) pair.
pub fn collapse(
    group_sizes: &[usize],
    entries: &[LegendEntry],
    group_keys: &[Option<String>],
    version: &ChartVersion,
) -> Result<Vec<Span>, CollapseError> {
    match version {
        ChartVersion::Indel => Ok(collapse_indel(entries)),
        ChartVersion::Standard(_) => collapse_by_group(group_sizes, entries, group_keys),
    }
}

fn collapse_by_group(
    group_sizes: &[usize],
    entries: &[LegendEntry],
    group_keys: &[Option<String>],
) -> Result<Vec<Span>, CollapseError> {
    let members = sized_members(group_sizes, entries, group_keys)?;
    Ok(members
        .into_iter()
        .map(|(first, last)| Span {
            color: first.color.clone(),
            start: first.value.clone(),
            end: last.value.clone(),
            indel: None,
        })
        .collect())
}

fn collapse_indel(entries: &[LegendEntry]) -> Vec<Span> {
    let mut spans = Vec::new();
    for (_, by_subcategory) in group_ordered(entries, |e| e.subcategory.clone()) {
        for (_, members) in group_ordered(&by_subcategory, |e| e.group.clone()) {
            let first = members[0];
            let last = members[members.len() - 1];
            spans.push(Span {
                color: first.color.clone(),
                start: first.label.clone(),
                end: last.label.clone(),
                indel: Some(SpanGroup {
                    category: first.subcategory.clone(),
                    group: first.group.clone(),
                }),
            });
        }
    }
    spans
}

/// The entry at position `size - 1` of each requested group.
pub fn group_boundaries(
    group_sizes: &[usize],
    entries: &[LegendEntry],
    group_keys: &[Option<String>],
) -> Result<Vec<LegendEntry>, CollapseError> {
    Ok(sized_members(group_sizes, entries, group_keys)?
        .into_iter()
        .map(|(_, last)| last.clone())
        .collect())
}

/// Resolves each key to its first member and the member at `size - 1`.
fn sized_members<'a>(
    group_sizes: &[usize],
    entries: &'a [LegendEntry],
    group_keys: &[Option<String>],
) -> Result<Vec<(&'a LegendEntry, &'a LegendEntry)>, CollapseError> {
    if group_sizes.len() != group_keys.len() {
        return Err(CollapseError::KeyCountMismatch {
            sizes: group_sizes.len(),
            keys: group_keys.len(),
        });
    }

    let groups = group_ordered(entries, |e| e.group.clone());
    let mut out = Vec::with_capacity(group_keys.len());
    for (key, &size) in group_keys.iter().zip(group_sizes) {
        let members = groups
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, members)| members)
            .ok_or_else(|| CollapseError::MissingGroup(sentinel::key(key).to_string()))?;
        if size == 0 || size > members.len() {
            return Err(CollapseError::GroupSizeMismatch {
                group: sentinel::key(key).to_string(),
                requested: size,
                available: members.len(),
            });
        }
        out.push((members[0], members[size - 1]));
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_spans.rs"]
mod tests;
