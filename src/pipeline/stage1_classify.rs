use tracing::debug;

use crate::model::sentinel;
use crate::model::{ClassifiedEntry, MutationalCount};
use crate::signatures::matcher::resolve_rule;
use crate::signatures::{FALLBACK_COLOR, RuleTable, UNKNOWN_GROUP, builtin_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortPolicy {
    /// Sort by group only when the first classified row carries a group.
    Auto,
    ByGroup,
    Preserve,
}

impl SortPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortPolicy::Auto => "auto",
            SortPolicy::ByGroup => "group",
            SortPolicy::Preserve => "preserve",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub entries: Vec<ClassifiedEntry>,
    /// Distinct labels that fell back to the unknown group, first-seen order.
    pub unmatched: Vec<String>,
}

/// Classifies against the built-in table with the automatic sort policy.
pub fn classify(counts: &[MutationalCount]) -> Vec<ClassifiedEntry> {
    classify_with(counts, builtin_table(), SortPolicy::Auto).entries
}

pub fn classify_with(
    counts: &[MutationalCount],
    table: &RuleTable,
    policy: SortPolicy,
) -> Stage1Output {
    let mut entries = Vec::with_capacity(counts.len());
    let mut unmatched: Vec<String> = Vec::new();

    for count in counts {
        let (entry, matched) = classify_entry(count, table);
        if !matched && !unmatched.contains(&entry.label) {
            debug!(label = %entry.label, "no category rule matches signature label");
            unmatched.push(entry.label.clone());
        }
        entries.push(entry);
    }

    if should_sort(&entries, policy) {
        // stable: equal groups keep input order
        entries.sort_by(|a, b| sentinel::key(&a.group).cmp(sentinel::key(&b.group)));
    }

    Stage1Output { entries, unmatched }
}

/// Returns the classified row and whether a rule matched. Unlabeled rows
/// count as matched.
pub fn classify_entry(count: &MutationalCount, table: &RuleTable) -> (ClassifiedEntry, bool) {
    let label = count.mutational_signature_label.clone();
    if !count.is_labeled() {
        let entry = ClassifiedEntry {
            count: count.clone(),
            group: None,
            label,
            color_value: FALLBACK_COLOR.to_string(),
            subcategory: None,
        };
        return (entry, true);
    }

    match resolve_rule(table, &label) {
        Some(rule) => (
            ClassifiedEntry {
                count: count.clone(),
                group: Some(rule.category.clone()),
                label,
                color_value: rule.color.clone(),
                subcategory: rule.subcategory.clone(),
            },
            true,
        ),
        None => (
            ClassifiedEntry {
                count: count.clone(),
                group: Some(UNKNOWN_GROUP.to_string()),
                label,
                color_value: FALLBACK_COLOR.to_string(),
                subcategory: None,
            },
            false,
        ),
    }
}

fn should_sort(entries: &[ClassifiedEntry], policy: SortPolicy) -> bool {
    match policy {
        SortPolicy::ByGroup => true,
        SortPolicy::Preserve => false,
        SortPolicy::Auto => entries.first().is_some_and(|e| e.group.is_some()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub rows: usize,
    pub labeled: usize,
    pub unlabeled: usize,
    pub versions: Vec<String>,
    pub samples: Vec<String>,
}

impl BatchReport {
    pub fn mixed_labeling(&self) -> bool {
        self.labeled > 0 && self.unlabeled > 0
    }

    pub fn is_consistent(&self) -> bool {
        !self.mixed_labeling() && self.versions.len() <= 1 && self.samples.len() <= 1
    }

    pub fn warnings(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.mixed_labeling() {
            out.push(format!(
                "batch mixes {} labeled and {} unlabeled rows; group sorting follows the first row",
                self.labeled, self.unlabeled
            ));
        }
        if self.versions.len() > 1 {
            out.push(format!(
                "batch mixes signature versions: {}",
                self.versions.join(", ")
            ));
        }
        if self.samples.len() > 1 {
            out.push(format!(
                "batch mixes {} samples: {}",
                self.samples.len(),
                self.samples.join(", ")
            ));
        }
        out
    }
}

/// Checks the homogeneity the sort heuristic relies on. Never fails.
pub fn check_batch(counts: &[MutationalCount]) -> BatchReport {
    let mut report = BatchReport {
        rows: counts.len(),
        ..BatchReport::default()
    };
    for count in counts {
        if count.is_labeled() {
            report.labeled += 1;
        } else {
            report.unlabeled += 1;
        }
        if !report.versions.contains(&count.version) {
            report.versions.push(count.version.clone());
        }
        if !report.samples.contains(&count.sample_id) {
            report.samples.push(count.sample_id.clone());
        }
    }
    report
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_classify.rs"]
mod tests;
