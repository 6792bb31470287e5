use super::*;
use crate::signatures::loader::parse_rule_tsv;

fn counts(labels: &[&str]) -> Vec<MutationalCount> {
    labels
        .iter()
        .map(|l| MutationalCount::labeled(l, 5.0))
        .collect()
}

#[test]
fn test_substitution_scenario() {
    let out = classify(&counts(&["C>A", "C>T"]));
    let groups: Vec<&str> = out.iter().map(|e| e.group.as_deref().unwrap()).collect();
    let colors: Vec<&str> = out.iter().map(|e| e.color_value.as_str()).collect();
    assert_eq!(groups, vec!["C>A", "C>T"]);
    assert_eq!(colors, vec!["lightblue", "red"]);
    assert!(out.iter().all(|e| e.subcategory.is_none()));
}

#[test]
fn test_length_preserved_and_subcategory_from_rule() {
    let input = counts(&["1:Del:T:2", "XYZ", "2:Ins:M:1", "A[T>G]C"]);
    let out = classify(&input);
    assert_eq!(out.len(), input.len());
    for entry in &out {
        match entry.label.as_str() {
            "1:Del:T:2" => assert_eq!(entry.subcategory.as_deref(), Some("T")),
            "2:Ins:M:1" => assert_eq!(entry.subcategory.as_deref(), Some("2")),
            _ => assert_eq!(entry.subcategory, None),
        }
    }
}

#[test]
fn test_unmatched_label_falls_back() {
    let out = classify_with(&counts(&["XYZ"]), builtin_table(), SortPolicy::Auto);
    let entry = &out.entries[0];
    assert_eq!(entry.group.as_deref(), Some(UNKNOWN_GROUP));
    assert_eq!(entry.color_value, FALLBACK_COLOR);
    assert_eq!(entry.subcategory, None);
    assert_eq!(entry.label, "XYZ");
    assert_eq!(out.unmatched, vec!["XYZ".to_string()]);
}

#[test]
fn test_unmatched_labels_reported_once() {
    let out = classify_with(
        &counts(&["XYZ", "C>A", "XYZ", "QQ"]),
        builtin_table(),
        SortPolicy::Preserve,
    );
    assert_eq!(out.unmatched, vec!["XYZ".to_string(), "QQ".to_string()]);
}

#[test]
fn test_empty_label_row() {
    let input = vec![MutationalCount::labeled("", 2.0)];
    let out = classify(&input);
    assert_eq!(out[0].group, None);
    assert_eq!(out[0].color_value, "#EE4B2B");
    assert_eq!(out[0].label, "");
    assert_eq!(out[0].subcategory, None);
    assert_eq!(out[0].count.value, 2.0);
}

#[test]
fn test_last_match_wins_with_overlapping_rules() {
    let table = parse_rule_tsv("C>\tfirst\tblack\nC>A\tsecond\twhite\n", "test").unwrap();
    let out = classify_with(&counts(&["T[C>A]T"]), &table, SortPolicy::Auto);
    assert_eq!(out.entries[0].group.as_deref(), Some("second"));
    assert_eq!(out.entries[0].color_value, "white");

    let reversed = parse_rule_tsv("C>A\tsecond\twhite\nC>\tfirst\tblack\n", "test").unwrap();
    let out = classify_with(&counts(&["T[C>A]T"]), &reversed, SortPolicy::Auto);
    assert_eq!(out.entries[0].group.as_deref(), Some("first"));
}

#[test]
fn test_auto_sort_is_stable_by_group() {
    let out = classify(&counts(&["C>T", "C>A", "T[C>T]A", "A[C>A]A"]));
    let labels: Vec<&str> = out.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["C>A", "A[C>A]A", "C>T", "T[C>T]A"]);
}

#[test]
fn test_auto_sort_skipped_when_first_row_unlabeled() {
    let input = counts(&["", "C>T", "C>A"]);
    let out = classify(&input);
    let labels: Vec<&str> = out.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["", "C>T", "C>A"]);
}

#[test]
fn test_explicit_sort_policies() {
    let input = counts(&["", "C>T", "C>A"]);

    let sorted = classify_with(&input, builtin_table(), SortPolicy::ByGroup);
    let labels: Vec<&str> = sorted.entries.iter().map(|e| e.label.as_str()).collect();
    // the absent group sorts as a single space, ahead of every category
    assert_eq!(labels, vec!["", "C>A", "C>T"]);

    let kept = classify_with(&counts(&["C>T", "C>A"]), builtin_table(), SortPolicy::Preserve);
    let labels: Vec<&str> = kept.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["C>T", "C>A"]);
}

#[test]
fn test_indel_groups_sort_order() {
    let out = classify(&counts(&["1:Ins:T:0", "5:Del:M:1", "2:Del:R:0", "1:Del:C:0"]));
    let groups: Vec<&str> = out.iter().map(|e| e.group.as_deref().unwrap()).collect();
    assert_eq!(
        groups,
        vec!["1bp deletion", "1bp insertion", ">1bp deletion", "Microhomology"]
    );
}

#[test]
fn test_check_batch() {
    let report = check_batch(&counts(&["C>A", "C>T"]));
    assert_eq!(report.rows, 2);
    assert!(report.is_consistent());
    assert!(report.warnings().is_empty());

    let mut mixed = counts(&["C>A", ""]);
    mixed[1].version = "ID".to_string();
    let report = check_batch(&mixed);
    assert!(report.mixed_labeling());
    assert_eq!(report.versions, vec![String::new(), "ID".to_string()]);
    assert!(!report.is_consistent());
    assert_eq!(report.warnings().len(), 2);
}
