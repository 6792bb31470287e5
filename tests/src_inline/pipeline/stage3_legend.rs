use super::*;

fn label(group: Option<&str>, label: &str, color: &str) -> LegendLabel {
    LegendLabel {
        group: group.map(str::to_string),
        label: label.to_string(),
        color: color.to_string(),
        subcategory: None,
    }
}

fn sample_labels() -> Vec<LegendLabel> {
    vec![
        label(Some("C>A"), "A[C>A]A", "lightblue"),
        label(Some("C>A"), "A[C>A]C", "lightblue"),
        label(Some("C>G"), "A[C>G]A", "darkblue"),
    ]
}

#[test]
fn test_band_scale_equal_slots() {
    let scale = band_scale(&sample_labels(), 0.0, 300.0);
    assert_eq!(scale.domain().len(), 3);
    assert_eq!(scale.step(), 100.0);
    assert_eq!(scale.bandwidth(), 100.0);
    assert_eq!(scale.position("A[C>A]A"), Some(0.0));
    assert_eq!(scale.position("A[C>G]A"), Some(200.0));
    assert_eq!(scale.position("missing"), None);
    assert_eq!(scale.extent("A[C>A]A", "A[C>A]C"), Some((0.0, 200.0)));
    assert_eq!(scale.range(), (0.0, 300.0));
}

#[test]
fn test_band_scale_offset_range_and_duplicates() {
    let scale = BandScale::new(["x", "y", "x", "z"], 100.0, 400.0);
    assert_eq!(scale.domain(), &["x".to_string(), "y".to_string(), "z".to_string()]);
    assert_eq!(scale.position("x"), Some(100.0));
    assert_eq!(scale.position("z"), Some(300.0));
    assert_eq!(scale.index_of("y"), Some(1));
}

#[test]
fn test_band_scale_reversed_range() {
    let scale = BandScale::new(["a", "b"], 600.0, 0.0);
    assert_eq!(scale.step(), 300.0);
    assert_eq!(scale.bandwidth(), 300.0);
    assert_eq!(scale.position("a"), Some(300.0));
    assert_eq!(scale.position("b"), Some(0.0));
    assert_eq!(scale.extent("a", "a"), Some((300.0, 600.0)));
    assert_eq!(scale.extent("a", "b"), Some((0.0, 600.0)));
    assert_eq!(scale.range(), (600.0, 0.0));
}

#[test]
fn test_band_scale_empty() {
    let scale = BandScale::new(Vec::<&str>::new(), 0.0, 100.0);
    assert_eq!(scale.step(), 0.0);
    assert_eq!(scale.position("a"), None);
}

#[test]
fn test_legend_entries_projection() {
    let entries = legend_entries(&sample_labels());
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].label, "A[C>A]A");
    assert_eq!(entries[0].value, "A[C>A]A");
    assert_eq!(entries[0].color, "lightblue");
    assert_eq!(entries[2].group.as_deref(), Some("C>G"));
}

#[test]
fn test_build_legend_sizes_and_centers() {
    let layout = build_legend(&sample_labels(), 0.0, 300.0);
    assert_eq!(
        layout.group_keys,
        vec![Some("C>A".to_string()), Some("C>G".to_string())]
    );
    assert_eq!(layout.group_sizes, vec![2, 1]);
    assert_eq!(layout.group_centers, vec![1, 1]);
}

#[test]
fn test_centers_round_half_up() {
    let mut labels = Vec::new();
    for (group, n) in [("a", 1usize), ("b", 2), ("c", 3), ("d", 5), ("e", 16)] {
        for i in 0..n {
            labels.push(label(Some(group), &format!("{}{}", group, i), "black"));
        }
    }
    let layout = build_legend(&labels, 0.0, 600.0);
    assert_eq!(layout.group_sizes, vec![1, 2, 3, 5, 16]);
    assert_eq!(layout.group_centers, vec![1, 1, 2, 3, 8]);
}

#[test]
fn test_group_keys_first_seen_not_sorted() {
    let labels = vec![
        label(Some("T>A"), "t1", "grey"),
        label(None, "", "#EE4B2B"),
        label(Some("C>A"), "c1", "lightblue"),
        label(Some("T>A"), "t2", "grey"),
    ];
    let layout = build_legend(&labels, 0.0, 100.0);
    assert_eq!(
        layout.group_keys,
        vec![Some("T>A".to_string()), None, Some("C>A".to_string())]
    );
    assert_eq!(layout.group_sizes, vec![2, 1, 1]);
}
