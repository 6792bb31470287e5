use super::sentinel::NONE_SENTINEL;
use super::*;

fn unlabeled_entry() -> ClassifiedEntry {
    ClassifiedEntry {
        count: MutationalCount {
            sample_id: "S1".to_string(),
            value: 3.0,
            ..MutationalCount::default()
        },
        group: None,
        label: String::new(),
        color_value: "#EE4B2B".to_string(),
        subcategory: None,
    }
}

#[test]
fn test_absent_group_serializes_as_single_space() {
    let json = serde_json::to_value(unlabeled_entry()).unwrap();
    assert_eq!(json["group"], NONE_SENTINEL);
    assert_eq!(json["subcategory"], NONE_SENTINEL);
    assert_eq!(json["label"], "");
    assert_eq!(json["colorValue"], "#EE4B2B");
    // count fields are flattened with their upstream camelCase names
    assert_eq!(json["sampleId"], "S1");
    assert_eq!(json["mutationalSignatureLabel"], "");
    assert_eq!(json["value"], 3.0);
}

#[test]
fn test_single_space_reads_back_as_none() {
    let raw = r##"{
        "mutationalSignatureLabel": "1:Del:C:0",
        "version": "ID",
        "value": 4.0,
        "group": "1bp deletion",
        "label": "1:Del:C:0",
        "colorValue": "#f39c12",
        "subcategory": " "
    }"##;
    let entry: ClassifiedEntry = serde_json::from_str(raw).unwrap();
    assert_eq!(entry.group.as_deref(), Some("1bp deletion"));
    assert_eq!(entry.subcategory, None);
    assert_eq!(entry.count.version, "ID");
    assert_eq!(entry.count.value, 4.0);
}

#[test]
fn test_counts_accept_missing_identifiers() {
    let raw = r#"[{"mutationalSignatureLabel": "C>A", "value": 7}]"#;
    let counts: Vec<MutationalCount> = serde_json::from_str(raw).unwrap();
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].mutational_signature_label, "C>A");
    assert_eq!(counts[0].value, 7.0);
    assert!(counts[0].patient_id.is_empty());
    assert!(counts[0].is_labeled());
}

#[test]
fn test_chart_version_tags() {
    assert_eq!(ChartVersion::from_tag("ID"), ChartVersion::Indel);
    assert!(ChartVersion::from_tag("ID").is_indel());
    assert_eq!(
        ChartVersion::from_tag("SBS"),
        ChartVersion::Standard("SBS".to_string())
    );
    // tags are case sensitive
    assert!(!ChartVersion::from_tag("id").is_indel());
    assert_eq!(ChartVersion::from_tag("DBS").to_string(), "DBS");

    let json = serde_json::to_string(&ChartVersion::Indel).unwrap();
    assert_eq!(json, "\"ID\"");
    let back: ChartVersion = serde_json::from_str("\"DBS\"").unwrap();
    assert_eq!(back, ChartVersion::Standard("DBS".to_string()));
}

#[test]
fn test_standard_span_omits_indel_fields() {
    let span = Span {
        color: "red".to_string(),
        start: "C>T".to_string(),
        end: "C>T".to_string(),
        indel: None,
    };
    let json = serde_json::to_value(&span).unwrap();
    assert_eq!(json["start"], "C>T");
    assert!(json.get("category").is_none());
    assert!(json.get("group").is_none());

    let span = Span {
        indel: Some(SpanGroup {
            category: None,
            group: Some("1bp deletion".to_string()),
        }),
        ..span
    };
    let json = serde_json::to_value(&span).unwrap();
    assert_eq!(json["category"], " ");
    assert_eq!(json["group"], "1bp deletion");
}

#[test]
fn test_legend_label_from_classified_entry() {
    let mut entry = unlabeled_entry();
    entry.group = Some("C>A".to_string());
    entry.label = "A[C>A]A".to_string();
    entry.color_value = "lightblue".to_string();
    let label = LegendLabel::from(&entry);
    assert_eq!(label.group.as_deref(), Some("C>A"));
    assert_eq!(label.label, "A[C>A]A");
    assert_eq!(label.color, "lightblue");
    assert_eq!(label.subcategory, None);
}

#[test]
fn test_span_json_round_trip_keeps_shape() {
    let standard: Span =
        serde_json::from_str(r#"{"color":"red","start":"C>T","end":"C>T"}"#).unwrap();
    assert_eq!(standard.indel, None);

    let indel = Span {
        color: "#f39c12".to_string(),
        start: "1:Del:C:0".to_string(),
        end: "1:Del:C:5".to_string(),
        indel: Some(SpanGroup {
            category: Some("C".to_string()),
            group: None,
        }),
    };
    for span in [standard, indel] {
        let json = serde_json::to_string(&span).unwrap();
        let back: Span = serde_json::from_str(&json).unwrap();
        assert_eq!(back, span);
    }
}
