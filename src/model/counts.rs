use serde::{Deserialize, Serialize};

/// One row of a patient's mutational-signature contribution table.
///
/// Identifier fields are carried through untouched; only `value` is
/// rewritten by percentage normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationalCount {
    #[serde(default)]
    pub unique_sample_key: String,
    #[serde(default)]
    pub patient_id: String,
    #[serde(default)]
    pub unique_patient_key: String,
    #[serde(default)]
    pub study_id: String,
    #[serde(default)]
    pub sample_id: String,
    #[serde(default)]
    pub mutational_signature_label: String,
    #[serde(default)]
    pub mutational_signature_class: String,
    #[serde(default)]
    pub version: String,
    pub value: f64,
}

impl MutationalCount {
    pub fn labeled(label: &str, value: f64) -> Self {
        Self {
            mutational_signature_label: label.to_string(),
            value,
            ..Self::default()
        }
    }

    pub fn is_labeled(&self) -> bool {
        !self.mutational_signature_label.is_empty()
    }
}
