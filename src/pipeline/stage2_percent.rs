use thiserror::Error;

use crate::model::MutationalCount;
use crate::pipeline::round_half_up;

#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Rescales values to whole percentages of the batch total.
///
/// Each row is rounded on its own, so the result may sum to 99 or 101.
pub fn normalize(counts: &[MutationalCount]) -> Result<Vec<MutationalCount>, NormalizeError> {
    if counts.is_empty() {
        return Err(NormalizeError::InvalidInput(
            "cannot normalize an empty count batch".to_string(),
        ));
    }
    if let Some(bad) = counts.iter().find(|c| !c.value.is_finite()) {
        return Err(NormalizeError::InvalidInput(format!(
            "non-finite value {} for label '{}'",
            bad.value, bad.mutational_signature_label
        )));
    }

    let total: f64 = counts.iter().map(|c| c.value).sum();
    if total == 0.0 || !total.is_finite() {
        return Err(NormalizeError::InvalidInput(format!(
            "count total is {total}; percentages are undefined"
        )));
    }

    Ok(counts
        .iter()
        .map(|c| MutationalCount {
            value: round_half_up(c.value / total * 100.0),
            ..c.clone()
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_percent.rs"]
mod tests;
