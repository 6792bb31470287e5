use std::io::BufRead;

use crate::input::InputError;
use crate::model::MutationalCount;

/// Reads a JSON array of count objects with camelCase keys.
pub fn parse_counts_json<R: BufRead>(
    reader: R,
    source: &str,
) -> Result<Vec<MutationalCount>, InputError> {
    serde_json::from_reader(reader)
        .map_err(|e| InputError::Parse(format!("{}: {}", source, e)))
}
