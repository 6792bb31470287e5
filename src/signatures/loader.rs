use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::signatures::{CategoryRule, RuleTable};

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("failed to read rule table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{source_name}:{line} malformed rule (expected 3 or 4 tab-separated columns)")]
    Malformed { source_name: String, line: usize },
    #[error("{source_name}:{line} empty {field} field")]
    EmptyField {
        source_name: String,
        line: usize,
        field: &'static str,
    },
    #[error("{0} contains no rules")]
    Empty(String),
}

pub fn load_rule_table(path: &Path) -> Result<RuleTable, RuleError> {
    let content = std::fs::read_to_string(path).map_err(|source| RuleError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_rule_tsv(&content, &path.display().to_string())
}

/// Columns: `name`, `category`, `color`, optional `subcategory`.
/// Blank lines and `#` comments are skipped; rule order is kept.
pub fn parse_rule_tsv(content: &str, source: &str) -> Result<RuleTable, RuleError> {
    let mut rules = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.trim().is_empty() || trimmed.trim_start().starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = trimmed.split('\t').collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(RuleError::Malformed {
                source_name: source.to_string(),
                line: line_no,
            });
        }

        let name = required(parts[0], "name", source, line_no)?;
        let category = required(parts[1], "category", source, line_no)?;
        let color = required(parts[2], "color", source, line_no)?;
        let subcategory = parts
            .get(3)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        rules.push(CategoryRule {
            name,
            category,
            subcategory,
            color,
        });
    }

    let table = RuleTable::new(source, rules);
    if table.is_empty() {
        return Err(RuleError::Empty(source.to_string()));
    }
    info!(source, rules = table.len(), "rule table loaded");
    Ok(table)
}

// Names are matched as substrings, so surrounding whitespace is significant
// and only the other columns get trimmed.
fn required(
    raw: &str,
    field: &'static str,
    source: &str,
    line: usize,
) -> Result<String, RuleError> {
    let value = if field == "name" { raw } else { raw.trim() };
    if value.trim().is_empty() {
        return Err(RuleError::EmptyField {
            source_name: source.to_string(),
            line,
            field,
        });
    }
    Ok(value.to_string())
}
