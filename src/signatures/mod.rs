pub mod defs;
pub mod loader;
pub mod matcher;

use std::sync::OnceLock;

use serde::Serialize;

pub use defs::{CategoryRuleDef, FALLBACK_COLOR, UNKNOWN_GROUP, builtin_rules};
pub use loader::{RuleError, load_rule_table};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRule {
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub color: String,
}

impl From<&CategoryRuleDef> for CategoryRule {
    fn from(def: &CategoryRuleDef) -> Self {
        Self {
            name: def.name.to_string(),
            category: def.category.to_string(),
            subcategory: def.subcategory.map(str::to_string),
            color: def.color.to_string(),
        }
    }
}

/// Ordered rule list. Order matters: later rules override earlier ones
/// when both match the same label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleTable {
    pub source: String,
    pub rules: Vec<CategoryRule>,
}

impl RuleTable {
    pub fn new(source: impl Into<String>, rules: Vec<CategoryRule>) -> Self {
        Self {
            source: source.into(),
            rules,
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

pub fn builtin_table() -> &'static RuleTable {
    static TABLE: OnceLock<RuleTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        RuleTable::new(
            "built-in",
            builtin_rules().iter().map(CategoryRule::from).collect(),
        )
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/signatures/tests.rs"]
mod tests;
