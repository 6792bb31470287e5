use crate::signatures::{CategoryRule, RuleTable};

pub fn rule_matches(rule: &CategoryRule, label: &str) -> bool {
    label.contains(rule.name.as_str())
}

/// All rules matching `label`, in table order.
pub fn matching_rules<'a>(table: &'a RuleTable, label: &str) -> Vec<&'a CategoryRule> {
    table
        .rules
        .iter()
        .filter(|rule| rule_matches(rule, label))
        .collect()
}

/// The winning rule for `label`: the last match in table order.
pub fn resolve_rule<'a>(table: &'a RuleTable, label: &str) -> Option<&'a CategoryRule> {
    table.rules.iter().rev().find(|rule| rule_matches(rule, label))
}
