#[derive(Debug, Clone, Copy)]
pub struct CategoryRuleDef {
    pub name: &'static str,
    pub category: &'static str,
    pub subcategory: Option<&'static str>,
    pub color: &'static str,
}

pub const UNKNOWN_GROUP: &str = "unknown";
pub const FALLBACK_COLOR: &str = "#EE4B2B";

const fn rule(name: &'static str, category: &'static str, color: &'static str) -> CategoryRuleDef {
    CategoryRuleDef {
        name,
        category,
        subcategory: None,
        color,
    }
}

const fn sub_rule(
    name: &'static str,
    category: &'static str,
    subcategory: &'static str,
    color: &'static str,
) -> CategoryRuleDef {
    CategoryRuleDef {
        name,
        category,
        subcategory: Some(subcategory),
        color,
    }
}

// Single base substitutions, then doublet substitutions (prefix patterns),
// then indels keyed by length:type:base-or-kind.
const BUILTIN_RULES: &[CategoryRuleDef] = &[
    rule("C>A", "C>A", "lightblue"),
    rule("C>G", "C>G", "darkblue"),
    rule("C>T", "C>T", "red"),
    rule("T>A", "T>A", "grey"),
    rule("T>C", "T>C", "green"),
    rule("T>G", "T>G", "pink"),
    rule("reference", "reference", "#1e97f3"),
    rule("AC>", "AC>NN", "skyblue"),
    rule("AT>", "AT>NN", "blue"),
    rule("CC>", "CC>NN", "lightgreen"),
    rule("CG>", "CG>NN", "darkgreen"),
    rule("CT>", "CT>NN", "pink"),
    // overrides the CG> color above
    rule("CG>", "CG>NN", "darkred"),
    rule("TA>", "TA>NN", "#FF7F50"),
    rule("TC>", "TC>NN", "orange"),
    rule("TG>", "TG>NN", "#ba55D3"),
    rule("TT>", "TT>NN", "purple"),
    rule("GC>", "GC>NN", "gold"),
    sub_rule("1:Del:C", "1bp deletion", "C", "#f39c12"),
    sub_rule("1:Del:T", "1bp deletion", "T", "#d68910"),
    sub_rule("2:Del:R", ">1bp deletion", "2", "#f1948a"),
    sub_rule("2:Del:M", "Microhomology", "2", "#D2B7F2"),
    sub_rule("3:Del:R", ">1bp deletion", "3", "#ec7063"),
    sub_rule("3:Del:M", "Microhomology", "3", "#9b59b6"),
    sub_rule("4:Del:R", ">1bp deletion", "4", "#e74c3c"),
    sub_rule("4:Del:M", "Microhomology", "4", "#7d3c98"),
    sub_rule("5:Del:R", ">1bp deletion", "5", "#cb4335"),
    sub_rule("5:Del:M", "Microhomology", "5", "#4a235a"),
    sub_rule("1:Ins:T", "1bp insertion", "T", "#28b463"),
    sub_rule("1:Ins:C", "1bp insertion", "C", "#82e0aa"),
    sub_rule("2:Ins:M", "Microhomology", "2", "#aed6f1"),
    sub_rule("2:Ins:R", ">1bp insertion", "2", "#33ffff"),
    sub_rule("3:Ins:M", "Microhomology", "3", "#85c1e9"),
    sub_rule("3:Ins:R", ">1bp insertion", "3", "#aed6F1"),
    sub_rule("4:Ins:M", "Microhomology", "4", "#85c1e9"),
    sub_rule("4:Ins:R", ">1bp insertion", "4", "#5dade2"),
    sub_rule("5:Ins:M", "Microhomology", "5", "#3498db"),
    sub_rule("5:Ins:R", ">1bp insertion", "5", "#2874a6"),
];

pub fn builtin_rules() -> &'static [CategoryRuleDef] {
    BUILTIN_RULES
}
