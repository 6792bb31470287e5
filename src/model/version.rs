use std::fmt;

use serde::{Deserialize, Serialize};

pub const INDEL_TAG: &str = "ID";

/// Chart variant. Indel charts group by subcategory first, every other
/// signature class groups by category alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartVersion {
    Standard(String),
    Indel,
}

impl ChartVersion {
    pub fn from_tag(tag: &str) -> Self {
        if tag == INDEL_TAG {
            ChartVersion::Indel
        } else {
            ChartVersion::Standard(tag.to_string())
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            ChartVersion::Standard(tag) => tag,
            ChartVersion::Indel => INDEL_TAG,
        }
    }

    pub fn is_indel(&self) -> bool {
        matches!(self, ChartVersion::Indel)
    }
}

impl From<String> for ChartVersion {
    fn from(value: String) -> Self {
        ChartVersion::from_tag(&value)
    }
}

impl From<ChartVersion> for String {
    fn from(value: ChartVersion) -> Self {
        value.tag().to_string()
    }
}

impl fmt::Display for ChartVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
