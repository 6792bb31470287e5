//! Wire mapping for absent group/subcategory values.
//!
//! Internally an absent value is `None`. Downstream chart consumers expect
//! the single-space string instead, so that is what goes over the wire and
//! what is mapped back to `None` on read.

use serde::{Deserialize, Deserializer, Serializer};

pub const NONE_SENTINEL: &str = " ";

pub fn key(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NONE_SENTINEL)
}

pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(key(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| s != NONE_SENTINEL))
}
