pub mod chart;
pub mod counts;
pub mod sentinel;
pub mod version;

pub use chart::{ClassifiedEntry, LegendEntry, LegendLabel, Span, SpanGroup};
pub use counts::MutationalCount;
pub use version::ChartVersion;

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
