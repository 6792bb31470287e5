pub mod cli;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod signatures;

pub use model::{
    ChartVersion, ClassifiedEntry, LegendEntry, LegendLabel, MutationalCount, Span, SpanGroup,
};
pub use pipeline::stage1_classify::{SortPolicy, classify};
pub use pipeline::stage2_percent::{NormalizeError, normalize};
pub use pipeline::stage3_legend::{BandScale, LegendLayout, build_legend};
pub use pipeline::stage4_spans::{CollapseError, collapse};
pub use pipeline::{ChartData, ChartError, ChartOptions, build_chart};
