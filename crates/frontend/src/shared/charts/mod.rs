//! Движок графиков: чистые раскладки (`layout -> ChartScene`) и тонкие SVG-компоненты

pub mod aggregation;
pub mod axis;
pub mod bar;
pub mod comparison;
pub mod donut;
pub mod pie;
pub mod record;
pub mod scale;
pub mod scene;
pub mod spec;
pub mod tooltip;
pub mod transition;
pub mod ui;

pub use record::{Metric, MetricRecord, MetricValues, RawRecord};
pub use scene::ChartScene;
pub use spec::{ChartSpec, SeriesSpec, ValueFormat};
pub use tooltip::{TooltipController, TooltipHost};
