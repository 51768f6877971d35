//! Typed chart configuration
//!
//! The records here are the host-side view of a chart configuration. They
//! are plain data: `Option` fields that are `None` are simply absent from
//! the payload, and field names are cased by the serializer. The legend
//! callback handlers are the only members that can hold live references.

pub mod config;
pub mod enums;
pub mod handlers;
pub mod options;
pub mod references;

pub use config::{ChartConfig, ChartData, Dataset};
pub use enums::{AxisDisplay, ChartType, Position, TickSource, TimeDistribution};
pub use handlers::{LegendClickHandler, LegendHoverHandler, StaticHandler};
pub use options::{Axis, BaseOptions, Legend, LegendLabels, Scales, Ticks, Title};
pub use references::legend_references;
