//! Options shared by all chart types

use crate::enums::{AxisDisplay, Position, TickSource, TimeDistribution};
use crate::handlers::{LegendClickHandler, LegendHoverHandler};
use chartbridge_core::host_graph_record;
use serde::Serialize;

/// Options common to every chart
#[derive(Debug, Clone, Default, Serialize)]
pub struct BaseOptions {
    pub responsive: Option<bool>,
    pub maintain_aspect_ratio: Option<bool>,
    pub title: Option<Title>,
    pub legend: Option<Legend>,
    pub scales: Option<Scales>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Title {
    pub display: Option<bool>,
    pub position: Option<Position>,
    pub text: Option<String>,
    pub font_size: Option<u32>,
}

/// Legend configuration, including the click and hover callbacks
#[derive(Debug, Clone, Default, Serialize)]
pub struct Legend {
    pub display: Option<bool>,
    pub position: Option<Position>,
    pub full_width: Option<bool>,
    pub reverse: Option<bool>,
    pub on_click: Option<LegendClickHandler>,
    pub on_hover: Option<LegendHoverHandler>,
    pub labels: Option<LegendLabels>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LegendLabels {
    pub box_width: Option<u32>,
    pub font_size: Option<u32>,
    pub font_color: Option<String>,
    pub padding: Option<u32>,
    pub use_point_style: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Scales {
    pub x_axes: Option<Vec<Axis>>,
    pub y_axes: Option<Vec<Axis>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Axis {
    pub id: Option<String>,
    pub display: Option<AxisDisplay>,
    pub distribution: Option<TimeDistribution>,
    pub ticks: Option<Ticks>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Ticks {
    pub source: Option<TickSource>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub begin_at_zero: Option<bool>,
}

host_graph_record!(BaseOptions {
    "responsive" => optional(responsive),
    "maintain_aspect_ratio" => optional(maintain_aspect_ratio),
    "title" => optional(title),
    "legend" => optional(legend),
    "scales" => optional(scales),
});

host_graph_record!(Title {
    "display" => optional(display),
    "position" => optional(position),
    "text" => optional(text),
    "font_size" => optional(font_size),
});

host_graph_record!(Legend {
    "display" => optional(display),
    "position" => optional(position),
    "full_width" => optional(full_width),
    "reverse" => optional(reverse),
    "on_click" => optional(on_click),
    "on_hover" => optional(on_hover),
    "labels" => optional(labels),
});

host_graph_record!(LegendLabels {
    "box_width" => optional(box_width),
    "font_size" => optional(font_size),
    "font_color" => optional(font_color),
    "padding" => optional(padding),
    "use_point_style" => optional(use_point_style),
});

host_graph_record!(Scales {
    "x_axes" => optional(x_axes),
    "y_axes" => optional(y_axes),
});

host_graph_record!(Axis {
    "id" => optional(id),
    "display" => optional(display),
    "distribution" => optional(distribution),
    "ticks" => optional(ticks),
});

host_graph_record!(Ticks {
    "source" => optional(source),
    "min" => optional(min),
    "max" => optional(max),
    "begin_at_zero" => optional(begin_at_zero),
});
