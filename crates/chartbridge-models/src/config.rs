//! Root chart configuration record

use crate::enums::ChartType;
use chartbridge_core::graph::{optional, required};
use chartbridge_core::{HostGraph, host_graph_record};
use serde::Serialize;
use std::any::Any;

/// Root of a chart configuration graph.
///
/// `O` is the options record and `D` the data record of the chart kind.
/// The data record always exists; options may be left out.
#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig<O, D> {
    /// Which chart this config is for
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    /// Identifier of the canvas element the chart is drawn on
    pub canvas_id: Option<String>,
    pub options: Option<O>,
    pub data: D,
}

impl<O, D: Default> ChartConfig<O, D> {
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            canvas_id: None,
            options: None,
            data: D::default(),
        }
    }
}

impl<O, D> ChartConfig<O, D> {
    pub fn with_canvas_id(mut self, canvas_id: impl Into<String>) -> Self {
        self.canvas_id = Some(canvas_id.into());
        self
    }

    pub fn with_options(mut self, options: O) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_data(mut self, data: D) -> Self {
        self.data = data;
        self
    }
}

impl<O, D> HostGraph for ChartConfig<O, D>
where
    O: HostGraph,
    D: HostGraph,
{
    fn child(&self, key: &str) -> Option<&dyn HostGraph> {
        match key {
            "type" => required(&self.chart_type),
            "canvas_id" => optional(&self.canvas_id),
            "options" => optional(&self.options),
            "data" => required(&self.data),
            _ => None,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Labels plus datasets; the data record of most chart kinds
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Dataset {
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background_color: Option<String>,
    pub border_color: Option<String>,
    pub border_width: Option<u32>,
    pub fill: Option<bool>,
    pub hidden: Option<bool>,
}

host_graph_record!(ChartData {
    "labels" => required(labels),
    "datasets" => required(datasets),
});

host_graph_record!(Dataset {
    "label" => optional(label),
    "data" => required(data),
    "background_color" => optional(background_color),
    "border_color" => optional(border_color),
    "border_width" => optional(border_width),
    "fill" => optional(fill),
    "hidden" => optional(hidden),
});
