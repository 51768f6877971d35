//! Closed value catalogs
//!
//! See <https://www.chartjs.org/docs/latest/> for the meaning of each value.

use chartbridge_core::value_enum;

value_enum! {
    /// Which kind of chart a config describes
    pub enum ChartType {
        Line => "line",
        Bar => "bar",
        HorizontalBar => "horizontalBar",
        Radar => "radar",
        Doughnut => "doughnut",
        Pie => "pie",
        PolarArea => "polarArea",
        Bubble => "bubble",
        Scatter => "scatter",
    }
}

value_enum! {
    /// Placement of the legend or title
    pub enum Position {
        Top => "top",
        Left => "left",
        Bottom => "bottom",
        Right => "right",
    }
}

value_enum! {
    /// Axis visibility. Mixes boolean and string wire values.
    pub enum AxisDisplay {
        /// Hidden
        False => false,
        /// Visible
        True => true,
        /// Visible only if at least one associated dataset is visible
        Auto => "auto",
    }
}

value_enum! {
    /// Where time axis ticks come from
    pub enum TickSource {
        /// "Optimal" ticks based on scale size and time options
        Auto => "auto",
        /// Ticks from data, including labels from `{t|x|y}` objects
        Data => "data",
        /// Ticks from the chart labels only
        Labels => "labels",
    }
}

value_enum! {
    /// How data is spread along a time axis
    pub enum TimeDistribution {
        /// Spread according to their time; distances can vary
        Linear => "linear",
        /// Same distance from each other
        Series => "series",
    }
}
