//! Reference-carrying fields of a chart configuration

use crate::handlers::{instance_click_handler, instance_hover_handler};
use chartbridge_core::{FieldPath, ReferenceTable};

/// Declared path of the legend click handler
pub const LEGEND_ON_CLICK: [&str; 3] = ["options", "legend", "on_click"];

/// Declared path of the legend hover handler
pub const LEGEND_ON_HOVER: [&str; 3] = ["options", "legend", "on_hover"];

/// Table of every field whose live reference must survive the text form
pub fn legend_references() -> ReferenceTable {
    ReferenceTable::new()
        .with_slot(FieldPath::new(LEGEND_ON_CLICK), instance_click_handler)
        .with_slot(FieldPath::new(LEGEND_ON_HOVER), instance_hover_handler)
}
