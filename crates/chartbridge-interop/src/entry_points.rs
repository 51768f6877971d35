//! Default foreign entry point names

/// Initial chart setup; takes the prepared tree, answers a boolean
pub const SETUP: &str = "ChartSetup.Setup";
/// Update of an existing chart; takes the graph with nulls, answers a boolean
pub const UPDATE: &str = "ChartSetup.Update";
/// Diagnostic; answers the text form of any payload
pub const STRING_REP: &str = "getStringRep";
