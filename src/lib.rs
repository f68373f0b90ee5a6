//! ngviz — dependency graph model and symbol identity resolution for
//! Angular application visualizations

pub mod logging;

pub use ngviz_core::*;
