//! CLI library components for RosMan.

pub mod batch;
pub mod logging;
