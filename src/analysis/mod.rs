//! Scenario analysis modules
//!
//! Runs the full pipeline for one or two sets of inputs:
//! - Single-scenario pipeline
//! - A/B comparison
//! - Result formatting

pub mod compare;
pub mod report;
pub mod scenario;
