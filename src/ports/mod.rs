//! Ports layer: Trait definitions for the engine boundary.
//!
//! Following Hexagonal Architecture, these traits separate the scoring
//! pipeline from input pre-checks and from whatever renders the result.

mod engine;
mod report;

pub use engine::ScoringEngine;
pub use report::{ReportError, ReportSink};
