//! Adapters layer: Concrete implementations of ports.
//!
//! - `reference`: the standard CMD model over the static tables
//! - `validation`: input range pre-check decorator
//! - `json`: JSON report writer
//! - `sanitize`: patient-identifier filtering for logs

pub mod json;
pub mod reference;
pub mod sanitize;
pub mod validation;

pub use json::JsonReportWriter;
pub use reference::ReferenceEngine;
pub use validation::ValidatingEngine;
