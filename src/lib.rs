//! # CMD Engine
//!
//! Cognitive-Metabolic Decoupling (CMD) risk scoring.
//!
//! CMD is the residual of a patient's observed cognition against the
//! cognition predicted from biomarkers, brain volume and demographics.
//! From it the engine derives a percentile within the diagnostic group,
//! a hazard ratio, a risk group and category, and recommendations.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Scoring functions and static reference tables
//! - `ports`: Engine and report-sink traits
//! - `adapters`: Reference engine, validating decorator, JSON writer, log sanitizer
//! - `application`: The assessment use case
//! - `config`: Environment configuration for the binary

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use domain::{AssessmentReport, CmdResult, DiagnosticGroup, PatientAssessment, RiskGroup};

/// Result type for CMD engine operations
pub type Result<T> = std::result::Result<T, CmdError>;

/// Main error type for the CMD engine
#[derive(Debug, thiserror::Error)]
pub enum CmdError {
    #[error("Invalid assessment: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Unknown diagnosis code: {0:?}")]
    UnknownDiagnosis(String),

    #[error("Report delivery failed: {0}")]
    Report(#[from] ports::ReportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
