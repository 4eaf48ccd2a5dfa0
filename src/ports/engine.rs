//! Scoring engine port: Trait for turning an assessment into a CMD result.
//!
//! The application talks to scoring only through this trait, so input
//! pre-checks or alternative engines can be layered on without touching
//! the domain functions.

use crate::domain::{CmdResult, PatientAssessment};
use crate::CmdError;

/// Trait for CMD scoring engines.
///
/// Implementations must be pure: the same assessment always yields the
/// same result and no state is retained between calls.
pub trait ScoringEngine: Send + Sync {
    /// Score a single assessment.
    ///
    /// # Errors
    /// Returns `CmdError::Validation` if the implementation rejects the input.
    fn evaluate(&self, assessment: &PatientAssessment) -> Result<CmdResult, CmdError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}
