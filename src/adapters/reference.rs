//! Reference engine: Implementation of ScoringEngine over the static tables.

use crate::domain::{CmdResult, PatientAssessment};
use crate::ports::ScoringEngine;
use crate::CmdError;

/// The standard CMD model with compiled-in coefficients.
///
/// Accepts any numeric input; `NaN` and `inf` flow through to the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceEngine;

impl ReferenceEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ScoringEngine for ReferenceEngine {
    fn evaluate(&self, assessment: &PatientAssessment) -> Result<CmdResult, CmdError> {
        Ok(CmdResult::evaluate(assessment))
    }

    fn name(&self) -> &'static str {
        "reference"
    }
}
