//! Validating engine: range pre-check decorator for any ScoringEngine.

use crate::domain::{CmdResult, PatientAssessment};
use crate::ports::ScoringEngine;
use crate::CmdError;

/// Rejects assessments with out-of-range or non-finite fields before
/// delegating to the wrapped engine.
#[derive(Debug, Clone, Default)]
pub struct ValidatingEngine<E> {
    inner: E,
}

impl<E> ValidatingEngine<E>
where
    E: ScoringEngine,
{
    #[must_use]
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    /// The wrapped engine.
    #[must_use]
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E> ScoringEngine for ValidatingEngine<E>
where
    E: ScoringEngine,
{
    fn evaluate(&self, assessment: &PatientAssessment) -> Result<CmdResult, CmdError> {
        assessment.validate().map_err(CmdError::Validation)?;
        self.inner.evaluate(assessment)
    }

    fn name(&self) -> &'static str {
        "validating"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ReferenceEngine;

    #[test]
    fn test_valid_input_passes_through() {
        let engine = ValidatingEngine::new(ReferenceEngine::new());
        let assessment = PatientAssessment::default();
        let result = engine.evaluate(&assessment).expect("Should score");
        assert_eq!(result, CmdResult::evaluate(&assessment));
    }

    #[test]
    fn test_rejects_zero_intracranial_volume() {
        let engine = ValidatingEngine::new(ReferenceEngine::new());
        let assessment = PatientAssessment {
            intracranial_volume: 0.0,
            ..Default::default()
        };

        match engine.evaluate(&assessment) {
            Err(CmdError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("Intracranial volume"));
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_reports_all_violations() {
        let engine = ValidatingEngine::new(ReferenceEngine::new());
        let assessment = PatientAssessment {
            mmse: -1.0,
            adas13: 90.0,
            age: f64::NAN,
            ..Default::default()
        };

        let err = engine.evaluate(&assessment).unwrap_err();
        assert!(matches!(err, CmdError::Validation(ref e) if e.len() == 3));
    }
}
