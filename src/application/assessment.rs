//! Assessment service: Orchestrates CMD scoring and report delivery.
//!
//! This service coordinates:
//! - Scoring through the configured engine
//! - Risk category and recommendation lookup
//! - Progression profile lookup
//! - Handing the finished report to the sink

use std::sync::Arc;

use crate::domain::{AssessmentReport, CmdResult, PatientAssessment};
use crate::ports::{ReportSink, ScoringEngine};
use crate::CmdError;

/// Service for scoring patient assessments.
///
/// Holds no per-call state; one instance can serve any number of callers.
pub struct AssessmentService<E, S>
where
    E: ScoringEngine,
    S: ReportSink,
{
    engine: Arc<E>,
    sink: Arc<S>,
    strict_publish: bool,
}

impl<E, S> AssessmentService<E, S>
where
    E: ScoringEngine,
    S: ReportSink,
{
    /// Create a new assessment service.
    pub fn new(engine: Arc<E>, sink: Arc<S>) -> Self {
        Self {
            engine,
            sink,
            strict_publish: false,
        }
    }

    /// Fail the assessment when the sink cannot take the report.
    ///
    /// Use when the sink is the only output, e.g. stdout for the CLI.
    #[must_use]
    pub fn with_strict_publish(mut self, strict: bool) -> Self {
        self.strict_publish = strict;
        self
    }

    /// Score an assessment without building a report.
    ///
    /// # Errors
    /// Returns error if the engine rejects the assessment.
    pub fn score(&self, assessment: &PatientAssessment) -> Result<CmdResult, CmdError> {
        self.engine.evaluate(assessment)
    }

    /// Run the full assessment pipeline.
    ///
    /// 1. Score with the engine
    /// 2. Classify and attach recommendations and progression statistics
    /// 3. Publish to the sink
    ///
    /// A sink failure is logged and does not fail the call unless strict
    /// publishing is enabled.
    ///
    /// # Errors
    /// Returns error if the engine rejects the assessment, or
    /// `CmdError::Report` if publishing fails in strict mode.
    pub fn run_assessment(
        &self,
        assessment: &PatientAssessment,
    ) -> Result<AssessmentReport, CmdError> {
        tracing::info!(
            "Starting CMD assessment (engine={}, diagnosis={})",
            self.engine.name(),
            assessment.diagnosis
        );

        tracing::debug!("Step 1: Scoring assessment...");
        let result = self.engine.evaluate(assessment).map_err(|e| {
            tracing::warn!("Assessment rejected: {}", e);
            e
        })?;
        tracing::debug!(
            "cognitive_composite={:.4}, mds={:.4}, hippocampal_normalization={:.6}",
            result.cognitive_composite,
            result.mds,
            result.hippocampal_normalization
        );

        if !result.cmd.is_finite() {
            tracing::warn!("CMD is not finite ({}); check input volumes and scores", result.cmd);
        }

        tracing::debug!("Step 2: Building report...");
        let report = AssessmentReport::new(assessment, result);

        tracing::debug!("Step 3: Publishing report...");
        if let Err(e) = self.sink.publish(&report) {
            if self.strict_publish {
                tracing::error!("Failed to publish report: {}", e);
                return Err(e.into());
            }
            tracing::warn!("Failed to publish report: {}", e);
        }

        tracing::info!(
            "Assessment complete: cmd={:.3}, percentile={}, group={}, category={}, hazard_ratio={:.2}",
            report.result.cmd,
            report.result.percentile,
            report.result.risk_group,
            report.risk_category,
            report.result.hazard_ratio
        );

        Ok(report)
    }
}
