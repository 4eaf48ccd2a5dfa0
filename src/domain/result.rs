//! Scoring output types.
//!
//! `CmdResult` is the engine's answer for one assessment; `AssessmentReport`
//! bundles it with the lookup-table entries a renderer displays verbatim.

use serde::Serialize;

use super::patient::PatientAssessment;
use super::percentile::percentile_in;
use super::recommendation::recommendations;
use super::reference::{ProgressionRiskProfile, ReferenceData, ReferenceDistribution};
use super::risk::{classify_category, classify_group, hazard_ratio, RiskCategory, RiskGroup};
use super::score::{self, ScoreBreakdown};

/// Result of one CMD computation. Built once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CmdResult {
    pub cmd: f64,
    pub mds: f64,
    pub hippocampal_normalization: f64,
    pub cognitive_composite: f64,
    /// Relative hazard of progression; underflows to 0 for cmd above ~1024
    pub hazard_ratio: f64,
    pub risk_group: RiskGroup,
    /// Rank within the diagnostic group, 0-100
    pub percentile: u8,
    /// Cohort distribution the percentile was computed against
    pub reference_distribution: ReferenceDistribution,
}

impl CmdResult {
    /// Score an assessment against the compiled-in reference tables.
    #[must_use]
    pub fn evaluate(assessment: &PatientAssessment) -> Self {
        let scores = score::compute(assessment);
        let reference = *ReferenceData::distribution(assessment.diagnosis);
        Self::from_scores(scores, reference)
    }

    /// Derive the classified result from precomputed scores.
    #[must_use]
    pub fn from_scores(scores: ScoreBreakdown, reference: ReferenceDistribution) -> Self {
        Self {
            cmd: scores.cmd,
            mds: scores.mds,
            hippocampal_normalization: scores.hippocampal_normalization,
            cognitive_composite: scores.cognitive_composite,
            hazard_ratio: hazard_ratio(scores.cmd),
            risk_group: classify_group(scores.cmd),
            percentile: percentile_in(scores.cmd, &reference),
            reference_distribution: reference,
        }
    }

    /// Finer six-way category of this result's CMD.
    #[must_use]
    pub fn risk_category(&self) -> RiskCategory {
        classify_category(self.cmd)
    }

    /// Progression statistics for this result's risk group.
    #[must_use]
    pub fn progression(&self) -> &'static ProgressionRiskProfile {
        ReferenceData::progression(self.risk_group)
    }
}

/// Everything a report renderer needs for one assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    /// Unique identifier
    pub id: String,

    /// Reference to patient (if available)
    pub patient_identifier: Option<String>,

    pub result: CmdResult,

    pub risk_category: RiskCategory,

    /// Plain-language reading of the risk group
    pub risk_group_description: &'static str,

    pub recommendations: Vec<String>,

    pub progression: ProgressionRiskProfile,

    /// CSF p-tau181, shown but not scored
    pub csf_ptau181: f64,

    /// APOE ε4 allele count, shown but not scored
    pub apoe4_allele_count: u8,

    /// Timestamp of assessment
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl AssessmentReport {
    /// Assemble a report from an assessment and its result.
    #[must_use]
    pub fn new(assessment: &PatientAssessment, result: CmdResult) -> Self {
        Self {
            id: uuid_v4(),
            patient_identifier: assessment.patient_identifier.clone(),
            risk_category: result.risk_category(),
            risk_group_description: result.risk_group.description(),
            recommendations: recommendations(result.cmd)
                .iter()
                .map(|r| (*r).to_string())
                .collect(),
            progression: *result.progression(),
            csf_ptau181: assessment.csf_ptau181,
            apoe4_allele_count: assessment.apoe4_allele_count,
            result,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Random RFC 4122 version-4 identifier drawn from an entropy-seeded ChaCha20 stream.
fn uuid_v4() -> String {
    use rand::{RngCore, SeedableRng};

    let mut bytes = [0u8; 16];
    rand_chacha::ChaCha20Rng::from_entropy().fill_bytes(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let mut id = String::with_capacity(36);
    for (i, byte) in bytes.iter().enumerate() {
        if matches!(i, 4 | 6 | 8 | 10) {
            id.push('-');
        }
        id.push_str(&format!("{byte:02x}"));
    }
    id
}
