//! CMD score computation.
//!
//! Standardizes cognitive scores and biomarkers against fixed cohort
//! norms, predicts cognition from biomarkers and demographics, and takes
//! the residual. Plain `f64` arithmetic throughout, no clamping: invalid
//! inputs produce `NaN`/`inf` rather than errors.

use serde::Serialize;

use super::patient::PatientAssessment;

/// Cohort norm used to z-score a single measurement.
#[derive(Debug, Clone, Copy)]
struct Norm {
    mean: f64,
    sd: f64,
}

impl Norm {
    fn z(&self, value: f64) -> f64 {
        (value - self.mean) / self.sd
    }
}

const MMSE: Norm = Norm { mean: 26.5, sd: 4.2 };
const ADAS13: Norm = Norm { mean: 20.1, sd: 8.7 };
const FDG: Norm = Norm { mean: 1.2, sd: 0.16 };
const ABETA42: Norm = Norm { mean: 980.5, sd: 454.6 };
const TAU: Norm = Norm { mean: 290.3, sd: 136.6 };

// Metabolic dysregulation weights
const W_FDG: f64 = 0.447;
const W_TAU: f64 = 0.178;
const W_ABETA: f64 = 0.176;

// Predicted-cognition regression
const B_MDS: f64 = 0.817;
const B_HIPPOCAMPUS: f64 = 322.3;
const B_AGE: f64 = 0.003;
const B_MALE: f64 = 0.009;
const INTERCEPT: f64 = -1.703;

/// Intermediate and final scores for one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Observed minus predicted cognition
    pub cmd: f64,
    /// Metabolic dysregulation score
    pub mds: f64,
    /// Hippocampal volume / intracranial volume
    pub hippocampal_normalization: f64,
    /// Mean of MMSE and inverted ADAS-13 z-scores
    pub cognitive_composite: f64,
}

/// Composite cognition: mean of the MMSE z-score and the sign-inverted
/// ADAS-13 z-score (higher ADAS-13 is worse).
#[must_use]
pub fn cognitive_composite(mmse: f64, adas13: f64) -> f64 {
    let mmse_z = MMSE.z(mmse);
    let adas13_z = -ADAS13.z(adas13);
    (mmse_z + adas13_z) / 2.0
}

#[must_use]
pub fn hippocampal_normalization(hippocampal_volume: f64, intracranial_volume: f64) -> f64 {
    hippocampal_volume / intracranial_volume
}

/// Weighted combination of FDG, tau and amyloid z-scores.
#[must_use]
pub fn metabolic_dysregulation(fdg_suvr: f64, csf_abeta42: f64, csf_tau: f64) -> f64 {
    let fdg_z = FDG.z(fdg_suvr);
    let abeta_z = ABETA42.z(csf_abeta42);
    let tau_z = TAU.z(csf_tau);
    W_FDG * fdg_z - W_TAU * tau_z + W_ABETA * abeta_z
}

/// Cognition expected from biomarkers, brain volume and demographics.
#[must_use]
pub fn predicted_cognition(mds: f64, hippocampal_normalization: f64, age: f64, male: f64) -> f64 {
    B_MDS * mds + B_HIPPOCAMPUS * hippocampal_normalization + B_AGE * age + B_MALE * male
        + INTERCEPT
}

/// Run the full score pipeline for one assessment.
///
/// p-tau181 and APOE4 count are intentionally absent from the model.
#[must_use]
pub fn compute(assessment: &PatientAssessment) -> ScoreBreakdown {
    let cognitive_composite = cognitive_composite(assessment.mmse, assessment.adas13);
    let hippocampal_normalization = hippocampal_normalization(
        assessment.hippocampal_volume,
        assessment.intracranial_volume,
    );
    let mds = metabolic_dysregulation(
        assessment.fdg_suvr,
        assessment.csf_abeta42,
        assessment.csf_tau,
    );
    let predicted = predicted_cognition(
        mds,
        hippocampal_normalization,
        assessment.age,
        assessment.biological_sex.male_indicator(),
    );

    ScoreBreakdown {
        cmd: cognitive_composite - predicted,
        mds,
        hippocampal_normalization,
        cognitive_composite,
    }
}
