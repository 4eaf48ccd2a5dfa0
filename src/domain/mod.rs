//! Domain layer: Core scoring types and logic.
//!
//! Pure functions over the input assessment and the static reference
//! tables. Nothing here performs I/O or holds mutable state.

mod patient;
pub mod percentile;
pub mod recommendation;
mod reference;
mod result;
pub mod risk;
pub mod score;

pub use patient::{BiologicalSex, DiagnosticGroup, PatientAssessment};
pub use percentile::{percentile, percentile_for_code};
pub use recommendation::recommendations;
pub use reference::{CategoryBand, ProgressionRiskProfile, ReferenceData, ReferenceDistribution};
pub use result::{AssessmentReport, CmdResult};
pub use risk::{classify_category, classify_group, hazard_ratio, RiskCategory, RiskGroup};
pub use score::ScoreBreakdown;
