//! Risk classification of a CMD score.
//!
//! Positive CMD means cognition is better than the biomarkers predict
//! (resilience); negative CMD means worse (vulnerability).

use serde::Serialize;

use super::reference::ReferenceData;

/// Half-width of the neutral CMD band.
pub const GROUP_THRESHOLD: f64 = 0.33;

/// Cox model coefficient for CMD.
pub const HAZARD_COEFFICIENT: f64 = -0.728;

/// Three-way risk grouping used for progression statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskGroup {
    #[serde(rename = "HighCMD")]
    HighCmd,
    #[serde(rename = "MediumCMD")]
    MediumCmd,
    #[serde(rename = "LowCMD")]
    LowCmd,
}

impl RiskGroup {
    pub const ALL: [Self; 3] = [Self::HighCmd, Self::MediumCmd, Self::LowCmd];

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::HighCmd => "Cognition exceeds biomarker expectation",
            Self::MediumCmd => "Cognition in line with biomarker expectation",
            Self::LowCmd => "Cognition below biomarker expectation",
        }
    }
}

impl std::fmt::Display for RiskGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HighCmd => write!(f, "HighCMD"),
            Self::MediumCmd => write!(f, "MediumCMD"),
            Self::LowCmd => write!(f, "LowCMD"),
        }
    }
}

/// Six-way risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskCategory {
    VeryHighVulnerability,
    HighVulnerability,
    ModerateVulnerability,
    ModerateResilience,
    HighResilience,
    VeryHighResilience,
    /// No band matched; only a non-numeric CMD can produce this
    Unclassified,
}

impl RiskCategory {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryHighVulnerability => "Very High Vulnerability",
            Self::HighVulnerability => "High Vulnerability",
            Self::ModerateVulnerability => "Moderate Vulnerability",
            Self::ModerateResilience => "Moderate Resilience",
            Self::HighResilience => "High Resilience",
            Self::VeryHighResilience => "Very High Resilience",
            Self::Unclassified => "Unclassified",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a CMD score to its risk group. The thresholds themselves are `MediumCmd`.
#[must_use]
pub fn classify_group(cmd: f64) -> RiskGroup {
    if cmd > GROUP_THRESHOLD {
        RiskGroup::HighCmd
    } else if cmd < -GROUP_THRESHOLD {
        RiskGroup::LowCmd
    } else {
        RiskGroup::MediumCmd
    }
}

/// Map a CMD score to its risk category, scanning bands from lowest to highest.
#[must_use]
pub fn classify_category(cmd: f64) -> RiskCategory {
    ReferenceData::category_bands()
        .iter()
        .find(|band| band.contains(cmd))
        .map_or(RiskCategory::Unclassified, |band| band.category)
}

/// Relative hazard of progression: `exp(-0.728 * cmd)`.
///
/// Strictly positive while the exponent stays above the `f64` underflow
/// limit (cmd below roughly 1024); larger scores round to exactly 0.
#[must_use]
pub fn hazard_ratio(cmd: f64) -> f64 {
    (HAZARD_COEFFICIENT * cmd).exp()
}
