//! Static reference tables.
//!
//! Cohort CMD distributions per diagnostic group, the risk-category bands
//! and progression statistics per risk group. All tables are compiled in
//! and never change at runtime.

use serde::Serialize;

use super::patient::DiagnosticGroup;
use super::risk::{RiskCategory, RiskGroup};

/// Cohort CMD distribution for one diagnostic group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceDistribution {
    pub diagnosis: DiagnosticGroup,
    pub mean: f64,
    /// Standard deviation, always > 0
    pub sd: f64,
}

/// One band of the risk-category table: `(lower, upper]`.
///
/// `None` marks an unbounded end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryBand {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub category: RiskCategory,
}

impl CategoryBand {
    /// Whether `cmd` lies inside this band.
    #[must_use]
    pub fn contains(&self, cmd: f64) -> bool {
        self.lower.map_or(true, |lower| cmd > lower) && self.upper.map_or(true, |upper| cmd <= upper)
    }

    /// Score range as printed on reports, e.g. `-1.0 to -0.5`.
    #[must_use]
    pub fn range_label(&self) -> String {
        match (self.lower, self.upper) {
            (None, Some(upper)) => format!("≤ {upper:.1}"),
            (Some(lower), None) => format!("> {lower:.1}"),
            (Some(lower), Some(upper)) => format!("{lower:.1} to {upper:.1}"),
            (None, None) => "any".to_string(),
        }
    }
}

/// Progression statistics for one risk group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressionRiskProfile {
    pub risk_group: RiskGroup,
    /// Median time to conversion, as reported
    pub median_survival: &'static str,
    /// Annual conversion rate in percent
    pub annual_conversion_rate: f64,
}

static DISTRIBUTIONS: [ReferenceDistribution; 4] = [
    ReferenceDistribution {
        diagnosis: DiagnosticGroup::Cn,
        mean: 0.42,
        sd: 0.61,
    },
    ReferenceDistribution {
        diagnosis: DiagnosticGroup::Emci,
        mean: 0.08,
        sd: 0.72,
    },
    ReferenceDistribution {
        diagnosis: DiagnosticGroup::Lmci,
        mean: -0.21,
        sd: 0.84,
    },
    ReferenceDistribution {
        diagnosis: DiagnosticGroup::Ad,
        mean: -0.68,
        sd: 0.93,
    },
];

/// Ascending, contiguous and exhaustive over the real line.
static CATEGORY_BANDS: [CategoryBand; 6] = [
    CategoryBand {
        lower: None,
        upper: Some(-1.0),
        category: RiskCategory::VeryHighVulnerability,
    },
    CategoryBand {
        lower: Some(-1.0),
        upper: Some(-0.5),
        category: RiskCategory::HighVulnerability,
    },
    CategoryBand {
        lower: Some(-0.5),
        upper: Some(0.0),
        category: RiskCategory::ModerateVulnerability,
    },
    CategoryBand {
        lower: Some(0.0),
        upper: Some(0.5),
        category: RiskCategory::ModerateResilience,
    },
    CategoryBand {
        lower: Some(0.5),
        upper: Some(1.0),
        category: RiskCategory::HighResilience,
    },
    CategoryBand {
        lower: Some(1.0),
        upper: None,
        category: RiskCategory::VeryHighResilience,
    },
];

static PROGRESSION: [ProgressionRiskProfile; 3] = [
    ProgressionRiskProfile {
        risk_group: RiskGroup::HighCmd,
        median_survival: "Not reached",
        annual_conversion_rate: 4.2,
    },
    ProgressionRiskProfile {
        risk_group: RiskGroup::MediumCmd,
        median_survival: "6.8 years",
        annual_conversion_rate: 9.7,
    },
    ProgressionRiskProfile {
        risk_group: RiskGroup::LowCmd,
        median_survival: "3.1 years",
        annual_conversion_rate: 21.5,
    },
];

/// Read-only access to the compiled-in reference tables.
pub struct ReferenceData;

impl ReferenceData {
    /// Cohort distribution for a diagnostic group.
    #[must_use]
    pub fn distribution(diagnosis: DiagnosticGroup) -> &'static ReferenceDistribution {
        match diagnosis {
            DiagnosticGroup::Cn => &DISTRIBUTIONS[0],
            DiagnosticGroup::Emci => &DISTRIBUTIONS[1],
            DiagnosticGroup::Lmci => &DISTRIBUTIONS[2],
            DiagnosticGroup::Ad => &DISTRIBUTIONS[3],
        }
    }

    /// Cohort distribution for a free-form diagnosis code.
    ///
    /// Unrecognized codes get the [`DiagnosticGroup::FALLBACK`] entry.
    #[must_use]
    pub fn distribution_for_code(code: &str) -> &'static ReferenceDistribution {
        Self::distribution(DiagnosticGroup::resolve(code))
    }

    #[must_use]
    pub fn distributions() -> &'static [ReferenceDistribution] {
        &DISTRIBUTIONS
    }

    #[must_use]
    pub fn category_bands() -> &'static [CategoryBand] {
        &CATEGORY_BANDS
    }

    /// Progression statistics for a risk group.
    #[must_use]
    pub fn progression(group: RiskGroup) -> &'static ProgressionRiskProfile {
        match group {
            RiskGroup::HighCmd => &PROGRESSION[0],
            RiskGroup::MediumCmd => &PROGRESSION[1],
            RiskGroup::LowCmd => &PROGRESSION[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_distribution_per_group() {
        for group in DiagnosticGroup::ALL {
            let dist = ReferenceData::distribution(group);
            assert_eq!(dist.diagnosis, group);
            assert!(dist.sd > 0.0);
        }
        assert_eq!(ReferenceData::distributions().len(), DiagnosticGroup::ALL.len());
    }

    #[test]
    fn test_fallback_distribution() {
        let fallback = ReferenceData::distribution_for_code("MCI");
        assert_eq!(fallback.diagnosis, DiagnosticGroup::Lmci);
        assert_eq!(ReferenceData::distribution_for_code("AD").diagnosis, DiagnosticGroup::Ad);
    }

    #[test]
    fn test_bands_are_contiguous() {
        let bands = ReferenceData::category_bands();
        assert!(bands.first().unwrap().lower.is_none());
        assert!(bands.last().unwrap().upper.is_none());
        for pair in bands.windows(2) {
            assert_eq!(pair[0].upper, pair[1].lower);
        }
    }

    #[test]
    fn test_band_edges_are_upper_inclusive() {
        let bands = ReferenceData::category_bands();
        assert!(bands[1].contains(-0.5));
        assert!(!bands[2].contains(-0.5));
        assert!(bands[0].contains(f64::NEG_INFINITY));
        assert!(bands[5].contains(f64::INFINITY));
    }

    #[test]
    fn test_range_labels() {
        let bands = ReferenceData::category_bands();
        assert_eq!(bands[0].range_label(), "≤ -1.0");
        assert_eq!(bands[3].range_label(), "0.0 to 0.5");
        assert_eq!(bands[5].range_label(), "> 1.0");
    }

    #[test]
    fn test_progression_keyed_by_group() {
        for group in RiskGroup::ALL {
            assert_eq!(ReferenceData::progression(group).risk_group, group);
        }
        // Resilient patients convert more slowly.
        assert!(
            ReferenceData::progression(RiskGroup::HighCmd).annual_conversion_rate
                < ReferenceData::progression(RiskGroup::LowCmd).annual_conversion_rate
        );
    }
}
