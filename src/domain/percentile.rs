//! Percentile rank of a CMD score within a diagnostic group.
//!
//! Uses the Zelen & Severo (1964) polynomial approximation of the standard
//! normal tail, absolute error below 7.5e-8.

use super::patient::DiagnosticGroup;
use super::reference::{ReferenceData, ReferenceDistribution};

const P: f64 = 0.231_641_9;
const DENSITY_SCALE: f64 = 0.398_942_3;
const B1: f64 = 0.319_381_53;
const B2: f64 = -0.356_563_782;
const B3: f64 = 1.781_477_937;
const B4: f64 = -1.821_255_978;
const B5: f64 = 1.330_274_429;

/// Upper-tail probability `Q(|z|)` of the standard normal distribution.
#[must_use]
pub fn normal_tail(z: f64) -> f64 {
    let t = 1.0 / (1.0 + P * z.abs());
    let d = DENSITY_SCALE * (-z * z / 2.0).exp();
    d * t * (B1 + t * (B2 + t * (B3 + t * (B4 + t * B5))))
}

/// Standard normal CDF `Φ(z)`.
#[must_use]
pub fn normal_cdf(z: f64) -> f64 {
    let tail = normal_tail(z);
    if z > 0.0 {
        1.0 - tail
    } else {
        tail
    }
}

/// Convert a probability to a whole percentile.
///
/// Rounds half away from zero (`f64::round`), so 12.5 becomes 13.
/// The result is clamped to 0..=100; `NaN` maps to 0.
#[must_use]
pub fn to_percentile(probability: f64) -> u8 {
    // `as` saturates and sends NaN to 0.
    (100.0 * probability).round().clamp(0.0, 100.0) as u8
}

/// Percentile of `cmd` within an explicit reference distribution.
#[must_use]
pub fn percentile_in(cmd: f64, distribution: &ReferenceDistribution) -> u8 {
    let z = (cmd - distribution.mean) / distribution.sd;
    to_percentile(normal_cdf(z))
}

/// Percentile of `cmd` among patients of the same diagnostic group.
#[must_use]
pub fn percentile(cmd: f64, diagnosis: DiagnosticGroup) -> u8 {
    percentile_in(cmd, ReferenceData::distribution(diagnosis))
}

/// Percentile for a free-form diagnosis code; unknown codes use the fallback group.
#[must_use]
pub fn percentile_for_code(cmd: f64, code: &str) -> u8 {
    percentile_in(cmd, ReferenceData::distribution_for_code(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_mean_is_median() {
        for group in DiagnosticGroup::ALL {
            let mean = ReferenceData::distribution(group).mean;
            assert_eq!(percentile(mean, group), 50, "group={group}");
        }
    }

    #[test]
    fn test_cdf_known_values() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-7);
        assert!((normal_cdf(1.0) - 0.841_344_746).abs() < 1e-7);
        assert!((normal_cdf(-1.0) - 0.158_655_254).abs() < 1e-7);
        assert!((normal_cdf(1.96) - 0.975_002_105).abs() < 1e-7);
    }

    #[test]
    fn test_tail_symmetric() {
        assert_eq!(normal_tail(1.3), normal_tail(-1.3));
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(to_percentile(0.125), 13);
        assert_eq!(to_percentile(0.875), 88);
        assert_eq!(to_percentile(0.005), 1);
        assert_eq!(to_percentile(0.124), 12);
    }

    #[test]
    fn test_percentile_clamped() {
        assert_eq!(to_percentile(1.2), 100);
        assert_eq!(to_percentile(-0.1), 0);
        assert_eq!(to_percentile(f64::NAN), 0);
        assert_eq!(percentile(f64::NAN, DiagnosticGroup::Cn), 0);
    }

    #[test]
    fn test_reference_patient_percentiles() {
        let cmd = 0.8223216005250079;
        assert_eq!(percentile(cmd, DiagnosticGroup::Cn), 75);
        assert_eq!(percentile(cmd, DiagnosticGroup::Emci), 85);
        assert_eq!(percentile(cmd, DiagnosticGroup::Lmci), 89);
        assert_eq!(percentile(cmd, DiagnosticGroup::Ad), 95);
    }

    #[test]
    fn test_unknown_code_uses_fallback() {
        let cmd = 0.8223216005250079;
        assert_eq!(percentile_for_code(cmd, "MCI"), percentile(cmd, DiagnosticGroup::Lmci));
    }

    #[test]
    fn test_monotone_in_cmd() {
        for group in DiagnosticGroup::ALL {
            let mut previous = percentile(-6.0, group);
            for i in 1..=12_000 {
                let cmd = -6.0 + f64::from(i) * 0.001;
                let current = percentile(cmd, group);
                assert!(current >= previous, "group={group} cmd={cmd}");
                previous = current;
            }
        }
    }
}
