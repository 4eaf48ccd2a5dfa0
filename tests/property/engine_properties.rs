use cmd_engine::domain::{
    classify_category, classify_group, hazard_ratio, percentile, recommendations, CmdResult,
    DiagnosticGroup, PatientAssessment, RiskCategory, RiskGroup,
};
use proptest::prelude::*;

fn diagnostic_group() -> impl Strategy<Value = DiagnosticGroup> {
    prop::sample::select(DiagnosticGroup::ALL.to_vec())
}

proptest! {
    #[test]
    fn hazard_ratio_strictly_decreasing(a in -10.0f64..10.0, b in -10.0f64..10.0) {
        prop_assume!(b - a > 1e-9);
        prop_assert!(hazard_ratio(a) > hazard_ratio(b));
        prop_assert!(hazard_ratio(b) > 0.0);
    }

    #[test]
    fn every_score_has_one_category(cmd in -5.0f64..=5.0) {
        prop_assert_ne!(classify_category(cmd), RiskCategory::Unclassified);
    }

    #[test]
    fn group_agrees_with_thresholds(cmd in -3.0f64..3.0) {
        let expected = if cmd > 0.33 {
            RiskGroup::HighCmd
        } else if cmd < -0.33 {
            RiskGroup::LowCmd
        } else {
            RiskGroup::MediumCmd
        };
        prop_assert_eq!(classify_group(cmd), expected);
    }

    #[test]
    fn percentile_monotone(a in -6.0f64..6.0, b in -6.0f64..6.0, group in diagnostic_group()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(percentile(lo, group) <= percentile(hi, group));
        prop_assert!(percentile(hi, group) <= 100);
    }

    #[test]
    fn recommendation_count(cmd in -5.0f64..5.0) {
        let expected = if cmd <= -0.5 { 4 } else { 3 };
        prop_assert_eq!(recommendations(cmd).len(), expected);
    }

    #[test]
    fn result_is_consistent(
        mmse in 0.0f64..=30.0,
        adas13 in 0.0f64..=85.0,
        fdg_suvr in 0.6f64..1.8,
        csf_tau in 50.0f64..900.0,
        group in diagnostic_group(),
    ) {
        let assessment = PatientAssessment {
            mmse,
            adas13,
            fdg_suvr,
            csf_tau,
            diagnosis: group,
            ..Default::default()
        };
        let result = CmdResult::evaluate(&assessment);

        prop_assert_eq!(result.risk_group, classify_group(result.cmd));
        prop_assert_eq!(result.percentile, percentile(result.cmd, group));
        prop_assert_eq!(result.reference_distribution.diagnosis, group);
        prop_assert!(result.hazard_ratio > 0.0);
    }
}
