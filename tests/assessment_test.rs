//! End-to-end assessment through the public API.

use std::sync::Arc;

use cmd_engine::adapters::json::read_assessment;
use cmd_engine::adapters::{JsonReportWriter, ReferenceEngine, ValidatingEngine};
use cmd_engine::application::AssessmentService;
use cmd_engine::domain::{ReferenceData, RiskCategory, RiskGroup};
use cmd_engine::{CmdError, DiagnosticGroup};

const REFERENCE_PATIENT: &str = r#"{
    "patient_identifier": "demo-001",
    "age": 65.0,
    "biological_sex": "Male",
    "diagnosis": "MCI",
    "mmse": 26.0,
    "adas13": 18.0,
    "hippocampal_volume": 3500.0,
    "intracranial_volume": 1500000.0,
    "fdg_suvr": 1.2,
    "csf_abeta42": 800.0,
    "csf_tau": 250.0,
    "csf_ptau181": 25.0,
    "apoe4_allele_count": 1
}"#;

#[test]
fn reference_patient_end_to_end() {
    let assessment = read_assessment(REFERENCE_PATIENT.as_bytes()).expect("Should parse");
    assert_eq!(assessment.diagnosis, DiagnosticGroup::Lmci);

    let sink = Arc::new(JsonReportWriter::new(Vec::new()));
    let service = AssessmentService::new(Arc::new(ReferenceEngine::new()), Arc::clone(&sink));

    let report = service.run_assessment(&assessment).expect("Should assess");
    let result = report.result;

    assert!((result.cmd - 0.8223216005250079).abs() < 1e-12);
    assert!((result.mds - -0.017367305030277745).abs() < 1e-12);
    assert!((result.hippocampal_normalization - 0.0023333333333333335).abs() < 1e-15);
    assert!((result.cognitive_composite - 0.06116584564860436).abs() < 1e-12);
    assert_eq!(result.risk_group, RiskGroup::HighCmd);
    assert_eq!(result.percentile, 89);
    assert_eq!(report.risk_category, RiskCategory::HighResilience);
    assert_eq!(report.recommendations.len(), 3);
    assert_eq!(
        report.progression.median_survival,
        ReferenceData::progression(RiskGroup::HighCmd).median_survival
    );

    drop(service);
    let sink = Arc::try_unwrap(sink).ok().expect("Service dropped its handle");
    let bytes = sink.into_inner().expect("Should recover writer");
    let json: serde_json::Value = serde_json::from_slice(&bytes).expect("Valid JSON");
    assert_eq!(json["patient_identifier"], "demo-001");
    assert_eq!(json["apoe4_allele_count"], 1);
    assert_eq!(json["result"]["percentile"], 89);
}

#[test]
fn strict_engine_rejects_implausible_input() {
    let mut assessment = read_assessment(REFERENCE_PATIENT.as_bytes()).expect("Should parse");
    assessment.mmse = 45.0;

    let service = AssessmentService::new(
        Arc::new(ValidatingEngine::new(ReferenceEngine::new())),
        Arc::new(JsonReportWriter::new(std::io::sink())),
    );

    let err = service.run_assessment(&assessment).unwrap_err();
    assert!(matches!(err, CmdError::Validation(_)));
    assert!(err.to_string().contains("MMSE"));
}
