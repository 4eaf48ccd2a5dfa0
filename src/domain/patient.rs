//! Patient assessment input types.
//!
//! Cognitive test scores, structural MRI volumes and CSF/PET biomarkers
//! as collected for one visit.

use serde::{Deserialize, Deserializer, Serialize};

/// Biological sex, used as a covariate in the predicted-cognition model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    /// Model indicator: 1.0 for male, 0.0 otherwise.
    #[must_use]
    pub fn male_indicator(&self) -> f64 {
        match self {
            Self::Male => 1.0,
            Self::Female => 0.0,
        }
    }
}

/// Clinical diagnostic group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DiagnosticGroup {
    /// Cognitively normal
    #[serde(rename = "CN")]
    Cn,
    /// Early mild cognitive impairment
    #[serde(rename = "EMCI")]
    Emci,
    /// Late mild cognitive impairment
    #[serde(rename = "LMCI")]
    Lmci,
    /// Alzheimer's disease dementia
    #[serde(rename = "AD")]
    Ad,
}

impl DiagnosticGroup {
    /// Every diagnostic group, in order of disease stage.
    pub const ALL: [Self; 4] = [Self::Cn, Self::Emci, Self::Lmci, Self::Ad];

    /// Group used whenever a diagnosis code is not recognized.
    pub const FALLBACK: Self = Self::Lmci;

    /// Short code as used on assessment forms.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Cn => "CN",
            Self::Emci => "EMCI",
            Self::Lmci => "LMCI",
            Self::Ad => "AD",
        }
    }

    /// Resolve a diagnosis code, substituting [`Self::FALLBACK`] for unknown codes.
    #[must_use]
    pub fn resolve(code: &str) -> Self {
        code.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Unrecognized diagnosis code {:?}; using {} reference distribution",
                code,
                Self::FALLBACK
            );
            Self::FALLBACK
        })
    }
}

impl std::str::FromStr for DiagnosticGroup {
    type Err = crate::CmdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::CmdError::UnknownDiagnosis(s.to_string()))
    }
}

impl std::fmt::Display for DiagnosticGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// Forms may carry legacy codes such as "MCI"; those resolve to the fallback
// group instead of rejecting the whole assessment.
impl<'de> Deserialize<'de> for DiagnosticGroup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(Self::resolve(&code))
    }
}

/// One patient's measurements for a single CMD computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientAssessment {
    /// Opaque identifier, carried to the report but never scored
    #[serde(default)]
    pub patient_identifier: Option<String>,

    /// Age in years
    pub age: f64,

    pub biological_sex: BiologicalSex,

    pub diagnosis: DiagnosticGroup,

    /// Mini-Mental State Exam (0-30, higher is better)
    pub mmse: f64,

    /// ADAS-Cog 13-item total (0-85, higher is worse)
    pub adas13: f64,

    /// Hippocampal volume in mm³
    pub hippocampal_volume: f64,

    /// Intracranial volume in mm³
    pub intracranial_volume: f64,

    /// FDG-PET standardized uptake value ratio
    pub fdg_suvr: f64,

    /// CSF amyloid-β 1-42 in pg/mL
    pub csf_abeta42: f64,

    /// CSF total tau in pg/mL
    pub csf_tau: f64,

    /// CSF phosphorylated tau 181 in pg/mL (display only)
    pub csf_ptau181: f64,

    /// APOE ε4 allele count, 0-2 (display only)
    pub apoe4_allele_count: u8,
}

impl Default for PatientAssessment {
    /// The reference patient pre-filled on a blank assessment form.
    fn default() -> Self {
        Self {
            patient_identifier: None,
            age: 65.0,
            biological_sex: BiologicalSex::Male,
            diagnosis: DiagnosticGroup::FALLBACK,
            mmse: 26.0,
            adas13: 18.0,
            hippocampal_volume: 3500.0,
            intracranial_volume: 1_500_000.0,
            fdg_suvr: 1.2,
            csf_abeta42: 800.0,
            csf_tau: 250.0,
            csf_ptau181: 25.0,
            apoe4_allele_count: 0,
        }
    }
}

impl PatientAssessment {
    /// Check every field against its declared clinical range.
    ///
    /// Scoring never calls this; it backs the strict pre-check decorator.
    ///
    /// # Errors
    /// Returns every violation found, one message per field.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        check_range(&mut errors, "Age", self.age, 0.0, 120.0);
        check_range(&mut errors, "MMSE", self.mmse, 0.0, 30.0);
        check_range(&mut errors, "ADAS-13", self.adas13, 0.0, 85.0);
        check_positive(&mut errors, "Hippocampal volume", self.hippocampal_volume);
        check_positive(&mut errors, "Intracranial volume", self.intracranial_volume);
        check_finite(&mut errors, "FDG SUVR", self.fdg_suvr);
        check_finite(&mut errors, "CSF Aβ42", self.csf_abeta42);
        check_finite(&mut errors, "CSF tau", self.csf_tau);
        check_finite(&mut errors, "CSF p-tau181", self.csf_ptau181);

        if self.apoe4_allele_count > 2 {
            errors.push(format!(
                "APOE4 allele count {} must be 0, 1 or 2",
                self.apoe4_allele_count
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_range(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} {value} out of range [{min}, {max}]"));
    }
}

fn check_positive(errors: &mut Vec<String>, name: &str, value: f64) {
    if !(value.is_finite() && value > 0.0) {
        errors.push(format!("{name} {value} must be a positive finite number"));
    }
}

fn check_finite(errors: &mut Vec<String>, name: &str, value: f64) {
    if !value.is_finite() {
        errors.push(format!("{name} {value} must be finite"));
    }
}
