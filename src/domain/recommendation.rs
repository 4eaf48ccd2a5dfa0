//! Advisory text for a CMD score.

const RESILIENCE: [&str; 3] = [
    "Cognitive performance exceeds what biomarker burden predicts; continue current cognitive, social and physical activities that support reserve.",
    "Routine annual cognitive screening is sufficient unless new symptoms emerge.",
    "Consider eligibility for prevention studies enrolling biomarker-positive but cognitively resilient participants.",
];

const MODERATE_RESILIENCE: [&str; 3] = [
    "Cognition is modestly better than biomarker burden predicts; maintain cardiovascular risk control and regular exercise.",
    "Repeat cognitive assessment in 12 months to confirm a stable trajectory.",
    "Encourage cognitively stimulating activities and social engagement to preserve reserve.",
];

const ALIGNMENT: [&str; 3] = [
    "Cognition is broadly consistent with biomarker burden; reassess cognition and biomarkers in 6 to 12 months.",
    "Optimize modifiable risk factors: blood pressure, glycemic control, sleep and hearing.",
    "Discuss structured cognitive training and physical activity programs.",
];

const VULNERABILITY: [&str; 4] = [
    "Cognition is worse than biomarker burden predicts; refer for comprehensive neuropsychological evaluation.",
    "Screen for contributing conditions such as depression, medication effects, vascular disease and sleep disorders.",
    "Schedule close follow-up with repeat cognitive testing in 6 months.",
    "Provide caregiver support resources and begin advance care planning discussions.",
];

/// Ordered recommendations for a CMD score.
///
/// Bands: `cmd > 0.5`, `(0, 0.5]`, `(-0.5, 0]`, `cmd <= -0.5`. Only the
/// vulnerability band carries the fourth, caregiver-support item.
#[must_use]
pub fn recommendations(cmd: f64) -> &'static [&'static str] {
    if cmd > 0.5 {
        &RESILIENCE
    } else if cmd > 0.0 {
        &MODERATE_RESILIENCE
    } else if cmd <= -0.5 {
        &VULNERABILITY
    } else {
        // Also reached by NaN.
        &ALIGNMENT
    }
}
