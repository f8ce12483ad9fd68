use super::conditions::{ARTHRITIS, HEART_DISEASE};
use super::{Findings, Recorder, RuleInput};
use crate::analysis::domain::{EffectCategory, Severity, WarningCategory};
use crate::analysis::nutrients::NutrientProfile;

pub(crate) const INFLAMMATORY_BOWEL_DISEASE: &str = "Inflammatory Bowel Disease";
const INFLAMMATORY_CONDITIONS: [&str; 3] = [ARTHRITIS, HEART_DISEASE, INFLAMMATORY_BOWEL_DISEASE];
const FALLBACK_LABEL: &str = "Inflammatory Condition";

pub fn has_anti_inflammatory_nutrients(n: &NutrientProfile) -> bool {
    n.omega3 > 0.5 || n.vitamin_e > 3.0 || n.vitamin_c > 30.0
}

pub fn has_pro_inflammatory_profile(n: &NutrientProfile) -> bool {
    n.omega_ratio() > 10.0 || n.sugar > 20.0
}

pub(crate) fn evaluate(input: &RuleInput<'_>) -> Findings {
    let mut recorder = Recorder::new(input);
    let conditions = &input.context.medical_conditions;

    if !INFLAMMATORY_CONDITIONS
        .iter()
        .any(|label| input.context.has_condition(label))
    {
        return recorder.finish();
    }

    // First inflammatory label in the user's own ordering.
    let label = conditions
        .iter()
        .map(String::as_str)
        .find(|condition| INFLAMMATORY_CONDITIONS.contains(condition))
        .unwrap_or(FALLBACK_LABEL);

    if has_pro_inflammatory_profile(input.nutrients) {
        recorder.warning(
            WarningCategory::MedicalCondition(label.to_string()),
            Severity::Moderate,
            Some("Inflammatory Profile"),
            "This meal contains ingredients that may promote inflammation. Consider balancing with anti-inflammatory foods like fatty fish, olive oil, or colorful vegetables.",
        );
    }

    if has_anti_inflammatory_nutrients(input.nutrients) {
        recorder.effect(
            EffectCategory::MedicalCondition(label.to_string()),
            "Anti-inflammatory Nutrients",
            "This meal contains nutrients that may help reduce inflammation.",
        );
    }

    recorder.finish()
}
