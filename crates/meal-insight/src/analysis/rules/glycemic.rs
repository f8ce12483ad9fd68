use super::conditions::DIABETES;
use super::{Findings, Recorder, RuleInput};
use crate::analysis::domain::{EffectCategory, Severity, WarningCategory};
use crate::analysis::nutrients::NutrientProfile;

/// Carbohydrates net of 70% of fiber; a stand-in for a per-food glycemic index.
pub fn estimated_glycemic_load(nutrients: &NutrientProfile) -> f64 {
    nutrients.carbohydrates - nutrients.fiber * 0.7
}

pub(crate) fn evaluate(input: &RuleInput<'_>) -> Findings {
    let mut recorder = Recorder::new(input);
    if !input.context.has_condition(DIABETES) {
        return recorder.finish();
    }

    let load = estimated_glycemic_load(input.nutrients);
    if load > 20.0 {
        recorder.warning(
            WarningCategory::MedicalCondition(DIABETES.to_string()),
            Severity::Moderate,
            Some("Glycemic Load"),
            "This meal may have a high glycemic load, which could cause blood sugar spikes. Consider pairing with protein or healthy fats to moderate the glycemic response.",
        );
    } else if load < 10.0 && input.nutrients.carbohydrates > 5.0 {
        recorder.effect(
            EffectCategory::MedicalCondition(DIABETES.to_string()),
            "Glycemic Load",
            "This meal has a lower estimated glycemic load, which may help maintain steadier blood sugar levels.",
        );
    }

    recorder.finish()
}
