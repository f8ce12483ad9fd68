use super::{Findings, Recorder, RuleInput};
use crate::analysis::domain::{EffectCategory, Severity, WarningCategory};
use crate::analysis::nutrients::NutrientProfile;

pub fn has_notable_vitamins(n: &NutrientProfile) -> bool {
    n.vitamin_a > 1000.0
        || n.vitamin_c > 20.0
        || n.vitamin_d > 100.0
        || n.vitamin_e > 3.0
        || n.vitamin_b12 > 0.6
}

pub fn has_notable_minerals(n: &NutrientProfile) -> bool {
    n.calcium > 200.0 || n.iron > 3.0 || n.magnesium > 75.0 || n.zinc > 2.0
}

pub(crate) fn evaluate(input: &RuleInput<'_>) -> Findings {
    let mut recorder = Recorder::new(input);
    let n = input.nutrients;

    if n.calories > 700.0 {
        recorder.warning(
            WarningCategory::GeneralNutrition,
            Severity::Moderate,
            Some("Calories"),
            "This meal is high in calories (over 700). Consider adjusting portion size or balancing with lighter meals throughout the day.",
        );
    }

    if n.protein > 40.0 {
        recorder.warning(
            WarningCategory::GeneralNutrition,
            Severity::Low,
            Some("Protein"),
            "This meal is very high in protein. While protein is important, it's best to distribute intake throughout the day.",
        );
    } else if n.protein > 15.0 {
        recorder.effect(
            EffectCategory::GeneralNutrition,
            "Protein",
            "This meal contains a good amount of protein, which helps maintain muscle mass and supports overall health.",
        );
    }

    if n.fiber > 5.0 {
        recorder.effect(
            EffectCategory::GeneralNutrition,
            "Fiber",
            "This meal is a good source of dietary fiber, which supports digestive health.",
        );
    }

    if has_notable_vitamins(n) {
        recorder.effect(
            EffectCategory::GeneralNutrition,
            "Vitamins",
            "This meal contains important vitamins that support overall health and immune function.",
        );
    }

    if has_notable_minerals(n) {
        recorder.effect(
            EffectCategory::GeneralNutrition,
            "Minerals",
            "This meal contains essential minerals that support various body functions and overall health.",
        );
    }

    if n.fat > 30.0 {
        recorder.warning(
            WarningCategory::GeneralNutrition,
            Severity::Moderate,
            Some("Fat"),
            "This meal is high in fat. Consider balancing with lower-fat options in your other meals today.",
        );
    }

    recorder.finish()
}
