use super::{Findings, Recorder, RuleInput};
use crate::analysis::domain::{EffectCategory, Severity, WarningCategory};
use crate::analysis::nutrients::NutrientProfile;

/// A quarter-ish of a 1.0-1.2 g/kg daily protein target.
pub fn recommended_protein_per_meal(weight_kg: f64) -> f64 {
    weight_kg * 0.3
}

/// Rough water proxy from macronutrients; the catalog carries no water field.
pub fn estimated_water_content(n: &NutrientProfile) -> f64 {
    n.carbohydrates * 0.3 + n.protein * 0.4
}

pub(crate) fn evaluate(input: &RuleInput<'_>) -> Findings {
    let mut recorder = Recorder::new(input);
    let n = input.nutrients;

    if let Some(bmi) = input.context.bmi {
        weight_band(&mut recorder, n, bmi);
    }

    if n.protein < recommended_protein_per_meal(input.context.weight_kg) * 0.5
        && n.calories > 200.0
    {
        recorder.warning(
            WarningCategory::GeneralNutrition,
            Severity::Low,
            Some("Protein"),
            "This meal may be low in protein for your needs. Seniors benefit from higher protein intake to maintain muscle mass and strength.",
        );
    }

    if n.vitamin_b12 > 0.8 {
        recorder.effect(
            EffectCategory::GeneralNutrition,
            "Vitamin B12",
            "This meal provides vitamin B12, which becomes more difficult to absorb as we age and is essential for nerve function and red blood cell formation.",
        );
    }
    if n.vitamin_d > 100.0 {
        recorder.effect(
            EffectCategory::GeneralNutrition,
            "Vitamin D",
            "This meal contains good amounts of vitamin D, which is important for bone health and immune function, especially for seniors.",
        );
    }
    if n.calcium > 200.0 {
        recorder.effect(
            EffectCategory::GeneralNutrition,
            "Calcium",
            "This meal provides calcium, which helps maintain bone density and is especially important as we age.",
        );
    }

    if estimated_water_content(n) < 10.0 && n.calories > 200.0 {
        recorder.warning(
            WarningCategory::GeneralNutrition,
            Severity::Low,
            Some("Hydration"),
            "This meal appears to be relatively dry. Remember to stay hydrated by drinking water with your meals, as dehydration risk increases with age.",
        );
    }

    recorder.finish()
}

fn weight_band(recorder: &mut Recorder, n: &NutrientProfile, bmi: f64) {
    if bmi >= 30.0 {
        if n.calories > 600.0 {
            recorder.warning(
                WarningCategory::GeneralNutrition,
                Severity::High,
                Some("Calories"),
                "This meal is high in calories. Consider lower-calorie alternatives to support healthy weight management.",
            );
        }
        if n.fat > 20.0 {
            recorder.warning(
                WarningCategory::GeneralNutrition,
                Severity::Moderate,
                Some("Fat"),
                "This meal is high in fat. Consider leaner protein sources and more vegetables.",
            );
        }
        if n.fiber > 5.0 {
            recorder.effect(
                EffectCategory::GeneralNutrition,
                "Fiber",
                "Good fiber content helps you feel full longer and supports healthy weight management.",
            );
        }
    } else if bmi >= 25.0 {
        if n.calories > 700.0 {
            recorder.warning(
                WarningCategory::GeneralNutrition,
                Severity::Moderate,
                Some("Calories"),
                "Consider portion control while ensuring you get essential nutrients.",
            );
        }
        if n.fiber > 5.0 {
            recorder.effect(
                EffectCategory::GeneralNutrition,
                "Fiber",
                "Good fiber content supports healthy digestion and weight management.",
            );
        }
    } else if bmi < 18.5 {
        if n.calories < 400.0 {
            recorder.warning(
                WarningCategory::GeneralNutrition,
                Severity::Moderate,
                Some("Calories"),
                "This meal is relatively low in calories. Consider adding healthy fats or protein to increase caloric intake.",
            );
        }
        if n.protein < 15.0 {
            recorder.warning(
                WarningCategory::GeneralNutrition,
                Severity::Moderate,
                Some("Protein"),
                "Consider adding more protein to support healthy weight gain and maintain muscle mass.",
            );
        }
    }
}
