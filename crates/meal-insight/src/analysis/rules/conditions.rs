use super::{distinct, Findings, Recorder, RuleInput};
use crate::analysis::domain::{EffectCategory, Severity, WarningCategory};
use tracing::debug;

pub(crate) const HIGH_BLOOD_PRESSURE: &str = "High Blood Pressure";
pub(crate) const DIABETES: &str = "Diabetes";
pub(crate) const HEART_DISEASE: &str = "Heart Disease";
pub(crate) const OSTEOPOROSIS: &str = "Osteoporosis";
pub(crate) const ARTHRITIS: &str = "Arthritis";
pub(crate) const KIDNEY_DISEASE: &str = "Kidney Disease";

pub(crate) fn evaluate(input: &RuleInput<'_>) -> Findings {
    let mut recorder = Recorder::new(input);
    let n = input.nutrients;

    for condition in distinct(&input.context.medical_conditions) {
        let warn = WarningCategory::MedicalCondition(condition.to_string());
        let benefit = EffectCategory::MedicalCondition(condition.to_string());

        match condition {
            HIGH_BLOOD_PRESSURE => {
                if n.sodium > 500.0 {
                    recorder.warning(
                        warn,
                        Severity::Moderate,
                        Some("Sodium"),
                        "This meal is high in sodium (over 500mg), which may affect your blood pressure. Consider reducing portion size or pairing with low-sodium foods.",
                    );
                }
                if n.potassium > 300.0 {
                    recorder.effect(
                        benefit,
                        "Potassium",
                        "This meal contains good amounts of potassium, which can help maintain healthy blood pressure.",
                    );
                }
            }
            DIABETES => {
                if n.sugar > 15.0 {
                    recorder.warning(
                        warn.clone(),
                        Severity::High,
                        Some("Sugar"),
                        "This meal contains over 15g of sugar, which may affect your blood glucose levels. Consider a smaller portion or balancing with protein and healthy fats.",
                    );
                }
                if n.carbohydrates > 45.0 {
                    recorder.warning(
                        warn,
                        Severity::Moderate,
                        Some("Carbohydrates"),
                        "This meal is high in carbohydrates (over 45g), which may impact blood sugar. Consider spreading carb intake throughout the day.",
                    );
                }
                if n.fiber > 5.0 {
                    recorder.effect(
                        benefit,
                        "Fiber",
                        "This meal contains good fiber, which can help slow down digestion and prevent blood sugar spikes.",
                    );
                }
            }
            HEART_DISEASE => {
                if n.fat > 15.0 {
                    recorder.warning(
                        warn.clone(),
                        Severity::Moderate,
                        Some("Fat"),
                        "This meal is high in fat (over 15g), which may affect heart health. Consider reducing portion size or substituting with heart-healthy fats.",
                    );
                }
                if n.cholesterol > 100.0 {
                    recorder.warning(
                        warn,
                        Severity::Moderate,
                        Some("Cholesterol"),
                        "This meal contains substantial cholesterol, which may impact heart health. Consider balancing with plant-based meals throughout the day.",
                    );
                }
                if n.omega3 > 0.5 {
                    recorder.effect(
                        benefit,
                        "Omega-3 Fatty Acids",
                        "This meal contains heart-healthy omega-3 fatty acids, which can help support cardiovascular health.",
                    );
                }
            }
            OSTEOPOROSIS => {
                if n.calcium > 200.0 {
                    recorder.effect(
                        benefit.clone(),
                        "Calcium",
                        "This meal is rich in calcium, which can help maintain bone health.",
                    );
                }
                if n.vitamin_d > 100.0 {
                    recorder.effect(
                        benefit,
                        "Vitamin D",
                        "This meal contains vitamin D, which helps your body absorb calcium for stronger bones.",
                    );
                }
            }
            ARTHRITIS => {
                if n.omega_ratio() > 10.0 {
                    recorder.warning(
                        warn,
                        Severity::Low,
                        Some("Omega-6 to Omega-3 ratio"),
                        "This meal has a high ratio of omega-6 to omega-3 fatty acids, which may contribute to inflammation. Consider adding foods rich in omega-3s.",
                    );
                }
            }
            KIDNEY_DISEASE => {
                if n.potassium > 600.0 {
                    recorder.warning(
                        warn.clone(),
                        Severity::High,
                        Some("Potassium"),
                        "This meal is high in potassium, which may be a concern for kidney health. Consider reducing portion size or substituting with lower-potassium options.",
                    );
                }
                if n.phosphorus > 250.0 {
                    recorder.warning(
                        warn.clone(),
                        Severity::Moderate,
                        Some("Phosphorus"),
                        "This meal contains substantial phosphorus, which may need to be monitored for kidney health.",
                    );
                }
                if n.protein > 25.0 {
                    recorder.warning(
                        warn,
                        Severity::Moderate,
                        Some("Protein"),
                        "This meal is high in protein, which may need to be moderated for kidney health.",
                    );
                }
            }
            other => debug!(condition = other, "no condition rules for label"),
        }
    }

    recorder.finish()
}
