use chrono::{DateTime, TimeZone, Utc};

use crate::analysis::{
    AnalysisConfig, AnalysisResult, EffectCategory, KeywordMatch, Meal, MealAnalyzer,
    NutrientProfile, ProfileContext, Severity, WarningCategory,
};

pub(super) fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 12, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn meal(name: &str, nutrients: NutrientProfile) -> Meal {
    Meal::new(name, nutrients)
}

pub(super) fn conditions(labels: &[&str]) -> ProfileContext {
    ProfileContext {
        medical_conditions: labels.iter().map(|label| label.to_string()).collect(),
        ..ProfileContext::default()
    }
}

pub(super) fn restrictions(labels: &[&str]) -> ProfileContext {
    ProfileContext {
        dietary_restrictions: labels.iter().map(|label| label.to_string()).collect(),
        ..ProfileContext::default()
    }
}

pub(super) fn with_bmi(bmi: f64) -> ProfileContext {
    ProfileContext {
        bmi: Some(bmi),
        ..ProfileContext::default()
    }
}

pub(super) fn run(nutrients: NutrientProfile, context: &ProfileContext) -> AnalysisResult {
    MealAnalyzer::default().analyze_at(&meal("Test Meal", nutrients), context, fixed_time())
}

pub(super) fn run_named(name: &str, context: &ProfileContext, mode: KeywordMatch) -> AnalysisResult {
    MealAnalyzer::new(AnalysisConfig {
        keyword_match: mode,
    })
    .analyze_at(&meal(name, NutrientProfile::default()), context, fixed_time())
}

/// (category, severity, nutrient) triples for compact assertions.
pub(super) fn warning_keys(result: &AnalysisResult) -> Vec<(WarningCategory, Severity, Option<String>)> {
    result
        .warnings
        .iter()
        .map(|warning| {
            (
                warning.category.clone(),
                warning.severity,
                warning.nutrient.clone(),
            )
        })
        .collect()
}

pub(super) fn effect_keys(result: &AnalysisResult) -> Vec<(EffectCategory, String)> {
    result
        .effects
        .iter()
        .map(|effect| (effect.category.clone(), effect.nutrient.clone()))
        .collect()
}

pub(super) fn has_warning(result: &AnalysisResult, nutrient: &str, severity: Severity) -> bool {
    result
        .warnings
        .iter()
        .any(|warning| warning.nutrient.as_deref() == Some(nutrient) && warning.severity == severity)
}

pub(super) fn warnings_for(result: &AnalysisResult, nutrient: &str) -> usize {
    result
        .warnings
        .iter()
        .filter(|warning| warning.nutrient.as_deref() == Some(nutrient))
        .count()
}

pub(super) fn has_effect(result: &AnalysisResult, nutrient: &str) -> bool {
    result.effects.iter().any(|effect| effect.nutrient == nutrient)
}

pub(super) fn condition(label: &str) -> WarningCategory {
    WarningCategory::MedicalCondition(label.to_string())
}

pub(super) fn condition_effect(label: &str) -> EffectCategory {
    EffectCategory::MedicalCondition(label.to_string())
}
