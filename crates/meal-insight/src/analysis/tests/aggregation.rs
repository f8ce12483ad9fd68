use chrono::Utc;

use super::common::*;
use crate::analysis::{
    AnalysisResult, EffectCategory, HealthWarning, OverallAssessment, PositiveEffect, Severity,
    StatusColor, WarningCategory,
};

fn warning(severity: Severity) -> HealthWarning {
    HealthWarning {
        category: WarningCategory::GeneralNutrition,
        severity,
        nutrient: Some("Calories".to_string()),
        message: "test".to_string(),
        timestamp: fixed_time(),
    }
}

fn effect() -> PositiveEffect {
    PositiveEffect {
        category: EffectCategory::GeneralNutrition,
        nutrient: "Fiber".to_string(),
        message: "test".to_string(),
        timestamp: fixed_time(),
    }
}

fn result(warnings: Vec<HealthWarning>, effects: Vec<PositiveEffect>) -> AnalysisResult {
    AnalysisResult {
        meal_name: "Aggregate".to_string(),
        warnings,
        effects,
        timestamp: Utc::now(),
    }
}

#[test]
fn overall_message_covers_all_four_cases() {
    let cases = [
        (
            result(vec![warning(Severity::Low)], Vec::new()),
            OverallAssessment::RequiresAttention,
            "This meal requires some attention based on your health profile.",
        ),
        (
            result(vec![warning(Severity::Low)], vec![effect()]),
            OverallAssessment::MixedBenefitsAndConcerns,
            "This meal has some benefits, but also some concerns for your health profile.",
        ),
        (
            result(Vec::new(), vec![effect()]),
            OverallAssessment::GreatChoice,
            "This meal is a great choice for your health profile!",
        ),
        (
            result(Vec::new(), Vec::new()),
            OverallAssessment::Neutral,
            "This meal appears to be neutral for your health profile.",
        ),
    ];

    for (result, assessment, message) in cases {
        assert_eq!(result.assessment(), assessment);
        assert_eq!(result.overall_message(), message);
    }
}

#[test]
fn color_tracks_the_maximum_severity() {
    let mixed = result(
        vec![
            warning(Severity::Low),
            warning(Severity::High),
            warning(Severity::Moderate),
        ],
        vec![effect()],
    );
    assert_eq!(mixed.highest_severity(), Some(Severity::High));
    assert_eq!(mixed.overall_color(), StatusColor::Red);

    let moderate = result(vec![warning(Severity::Low), warning(Severity::Moderate)], Vec::new());
    assert_eq!(moderate.overall_color(), StatusColor::Orange);

    let low = result(vec![warning(Severity::Low)], vec![effect()]);
    assert_eq!(low.overall_color(), StatusColor::Yellow);
}

#[test]
fn color_without_warnings_depends_on_effects() {
    assert_eq!(result(Vec::new(), vec![effect()]).overall_color(), StatusColor::Green);
    assert_eq!(result(Vec::new(), Vec::new()).overall_color(), StatusColor::Blue);
    assert_eq!(result(Vec::new(), Vec::new()).highest_severity(), None);
}

#[test]
fn report_carries_derived_fields_and_counts() {
    let report = result(
        vec![warning(Severity::Moderate), warning(Severity::Moderate)],
        vec![effect()],
    )
    .report();

    assert!(report.has_concerns);
    assert!(report.has_positive_effects);
    assert_eq!(report.overall_color, StatusColor::Orange);
    assert_eq!(report.overall_color_label, "orange");
    assert_eq!(report.highest_severity, Some(Severity::Moderate));
    let counts: Vec<_> = report
        .severity_counts
        .iter()
        .map(|entry| (entry.severity_label, entry.count))
        .collect();
    assert_eq!(counts, vec![("low", 0), ("moderate", 2), ("high", 0)]);
    assert_eq!(report.warnings[0].severity_label, "moderate");

    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["overall_color"], "orange");
    assert_eq!(json["assessment"], "mixed_benefits_and_concerns");
}
