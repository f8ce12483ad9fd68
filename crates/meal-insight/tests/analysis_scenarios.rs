use meal_insight::analysis::{
    estimated_glycemic_load, AnalysisConfig, KeywordMatch, OverallAssessment, Severity,
    StatusColor, WarningCategory,
};
use meal_insight::{analyze, Meal, MealAnalyzer, NutrientProfile, ProfileContext};

fn context(conditions: &[&str], restrictions: &[&str]) -> ProfileContext {
    ProfileContext {
        medical_conditions: conditions.iter().map(|label| label.to_string()).collect(),
        dietary_restrictions: restrictions.iter().map(|label| label.to_string()).collect(),
        ..ProfileContext::default()
    }
}

fn severities_for(warnings: &[meal_insight::analysis::HealthWarning], nutrient: &str) -> Vec<Severity> {
    warnings
        .iter()
        .filter(|warning| warning.nutrient.as_deref() == Some(nutrient))
        .map(|warning| warning.severity)
        .collect()
}

#[test]
fn sodium_heavy_meal_for_hypertension() {
    let meal = Meal::new(
        "Ramen",
        NutrientProfile {
            sodium: 600.0,
            potassium: 100.0,
            ..NutrientProfile::default()
        },
    );

    let result = analyze(&meal, &context(&["High Blood Pressure"], &[]));

    assert_eq!(result.warnings.len(), 1);
    let warning = &result.warnings[0];
    assert_eq!(warning.severity, Severity::Moderate);
    assert_eq!(warning.nutrient.as_deref(), Some("Sodium"));
    assert_eq!(
        warning.category,
        WarningCategory::MedicalCondition("High Blood Pressure".to_string())
    );
    assert!(result.effects.is_empty());
    assert_eq!(result.overall_color(), StatusColor::Orange);
}

#[test]
fn sugary_meal_for_diabetes() {
    let nutrients = NutrientProfile {
        sugar: 20.0,
        carbohydrates: 50.0,
        fiber: 2.0,
        ..NutrientProfile::default()
    };
    assert!((estimated_glycemic_load(&nutrients) - 48.6).abs() < 1e-9);

    let result = analyze(&Meal::new("Pancakes", nutrients), &context(&["Diabetes"], &[]));

    assert_eq!(severities_for(&result.warnings, "Sugar"), vec![Severity::High]);
    assert_eq!(
        severities_for(&result.warnings, "Carbohydrates"),
        vec![Severity::Moderate]
    );
    assert_eq!(
        severities_for(&result.warnings, "Glycemic Load"),
        vec![Severity::Moderate]
    );
    assert!(result.effects.iter().all(|effect| effect.nutrient != "Fiber"));
    assert_eq!(result.overall_color(), StatusColor::Red);
    assert_eq!(result.assessment(), OverallAssessment::RequiresAttention);
}

#[test]
fn calorie_dense_meal_with_obese_bmi() {
    let meal = Meal::new(
        "Lasagna",
        NutrientProfile {
            calories: 800.0,
            fat: 25.0,
            fiber: 6.0,
            ..NutrientProfile::default()
        },
    );
    let profile = ProfileContext {
        bmi: Some(31.0),
        ..ProfileContext::default()
    };

    let result = analyze(&meal, &profile);

    assert!(severities_for(&result.warnings, "Calories").contains(&Severity::High));
    assert!(severities_for(&result.warnings, "Fat").contains(&Severity::Moderate));
    assert!(result.effects.iter().any(|effect| effect.nutrient == "Fiber"));
    assert_eq!(result.highest_severity(), Some(Severity::High));
    assert_eq!(result.assessment(), OverallAssessment::MixedBenefitsAndConcerns);
}

#[test]
fn chicken_conflicts_with_vegetarian() {
    let meal = Meal::new("Grilled Chicken Salad", NutrientProfile::default());
    let profile = context(&[], &["Vegetarian"]);

    for mode in [KeywordMatch::Substring, KeywordMatch::WholeWord] {
        let analyzer = MealAnalyzer::new(AnalysisConfig { keyword_match: mode });
        let result = analyzer.analyze(&meal, &profile);

        assert_eq!(result.warnings.len(), 1, "mode {mode:?}");
        assert_eq!(result.warnings[0].severity, Severity::High);
        assert_eq!(
            result.warnings[0].category,
            WarningCategory::DietaryRestriction("Vegetarian".to_string())
        );
    }
}

#[test]
fn empty_inputs_are_neutral() {
    let result = analyze(
        &Meal::new("Nothing", NutrientProfile::default()),
        &ProfileContext::default(),
    );

    assert!(result.warnings.is_empty());
    assert!(result.effects.is_empty());
    assert_eq!(
        result.overall_message(),
        "This meal appears to be neutral for your health profile."
    );
    assert_eq!(result.overall_color(), StatusColor::Blue);
}

#[test]
fn report_serializes_for_callers() {
    let meal = Meal::new(
        "Salmon Bowl",
        NutrientProfile {
            protein: 30.0,
            omega3: 1.2,
            ..NutrientProfile::default()
        },
    );

    let report = analyze(&meal, &context(&["Heart Disease"], &[])).report();
    let value = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(value["meal_name"], "Salmon Bowl");
    assert_eq!(value["has_concerns"], false);
    assert_eq!(value["overall_color"], "green");
    assert_eq!(
        value["overall_message"],
        "This meal is a great choice for your health profile!"
    );
}
