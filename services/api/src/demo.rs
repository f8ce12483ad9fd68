use clap::Args;
use meal_insight::analysis::{AnalysisReport, AnalyzeMealRequest};
use meal_insight::config::AppConfig;
use meal_insight::error::AppError;
use meal_insight::{Meal, MealAnalyzer, NutrientProfile, ProfileContext};
use std::path::PathBuf;

use crate::infra::analyzer_from_config;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// JSON file holding `{ "meal": ..., "profile": ... }`
    #[arg(long)]
    pub(crate) input: PathBuf,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let analyzer = analyzer_from_config(&config);
    let raw = std::fs::read_to_string(&args.input)?;
    let report = analyze_request(&analyzer, &raw)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub(crate) fn analyze_request(analyzer: &MealAnalyzer, raw: &str) -> Result<AnalysisReport, AppError> {
    let request: AnalyzeMealRequest = serde_json::from_str(raw)?;
    request.meal.nutrients.validate()?;
    Ok(analyzer.analyze(&request.meal, &request.profile).report())
}

pub(crate) struct DemoScenario {
    pub(crate) title: &'static str,
    pub(crate) meal: Meal,
    pub(crate) profile: ProfileContext,
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(crate) fn demo_scenarios() -> Vec<DemoScenario> {
    vec![
        DemoScenario {
            title: "Salty ramen with high blood pressure",
            meal: Meal::new(
                "Tonkotsu Ramen",
                NutrientProfile {
                    sodium: 600.0,
                    potassium: 100.0,
                    ..NutrientProfile::default()
                },
            ),
            profile: ProfileContext {
                medical_conditions: labels(&["High Blood Pressure"]),
                ..ProfileContext::default()
            },
        },
        DemoScenario {
            title: "Syrupy pancakes with diabetes",
            meal: Meal::new(
                "Pancakes",
                NutrientProfile {
                    sugar: 20.0,
                    carbohydrates: 50.0,
                    fiber: 2.0,
                    ..NutrientProfile::default()
                },
            ),
            profile: ProfileContext {
                medical_conditions: labels(&["Diabetes"]),
                ..ProfileContext::default()
            },
        },
        DemoScenario {
            title: "Lasagna at BMI 31",
            meal: Meal::new(
                "Lasagna",
                NutrientProfile {
                    calories: 800.0,
                    fat: 25.0,
                    fiber: 6.0,
                    ..NutrientProfile::default()
                },
            ),
            profile: ProfileContext {
                bmi: Some(31.0),
                ..ProfileContext::default()
            },
        },
        DemoScenario {
            title: "Chicken salad for a vegetarian",
            meal: Meal::new("Grilled Chicken Salad", NutrientProfile::default()),
            profile: ProfileContext {
                dietary_restrictions: labels(&["Vegetarian"]),
                ..ProfileContext::default()
            },
        },
        DemoScenario {
            title: "Protein shake, no conditions",
            meal: Meal::new(
                "Protein Shake",
                NutrientProfile {
                    protein: 45.0,
                    ..NutrientProfile::default()
                },
            ),
            profile: ProfileContext::default(),
        },
        DemoScenario {
            title: "Salmon bowl with heart disease",
            meal: Meal::new(
                "Salmon Bowl",
                NutrientProfile {
                    protein: 30.0,
                    omega3: 1.2,
                    ..NutrientProfile::default()
                },
            ),
            profile: ProfileContext {
                medical_conditions: labels(&["Heart Disease"]),
                ..ProfileContext::default()
            },
        },
        DemoScenario {
            title: "Glass of water, empty profile",
            meal: Meal::new("Water", NutrientProfile::default()),
            profile: ProfileContext::default(),
        },
    ]
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let analyzer = MealAnalyzer::default();

    println!("Meal insight demo");
    for scenario in demo_scenarios() {
        let report = analyzer.analyze(&scenario.meal, &scenario.profile).report();
        render_report(scenario.title, &report);
    }

    Ok(())
}

pub(crate) fn render_report(title: &str, report: &AnalysisReport) {
    for line in report_lines(title, report) {
        println!("{line}");
    }
}

pub(crate) fn report_lines(title: &str, report: &AnalysisReport) -> Vec<String> {
    let mut lines = vec![
        format!("\n{title} ({})", report.meal_name),
        format!(
            "Overall: {} [{}]",
            report.overall_message, report.overall_color_label
        ),
    ];

    if report.warnings.is_empty() {
        lines.push("Warnings: none".to_string());
    } else {
        lines.push("Warnings".to_string());
        for warning in &report.warnings {
            let source = warning.category.label().unwrap_or("General Nutrition");
            let nutrient = warning.nutrient.as_deref().unwrap_or("meal name");
            lines.push(format!(
                "- [{}] {} ({}): {}",
                warning.severity_label, source, nutrient, warning.message
            ));
        }
    }

    if report.effects.is_empty() {
        lines.push("Benefits: none".to_string());
    } else {
        lines.push("Benefits".to_string());
        for effect in &report.effects {
            lines.push(format!("- {}: {}", effect.nutrient, effect.message));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use meal_insight::analysis::{Severity, StatusColor};

    #[test]
    fn demo_scenarios_cover_every_status_color() {
        let analyzer = MealAnalyzer::default();
        let colors: Vec<StatusColor> = demo_scenarios()
            .iter()
            .map(|scenario| {
                analyzer
                    .analyze(&scenario.meal, &scenario.profile)
                    .overall_color()
            })
            .collect();

        assert_eq!(
            colors,
            vec![
                StatusColor::Orange,
                StatusColor::Red,
                StatusColor::Red,
                StatusColor::Red,
                StatusColor::Yellow,
                StatusColor::Green,
                StatusColor::Blue,
            ]
        );
    }

    #[test]
    fn report_lines_name_the_source_of_each_warning() {
        let analyzer = MealAnalyzer::default();
        let scenarios = demo_scenarios();

        let ramen = &scenarios[0];
        let report = analyzer.analyze(&ramen.meal, &ramen.profile).report();
        let lines = report_lines(ramen.title, &report);
        assert_eq!(lines[0], "\nSalty ramen with high blood pressure (Tonkotsu Ramen)");
        assert!(lines
            .iter()
            .any(|line| line.starts_with("- [moderate] High Blood Pressure (Sodium): ")));
        assert_eq!(lines.last().map(String::as_str), Some("Benefits: none"));

        let shake = &scenarios[4];
        let report = analyzer.analyze(&shake.meal, &shake.profile).report();
        let lines = report_lines(shake.title, &report);
        assert!(lines
            .iter()
            .any(|line| line.starts_with("- [low] General Nutrition (Protein): ")));

        let salmon = &scenarios[5];
        let report = analyzer.analyze(&salmon.meal, &salmon.profile).report();
        let lines = report_lines(salmon.title, &report);
        assert!(lines.contains(&"Warnings: none".to_string()));
        assert!(lines.iter().any(|line| line.starts_with("- Omega-3 Fatty Acids: ")));
    }

    #[test]
    fn render_report_prints_every_demo_scenario() {
        let analyzer = MealAnalyzer::default();
        for scenario in demo_scenarios() {
            let report = analyzer.analyze(&scenario.meal, &scenario.profile).report();
            render_report(scenario.title, &report);
        }
    }

    #[test]
    fn analyze_request_builds_report() {
        let raw = r#"{
            "meal": { "name": "Oatmeal", "portion": "large", "nutrients": { "fiber": 4 } },
            "profile": { "medical_conditions": ["Diabetes"] }
        }"#;

        let report = analyze_request(&MealAnalyzer::default(), raw).expect("report builds");

        assert_eq!(report.meal_name, "Oatmeal");
        assert!(!report.has_concerns);
        assert_eq!(report.effects.len(), 2);
        assert_eq!(report.highest_severity, None::<Severity>);
    }

    #[test]
    fn analyze_request_rejects_bad_payloads() {
        let analyzer = MealAnalyzer::default();

        let err = analyze_request(&analyzer, "{ not json").expect_err("invalid json");
        assert!(matches!(err, AppError::Payload(_)));

        let err = analyze_request(
            &analyzer,
            r#"{ "meal": { "name": "Soup", "nutrients": { "sodium": -1 } } }"#,
        )
        .expect_err("negative sodium");
        assert!(matches!(err, AppError::Profile(_)));
    }
}
