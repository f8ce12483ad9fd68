//! Meal health-risk analysis.
//!
//! [`MealAnalyzer`] runs the rule catalog (medical conditions, dietary restrictions,
//! general balance, glycemic load, inflammation, senior needs) against a meal's
//! portion-adjusted nutrients and the user's [`ProfileContext`], then wraps the
//! findings in an [`AnalysisResult`] whose overall message and color are derived
//! from them. Analysis is total: missing BMI or empty label sets simply mean fewer
//! rules fire.

mod config;
mod context;
mod domain;
mod evaluator;
mod nutrients;
pub mod router;
mod rules;
mod summary;

#[cfg(test)]
mod tests;

pub use config::{AnalysisConfig, KeywordMatch};
pub use context::{body_mass_index, BmiCategory, ProfileContext};
pub use domain::{
    EffectCategory, HealthWarning, Meal, MealPortion, MealType, PositiveEffect, Severity,
    StatusColor, WarningCategory,
};
pub use nutrients::{NutrientProfile, NutrientProfileError};
pub use router::{analysis_router, AnalyzeMealRequest};
pub use rules::{estimated_glycemic_load, Findings};
pub use summary::{
    AnalysisReport, AnalysisResult, EffectView, OverallAssessment, SeverityCount, WarningView,
};

use chrono::{DateTime, Utc};

/// Stateless analyzer holding only immutable matching options.
#[derive(Debug, Clone, Default)]
pub struct MealAnalyzer {
    config: AnalysisConfig,
}

impl MealAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze(&self, meal: &Meal, profile: &ProfileContext) -> AnalysisResult {
        self.analyze_at(meal, profile, Utc::now())
    }

    /// Same as [`MealAnalyzer::analyze`] but stamps every finding with `timestamp`.
    pub fn analyze_at(
        &self,
        meal: &Meal,
        profile: &ProfileContext,
        timestamp: DateTime<Utc>,
    ) -> AnalysisResult {
        let nutrients = meal.adjusted_nutrients();
        let Findings { warnings, effects } =
            evaluator::evaluate(&meal.name, &nutrients, profile, &self.config, timestamp);

        AnalysisResult {
            meal_name: meal.name.clone(),
            warnings,
            effects,
            timestamp,
        }
    }
}

/// Analyzes `meal` for `profile` with the default options.
pub fn analyze(meal: &Meal, profile: &ProfileContext) -> AnalysisResult {
    MealAnalyzer::default().analyze(meal, profile)
}
