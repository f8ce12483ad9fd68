//! Meal health-risk analysis.
//!
//! Given a meal's nutrient totals and a user's medical and dietary profile, the
//! [`analysis`] module produces ranked warnings and positive-effect observations
//! together with an overall assessment. The engine is stateless; everything else
//! in this crate (configuration, telemetry, HTTP routing) is plumbing around it.

pub mod analysis;
pub mod config;
pub mod error;
pub mod telemetry;

pub use analysis::{analyze, AnalysisResult, Meal, MealAnalyzer, NutrientProfile, ProfileContext};
