use super::nutrients::NutrientProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ranked warning severity. Declaration order is the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Moderate, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }

    pub const fn color(self) -> StatusColor {
        match self {
            Self::Low => StatusColor::Yellow,
            Self::Moderate => StatusColor::Orange,
            Self::High => StatusColor::Red,
        }
    }
}

/// Display category for an analysis or a single warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
}

impl StatusColor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

/// What a warning was raised against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "label", rename_all = "snake_case")]
pub enum WarningCategory {
    MedicalCondition(String),
    DietaryRestriction(String),
    GeneralNutrition,
}

impl WarningCategory {
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::MedicalCondition(label) | Self::DietaryRestriction(label) => Some(label),
            Self::GeneralNutrition => None,
        }
    }
}

/// What a positive effect benefits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "label", rename_all = "snake_case")]
pub enum EffectCategory {
    MedicalCondition(String),
    GeneralNutrition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthWarning {
    pub category: WarningCategory,
    pub severity: Severity,
    pub nutrient: Option<String>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositiveEffect {
    pub category: EffectCategory,
    pub nutrient: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealPortion {
    Small,
    #[default]
    Medium,
    Large,
}

impl MealPortion {
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Small => 0.75,
            Self::Medium => 1.0,
            Self::Large => 1.5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    #[default]
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }
}

/// A logged meal. `nutrients` is the per-medium-serving profile; the analyzer reads
/// [`Meal::adjusted_nutrients`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    #[serde(default)]
    pub meal_type: MealType,
    #[serde(default)]
    pub portion: MealPortion,
    #[serde(default)]
    pub nutrients: NutrientProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Meal {
    pub fn new(name: impl Into<String>, nutrients: NutrientProfile) -> Self {
        Self {
            name: name.into(),
            meal_type: MealType::default(),
            portion: MealPortion::default(),
            nutrients,
            notes: None,
        }
    }

    pub fn with_portion(mut self, portion: MealPortion) -> Self {
        self.portion = portion;
        self
    }

    pub fn with_meal_type(mut self, meal_type: MealType) -> Self {
        self.meal_type = meal_type;
        self
    }

    pub fn adjusted_nutrients(&self) -> NutrientProfile {
        self.nutrients.scaled(self.portion.multiplier())
    }
}
