use serde::{Deserialize, Serialize};

/// The consuming user's health profile as seen by the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileContext {
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    /// Body weight in kilograms.
    #[serde(default)]
    pub weight_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
}

impl ProfileContext {
    /// Builds a context deriving BMI from height (cm) and weight (kg).
    pub fn from_measurements(
        medical_conditions: Vec<String>,
        dietary_restrictions: Vec<String>,
        height_cm: f64,
        weight_kg: f64,
    ) -> Self {
        Self {
            medical_conditions,
            dietary_restrictions,
            weight_kg,
            bmi: body_mass_index(height_cm, weight_kg),
        }
    }

    pub fn has_condition(&self, label: &str) -> bool {
        self.medical_conditions.iter().any(|condition| condition == label)
    }

    pub fn has_restriction(&self, label: &str) -> bool {
        self.dietary_restrictions
            .iter()
            .any(|restriction| restriction == label)
    }

    pub fn bmi_category(&self) -> Option<BmiCategory> {
        self.bmi.map(BmiCategory::from_bmi)
    }
}

/// `None` unless both measurements are positive.
pub fn body_mass_index(height_cm: f64, weight_kg: f64) -> Option<f64> {
    if height_cm <= 0.0 || weight_kg <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// WHO adult BMI bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    ObeseClass1,
    ObeseClass2,
    ObeseClass3,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        match bmi {
            b if b < 18.5 => Self::Underweight,
            b if b < 25.0 => Self::NormalWeight,
            b if b < 30.0 => Self::Overweight,
            b if b < 35.0 => Self::ObeseClass1,
            b if b < 40.0 => Self::ObeseClass2,
            _ => Self::ObeseClass3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal Weight",
            Self::Overweight => "Overweight",
            Self::ObeseClass1 => "Obese (Class 1)",
            Self::ObeseClass2 => "Obese (Class 2)",
            Self::ObeseClass3 => "Obese (Class 3)",
        }
    }
}
