use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Nutrient totals for one serving of a meal.
///
/// Units follow the food catalog: grams for macronutrients and fatty acids,
/// milligrams for most minerals, IU for vitamins A and D, micrograms for
/// vitamin K, B12, folate and selenium.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NutrientProfile {
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub vitamin_a: f64,
    pub vitamin_c: f64,
    pub vitamin_d: f64,
    pub vitamin_e: f64,
    pub vitamin_k: f64,
    pub thiamin: f64,
    pub riboflavin: f64,
    pub niacin: f64,
    pub vitamin_b6: f64,
    pub vitamin_b12: f64,
    pub folate: f64,
    pub calcium: f64,
    pub iron: f64,
    pub magnesium: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub sodium: f64,
    pub zinc: f64,
    pub selenium: f64,
    pub omega3: f64,
    pub omega6: f64,
    pub cholesterol: f64,
}

/// Rejected nutrient value at the profile construction boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NutrientProfileError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

impl NutrientProfile {
    /// Named view over every field, in declaration order.
    pub fn fields(&self) -> [(&'static str, f64); 28] {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbohydrates", self.carbohydrates),
            ("fat", self.fat),
            ("fiber", self.fiber),
            ("sugar", self.sugar),
            ("vitaminA", self.vitamin_a),
            ("vitaminC", self.vitamin_c),
            ("vitaminD", self.vitamin_d),
            ("vitaminE", self.vitamin_e),
            ("vitaminK", self.vitamin_k),
            ("thiamin", self.thiamin),
            ("riboflavin", self.riboflavin),
            ("niacin", self.niacin),
            ("vitaminB6", self.vitamin_b6),
            ("vitaminB12", self.vitamin_b12),
            ("folate", self.folate),
            ("calcium", self.calcium),
            ("iron", self.iron),
            ("magnesium", self.magnesium),
            ("phosphorus", self.phosphorus),
            ("potassium", self.potassium),
            ("sodium", self.sodium),
            ("zinc", self.zinc),
            ("selenium", self.selenium),
            ("omega3", self.omega3),
            ("omega6", self.omega6),
            ("cholesterol", self.cholesterol),
        ]
    }

    /// Checks the construction-boundary invariant: every field finite and non-negative.
    pub fn validate(&self) -> Result<(), NutrientProfileError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(NutrientProfileError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(NutrientProfileError::Negative { field, value });
            }
        }
        Ok(())
    }

    pub fn scaled(&self, factor: f64) -> Self {
        self.combine(self, |value, _| value * factor)
    }

    /// Omega-6 to omega-3 ratio with the denominator floored at 0.1 g.
    pub fn omega_ratio(&self) -> f64 {
        self.omega6 / self.omega3.max(0.1)
    }

    fn combine(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Self {
        Self {
            calories: op(self.calories, other.calories),
            protein: op(self.protein, other.protein),
            carbohydrates: op(self.carbohydrates, other.carbohydrates),
            fat: op(self.fat, other.fat),
            fiber: op(self.fiber, other.fiber),
            sugar: op(self.sugar, other.sugar),
            vitamin_a: op(self.vitamin_a, other.vitamin_a),
            vitamin_c: op(self.vitamin_c, other.vitamin_c),
            vitamin_d: op(self.vitamin_d, other.vitamin_d),
            vitamin_e: op(self.vitamin_e, other.vitamin_e),
            vitamin_k: op(self.vitamin_k, other.vitamin_k),
            thiamin: op(self.thiamin, other.thiamin),
            riboflavin: op(self.riboflavin, other.riboflavin),
            niacin: op(self.niacin, other.niacin),
            vitamin_b6: op(self.vitamin_b6, other.vitamin_b6),
            vitamin_b12: op(self.vitamin_b12, other.vitamin_b12),
            folate: op(self.folate, other.folate),
            calcium: op(self.calcium, other.calcium),
            iron: op(self.iron, other.iron),
            magnesium: op(self.magnesium, other.magnesium),
            phosphorus: op(self.phosphorus, other.phosphorus),
            potassium: op(self.potassium, other.potassium),
            sodium: op(self.sodium, other.sodium),
            zinc: op(self.zinc, other.zinc),
            selenium: op(self.selenium, other.selenium),
            omega3: op(self.omega3, other.omega3),
            omega6: op(self.omega6, other.omega6),
            cholesterol: op(self.cholesterol, other.cholesterol),
        }
    }
}

impl Add for NutrientProfile {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(&rhs, |left, right| left + right)
    }
}

impl Sum for NutrientProfile {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
