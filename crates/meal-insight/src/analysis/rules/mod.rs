//! Rule catalog. Each family is a plain function from [`RuleInput`] to [`Findings`];
//! families are independent, so the evaluator simply concatenates their output.

mod balance;
mod conditions;
mod glycemic;
mod inflammation;
mod restrictions;
mod senior;

use super::config::AnalysisConfig;
use super::context::ProfileContext;
use super::domain::{
    EffectCategory, HealthWarning, PositiveEffect, Severity, WarningCategory,
};
use super::nutrients::NutrientProfile;
use chrono::{DateTime, Utc};

pub use glycemic::estimated_glycemic_load;

/// Everything a rule may look at for one analysis call.
pub(crate) struct RuleInput<'a> {
    pub meal_name: &'a str,
    pub nutrients: &'a NutrientProfile,
    pub context: &'a ProfileContext,
    pub config: &'a AnalysisConfig,
    pub timestamp: DateTime<Utc>,
}

/// Warnings and positive effects in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Findings {
    pub warnings: Vec<HealthWarning>,
    pub effects: Vec<PositiveEffect>,
}

impl Findings {
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty() && self.effects.is_empty()
    }

    pub fn extend(&mut self, other: Findings) {
        self.warnings.extend(other.warnings);
        self.effects.extend(other.effects);
    }
}

pub(crate) type RuleFamily = fn(&RuleInput<'_>) -> Findings;

/// All families in evaluation order.
pub(crate) const RULE_FAMILIES: [(&str, RuleFamily); 6] = [
    ("medical_conditions", conditions::evaluate),
    ("dietary_restrictions", restrictions::evaluate),
    ("nutritional_balance", balance::evaluate),
    ("glycemic_load", glycemic::evaluate),
    ("inflammation", inflammation::evaluate),
    ("senior_needs", senior::evaluate),
];

/// Collects findings for one family, stamping each with the call's timestamp.
pub(crate) struct Recorder {
    timestamp: DateTime<Utc>,
    findings: Findings,
}

impl Recorder {
    pub fn new(input: &RuleInput<'_>) -> Self {
        Self {
            timestamp: input.timestamp,
            findings: Findings::default(),
        }
    }

    pub fn warning(
        &mut self,
        category: WarningCategory,
        severity: Severity,
        nutrient: Option<&str>,
        message: &str,
    ) {
        self.findings.warnings.push(HealthWarning {
            category,
            severity,
            nutrient: nutrient.map(str::to_string),
            message: message.to_string(),
            timestamp: self.timestamp,
        });
    }

    pub fn effect(&mut self, category: EffectCategory, nutrient: &str, message: &str) {
        self.findings.effects.push(PositiveEffect {
            category,
            nutrient: nutrient.to_string(),
            message: message.to_string(),
            timestamp: self.timestamp,
        });
    }

    pub fn finish(self) -> Findings {
        self.findings
    }
}

/// Labels in first-seen order with repeats dropped; the context is treated as a set.
pub(crate) fn distinct(labels: &[String]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::with_capacity(labels.len());
    for label in labels {
        if !seen.contains(&label.as_str()) {
            seen.push(label.as_str());
        }
    }
    seen
}
