use super::domain::{
    EffectCategory, HealthWarning, PositiveEffect, Severity, StatusColor, WarningCategory,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four overall verdicts, keyed on (has concerns, has positive effects).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallAssessment {
    RequiresAttention,
    MixedBenefitsAndConcerns,
    GreatChoice,
    Neutral,
}

impl OverallAssessment {
    pub const fn from_flags(has_concerns: bool, has_positive_effects: bool) -> Self {
        match (has_concerns, has_positive_effects) {
            (true, false) => Self::RequiresAttention,
            (true, true) => Self::MixedBenefitsAndConcerns,
            (false, true) => Self::GreatChoice,
            (false, false) => Self::Neutral,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::RequiresAttention => {
                "This meal requires some attention based on your health profile."
            }
            Self::MixedBenefitsAndConcerns => {
                "This meal has some benefits, but also some concerns for your health profile."
            }
            Self::GreatChoice => "This meal is a great choice for your health profile!",
            Self::Neutral => "This meal appears to be neutral for your health profile.",
        }
    }
}

/// Immutable outcome of one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub meal_name: String,
    pub warnings: Vec<HealthWarning>,
    pub effects: Vec<PositiveEffect>,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    pub fn has_concerns(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn has_positive_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    pub fn assessment(&self) -> OverallAssessment {
        OverallAssessment::from_flags(self.has_concerns(), self.has_positive_effects())
    }

    pub fn overall_message(&self) -> &'static str {
        self.assessment().message()
    }

    pub fn highest_severity(&self) -> Option<Severity> {
        self.warnings.iter().map(|warning| warning.severity).max()
    }

    pub fn overall_color(&self) -> StatusColor {
        match self.highest_severity() {
            Some(severity) => severity.color(),
            None if self.has_positive_effects() => StatusColor::Green,
            None => StatusColor::Blue,
        }
    }

    pub fn warnings_with_severity(&self, severity: Severity) -> impl Iterator<Item = &HealthWarning> {
        self.warnings
            .iter()
            .filter(move |warning| warning.severity == severity)
    }

    pub fn report(&self) -> AnalysisReport {
        let warnings = self
            .warnings
            .iter()
            .map(|warning| WarningView {
                category: warning.category.clone(),
                severity: warning.severity,
                severity_label: warning.severity.label(),
                nutrient: warning.nutrient.clone(),
                message: warning.message.clone(),
            })
            .collect();

        let effects = self
            .effects
            .iter()
            .map(|effect| EffectView {
                category: effect.category.clone(),
                nutrient: effect.nutrient.clone(),
                message: effect.message.clone(),
            })
            .collect();

        let severity_counts = Severity::ordered()
            .into_iter()
            .map(|severity| SeverityCount {
                severity,
                severity_label: severity.label(),
                count: self.warnings_with_severity(severity).count(),
            })
            .collect();

        let color = self.overall_color();
        AnalysisReport {
            meal_name: self.meal_name.clone(),
            timestamp: self.timestamp,
            has_concerns: self.has_concerns(),
            has_positive_effects: self.has_positive_effects(),
            assessment: self.assessment(),
            overall_message: self.overall_message(),
            overall_color: color,
            overall_color_label: color.label(),
            highest_severity: self.highest_severity(),
            severity_counts,
            warnings,
            effects,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarningView {
    pub category: WarningCategory,
    pub severity: Severity,
    pub severity_label: &'static str,
    pub nutrient: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectView {
    pub category: EffectCategory,
    pub nutrient: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeverityCount {
    pub severity: Severity,
    pub severity_label: &'static str,
    pub count: usize,
}

/// Serializable snapshot of an [`AnalysisResult`] with every derived field filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub meal_name: String,
    pub timestamp: DateTime<Utc>,
    pub has_concerns: bool,
    pub has_positive_effects: bool,
    pub assessment: OverallAssessment,
    pub overall_message: &'static str,
    pub overall_color: StatusColor,
    pub overall_color_label: &'static str,
    pub highest_severity: Option<Severity>,
    pub severity_counts: Vec<SeverityCount>,
    pub warnings: Vec<WarningView>,
    pub effects: Vec<EffectView>,
}
