use super::config::AnalysisConfig;
use super::context::ProfileContext;
use super::nutrients::NutrientProfile;
use super::rules::{Findings, RuleInput, RULE_FAMILIES};
use chrono::{DateTime, Utc};
use tracing::{debug, trace};

/// Runs every rule family against one meal and concatenates the results.
pub(crate) fn evaluate(
    meal_name: &str,
    nutrients: &NutrientProfile,
    context: &ProfileContext,
    config: &AnalysisConfig,
    timestamp: DateTime<Utc>,
) -> Findings {
    let input = RuleInput {
        meal_name,
        nutrients,
        context,
        config,
        timestamp,
    };

    let findings = RULE_FAMILIES
        .iter()
        .fold(Findings::default(), |mut acc, (family, rule)| {
            let produced = rule(&input);
            trace!(
                family,
                warnings = produced.warnings.len(),
                effects = produced.effects.len(),
                "rule family evaluated"
            );
            acc.extend(produced);
            acc
        });

    debug!(
        meal = meal_name,
        conditions = context.medical_conditions.len(),
        restrictions = context.dietary_restrictions.len(),
        warnings = findings.warnings.len(),
        effects = findings.effects.len(),
        "meal evaluated"
    );

    findings
}
