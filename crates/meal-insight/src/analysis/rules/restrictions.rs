use super::{distinct, Findings, Recorder, RuleInput};
use crate::analysis::config::KeywordMatch;
use crate::analysis::domain::{Severity, WarningCategory};
use tracing::debug;

const MEAT: &[&str] = &["beef", "chicken", "pork", "turkey", "lamb"];
const ANIMAL_PRODUCTS: &[&str] = &[
    "meat", "beef", "chicken", "pork", "turkey", "lamb", "milk", "cheese", "yogurt", "butter",
    "cream", "egg",
];
const GLUTEN: &[&str] = &["wheat", "bread", "pasta", "flour", "cookie", "cake", "cereal"];
const DAIRY: &[&str] = &["milk", "cheese", "yogurt", "butter", "cream"];
const NUTS: &[&str] = &["nut", "almond", "peanut", "walnut", "cashew", "pecan"];

/// Keyword screens evaluated against the meal name.
const NAME_SCREENS: &[(&str, &[&str], &str)] = &[
    (
        "Vegetarian",
        MEAT,
        "This meal contains meat, which conflicts with your vegetarian dietary restriction.",
    ),
    (
        "Vegan",
        ANIMAL_PRODUCTS,
        "This meal may contain animal products, which conflicts with your vegan dietary restriction.",
    ),
    (
        "Gluten-Free",
        GLUTEN,
        "This meal may contain gluten, which conflicts with your gluten-free dietary restriction.",
    ),
    (
        "Dairy-Free",
        DAIRY,
        "This meal may contain dairy, which conflicts with your dairy-free dietary restriction.",
    ),
    (
        "Nut-Free",
        NUTS,
        "This meal may contain nuts, which conflicts with your nut-free dietary restriction.",
    ),
];

pub(crate) fn evaluate(input: &RuleInput<'_>) -> Findings {
    let mut recorder = Recorder::new(input);
    let n = input.nutrients;
    let name = input.meal_name.to_lowercase();
    let mode = input.config.keyword_match;

    for restriction in distinct(&input.context.dietary_restrictions) {
        let category = WarningCategory::DietaryRestriction(restriction.to_string());

        if let Some((_, keywords, message)) = NAME_SCREENS
            .iter()
            .find(|(label, _, _)| *label == restriction)
        {
            if keywords.iter().any(|keyword| name_mentions(&name, keyword, mode)) {
                recorder.warning(category, Severity::High, None, message);
            }
            continue;
        }

        match restriction {
            "Low Sodium" => {
                if n.sodium > 400.0 {
                    recorder.warning(
                        category,
                        Severity::Moderate,
                        Some("Sodium"),
                        "This meal contains more than 400mg of sodium, which exceeds your low-sodium dietary restriction.",
                    );
                }
            }
            "Low Sugar" => {
                if n.sugar > 10.0 {
                    recorder.warning(
                        category,
                        Severity::Moderate,
                        Some("Sugar"),
                        "This meal contains more than 10g of sugar, which exceeds your low-sugar dietary restriction.",
                    );
                }
            }
            "Low Fat" => {
                if n.fat > 10.0 {
                    recorder.warning(
                        category,
                        Severity::Moderate,
                        Some("Fat"),
                        "This meal contains more than 10g of fat, which exceeds your low-fat dietary restriction.",
                    );
                }
            }
            other => debug!(restriction = other, "no restriction rules for label"),
        }
    }

    recorder.finish()
}

/// Whether an already-lowercased meal name mentions `keyword` under the given mode.
pub(crate) fn name_mentions(name: &str, keyword: &str, mode: KeywordMatch) -> bool {
    match mode {
        KeywordMatch::Substring => name.contains(keyword),
        KeywordMatch::WholeWord => name
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .any(|token| {
                token == keyword
                    || token
                        .strip_prefix(keyword)
                        .is_some_and(|rest| rest == "s" || rest == "es")
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_matching_finds_keywords_inside_words() {
        assert!(name_mentions("glazed doughnut", "nut", KeywordMatch::Substring));
        assert!(name_mentions("buttermilk pancakes", "milk", KeywordMatch::Substring));
        assert!(!name_mentions("garden salad", "nut", KeywordMatch::Substring));
    }

    #[test]
    fn whole_word_matching_requires_token_boundaries() {
        assert!(!name_mentions("glazed doughnut", "nut", KeywordMatch::WholeWord));
        assert!(!name_mentions("buttermilk pancakes", "milk", KeywordMatch::WholeWord));
        assert!(name_mentions("mixed nuts", "nut", KeywordMatch::WholeWord));
        assert!(name_mentions("scrambled eggs", "egg", KeywordMatch::WholeWord));
        assert!(name_mentions("peanut-butter toast", "peanut", KeywordMatch::WholeWord));
        assert!(name_mentions("turkey, sliced", "turkey", KeywordMatch::WholeWord));
    }
}
