use serde::{Deserialize, Serialize};

/// How dietary-restriction keywords are matched against a meal name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordMatch {
    /// Case-insensitive containment anywhere in the name ("doughnut" contains "nut").
    #[default]
    Substring,
    /// The keyword must be a whole alphanumeric token, optionally pluralised with "s"/"es".
    WholeWord,
}

impl KeywordMatch {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "substring" => Some(Self::Substring),
            "whole_word" | "whole-word" | "word" => Some(Self::WholeWord),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Substring => "substring",
            Self::WholeWord => "whole_word",
        }
    }
}

/// Analyzer options. Thresholds are fixed; only name matching is tunable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub keyword_match: KeywordMatch,
}
