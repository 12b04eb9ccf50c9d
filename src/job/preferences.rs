use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::job::WorkMode;

/// Stored minimum match score. Settings forms have written this both as a
/// number and as text, so either shape is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MinMatchScore {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl MinMatchScore {
    /// Integer value of the field, if it has one.
    ///
    /// Text is read up to the first non-digit after an optional sign, so
    /// `" 45 "` and `"45%"` both give 45 while `"high"` gives `None`.
    /// Floats truncate toward zero.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            MinMatchScore::Integer(n) => Some(*n),
            MinMatchScore::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            MinMatchScore::Float(_) => None,
            MinMatchScore::Text(s) => leading_integer(s),
        }
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..end]
    };

    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// User matching criteria. Every field is optional; absent fields match
/// nothing, and an all-empty record is still distinct from having no
/// preferences at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_locations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_mode: Option<BTreeSet<WorkMode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_match_score: Option<MinMatchScore>,
}

impl Preferences {
    pub fn role_keyword_tokens(&self) -> Vec<String> {
        split_tokens(self.role_keywords.as_deref().unwrap_or(""))
    }

    pub fn skill_tokens(&self) -> Vec<String> {
        split_tokens(self.skills.as_deref().unwrap_or(""))
    }

    /// Lower-cased locations, otherwise verbatim. An empty entry matches
    /// every location.
    pub fn location_tokens(&self) -> Vec<String> {
        self.preferred_locations
            .iter()
            .flatten()
            .map(|l| l.to_lowercase())
            .collect()
    }

    pub fn prefers_mode(&self, mode: WorkMode) -> bool {
        self.preferred_mode
            .as_ref()
            .is_some_and(|modes| modes.contains(&mode))
    }

    /// Parsed `min_match_score`, or `default` when absent or unparseable.
    /// Each caller supplies its own default.
    pub fn min_match_score_or(&self, default: i64) -> i64 {
        self.min_match_score
            .as_ref()
            .and_then(MinMatchScore::as_integer)
            .unwrap_or(default)
    }
}

/// Normalize a comma-separated list:
/// - Lowercase
/// - Split on ','
/// - Trim each token, drop blanks
pub fn split_tokens(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
