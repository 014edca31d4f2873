use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::DEFAULT_QUERY;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Stars,
    Updated,
    Created,
    Forks,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Stars => "stars",
            SortKey::Updated => "updated",
            SortKey::Created => "created",
            SortKey::Forks => "forks",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-chosen search criteria. Values are passed to the API verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
    pub query: String,
    pub language: Option<String>,
    #[serde(deserialize_with = "blank_sort_as_default")]
    pub sort: SortKey,
    /// Minimum creation date, e.g. `2024-01-01`.
    pub date_filter: Option<String>,
    /// Minimum star count; `"0"` means no minimum.
    pub stars_filter: Option<String>,
}

/// An empty `sort` means not chosen; unknown keys are still rejected.
fn blank_sort_as_default<'de, D>(deserializer: D) -> Result<SortKey, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.trim().is_empty() {
        return Ok(SortKey::default());
    }
    SortKey::deserialize(raw.as_str().into_deserializer())
}

fn chosen(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Builds the `q` parameter: free text (or the default query) followed by
/// `language:`, `created:>` and `stars:>=` qualifiers, in that order.
pub fn build_search_query(filters: &SearchFilters) -> String {
    let text = filters.query.trim();
    let mut query = if text.is_empty() {
        DEFAULT_QUERY.to_string()
    } else {
        text.to_string()
    };

    if let Some(language) = chosen(&filters.language) {
        query.push_str(&format!(" language:{language}"));
    }

    if let Some(date) = chosen(&filters.date_filter) {
        query.push_str(&format!(" created:>{date}"));
    }

    if let Some(stars) = chosen(&filters.stars_filter).filter(|s| *s != "0") {
        query.push_str(&format!(" stars:>={stars}"));
    }

    query
}

/// Repositories created during the last week with at least ten stars.
pub fn trending_filters(today: NaiveDate) -> SearchFilters {
    let last_week = today - Duration::days(7);

    SearchFilters {
        query: format!("created:>{}", last_week.format("%Y-%m-%d")),
        language: None,
        sort: SortKey::Stars,
        date_filter: None,
        stars_filter: Some("10".to_string()),
    }
}
