use serde::{Deserialize, Serialize};
use std::fmt;

use super::Category;

/// Category selection of a listing page
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a filter-menu value; `"all"` (any case) selects every category
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(Category::new(trimmed))
        }
    }

    pub fn category(&self) -> Option<&Category> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(category),
        }
    }

    pub fn label(&self) -> String {
        match self {
            CategoryFilter::All => "All Categories".to_string(),
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

/// Ephemeral per-page search and filter state.
///
/// Lives exactly as long as the listing page that owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilterState {
    pub query: String,
    pub category: CategoryFilter,
}

impl SearchFilterState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_variants() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("ALL"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("  "), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("jewelery"),
            CategoryFilter::Only(Category::from("jewelery"))
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(CategoryFilter::All.label(), "All Categories");
        assert_eq!(
            CategoryFilter::Only(Category::from("electronics")).label(),
            "Electronics"
        );
    }
}
