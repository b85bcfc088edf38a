//! Query-shaping value objects for the browse page

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::listing::Condition;

/// Filters applied to the listing catalog
///
/// Every field is optional; an empty list or string means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub brand: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub condition: Vec<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ListingFilters {
    /// Whether any predicate constrains the result
    pub fn is_active(&self) -> bool {
        self.search.as_deref().is_some_and(|s| !s.is_empty())
            || !self.brand.is_empty()
            || !self.condition.is_empty()
            || self.price_min.is_some()
            || self.price_max.is_some()
            || self.location.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Result ordering for the browse page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    #[default]
    Newest,
    Oldest,
    PriceLowHigh,
    PriceHighLow,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::Newest,
        SortOption::Oldest,
        SortOption::PriceLowHigh,
        SortOption::PriceHighLow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::Oldest => "oldest",
            SortOption::PriceLowHigh => "price-low-high",
            SortOption::PriceHighLow => "price-high-low",
        }
    }

    /// Human label shown next to the option
    pub fn label(self) -> &'static str {
        match self {
            SortOption::Newest => "Newest First",
            SortOption::Oldest => "Oldest First",
            SortOption::PriceLowHigh => "Price: Low to High",
            SortOption::PriceHighLow => "Price: High to Low",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| format!("Unknown sort option: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_are_inactive() {
        assert!(!ListingFilters::default().is_active());
        assert!(
            !ListingFilters {
                search: Some(String::new()),
                ..ListingFilters::default()
            }
            .is_active()
        );
        assert!(
            ListingFilters {
                price_max: Some(50000),
                ..ListingFilters::default()
            }
            .is_active()
        );
    }

    #[test]
    fn test_sort_option_names_round_trip() {
        for option in SortOption::ALL {
            assert_eq!(option.as_str().parse::<SortOption>(), Ok(option));
            assert_eq!(
                serde_json::to_string(&option).unwrap(),
                format!("\"{}\"", option.as_str())
            );
        }
        assert!("cheapest".parse::<SortOption>().is_err());
    }
}
