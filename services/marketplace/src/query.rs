//! Listing query pipeline
//!
//! Filtering is a linear scan over the whole catalog followed by a stable
//! sort, so listings that compare equal keep their catalog order. The browse
//! page's query string is read into [`ListingFilters`] and [`SortOption`]
//! here, and written back in canonical form.

use serde::Deserialize;

use crate::models::{Condition, Listing, ListingFilters, SortOption};

/// Whether `listing` satisfies every active predicate in `filters`
pub fn matches(listing: &Listing, filters: &ListingFilters) -> bool {
    if let Some(term) = filters.search.as_deref().filter(|s| !s.is_empty()) {
        let term = term.to_lowercase();
        let hit = [
            &listing.title,
            &listing.brand,
            &listing.model,
            &listing.description,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term));
        if !hit {
            return false;
        }
    }

    if !filters.brand.is_empty() && !filters.brand.contains(&listing.brand) {
        return false;
    }

    if !filters.condition.is_empty() && !filters.condition.contains(&listing.condition) {
        return false;
    }

    if filters.price_min.is_some_and(|min| listing.price < min) {
        return false;
    }

    if filters.price_max.is_some_and(|max| listing.price > max) {
        return false;
    }

    if let Some(term) = filters.location.as_deref().filter(|s| !s.is_empty()) {
        if !listing
            .location
            .to_lowercase()
            .contains(&term.to_lowercase())
        {
            return false;
        }
    }

    true
}

/// Stable in-place sort by `sort`
pub fn sort_listings(listings: &mut [Listing], sort: SortOption) {
    match sort {
        SortOption::Newest => listings.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOption::Oldest => listings.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOption::PriceLowHigh => listings.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::PriceHighLow => listings.sort_by(|a, b| b.price.cmp(&a.price)),
    }
}

/// Filter then sort `listings`
pub fn apply(listings: &[Listing], filters: &ListingFilters, sort: SortOption) -> Vec<Listing> {
    let mut result: Vec<Listing> = listings
        .iter()
        .filter(|listing| matches(listing, filters))
        .cloned()
        .collect();
    sort_listings(&mut result, sort);
    result
}

/// Raw query parameters accepted by the browse endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseQuery {
    pub search: Option<String>,
    /// Comma-separated brands
    pub brand: Option<String>,
    /// Comma-separated conditions
    pub condition: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub location: Option<String>,
    pub sort: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn split_list(value: &Option<String>) -> Vec<&str> {
    non_empty(value)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn parse_price(name: &str, value: &Option<String>) -> Result<Option<u64>, String> {
    non_empty(value)
        .map(|raw| {
            raw.parse::<u64>()
                .map_err(|_| format!("{} must be a whole number of rupees", name))
        })
        .transpose()
}

impl BrowseQuery {
    /// Validate and convert into filters and a sort order
    pub fn parse(&self) -> Result<(ListingFilters, SortOption), String> {
        let condition = split_list(&self.condition)
            .into_iter()
            .map(str::parse::<Condition>)
            .collect::<Result<Vec<_>, _>>()?;

        let sort = non_empty(&self.sort)
            .map(str::parse::<SortOption>)
            .transpose()?
            .unwrap_or_default();

        let filters = ListingFilters {
            search: non_empty(&self.search).map(str::to_string),
            brand: split_list(&self.brand)
                .into_iter()
                .map(str::to_string)
                .collect(),
            condition,
            price_min: parse_price("priceMin", &self.price_min)?,
            price_max: parse_price("priceMax", &self.price_max)?,
            location: non_empty(&self.location).map(str::to_string),
        };

        Ok((filters, sort))
    }
}

/// Canonical query string for `filters` and `sort`
///
/// Inactive parameters are omitted, as is the default sort.
pub fn to_query_string(filters: &ListingFilters, sort: SortOption) -> String {
    let mut params: Vec<(&str, String)> = Vec::new();

    if let Some(search) = filters.search.as_deref().filter(|s| !s.is_empty()) {
        params.push(("search", search.to_string()));
    }
    if !filters.brand.is_empty() {
        params.push(("brand", filters.brand.join(",")));
    }
    if !filters.condition.is_empty() {
        let names: Vec<&str> = filters.condition.iter().map(|c| c.as_str()).collect();
        params.push(("condition", names.join(",")));
    }
    if let Some(min) = filters.price_min {
        params.push(("priceMin", min.to_string()));
    }
    if let Some(max) = filters.price_max {
        params.push(("priceMax", max.to_string()));
    }
    if let Some(location) = filters.location.as_deref().filter(|s| !s.is_empty()) {
        params.push(("location", location.to_string()));
    }
    if sort != SortOption::Newest {
        params.push(("sort", sort.as_str().to_string()));
    }

    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
