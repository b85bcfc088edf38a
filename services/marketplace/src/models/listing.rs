//! Listing model and related payloads

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};

use super::user::User;

/// Physical condition of a phone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    New,
    #[serde(rename = "Like New")]
    LikeNew,
    Good,
    Fair,
    Poor,
}

impl Condition {
    /// Every condition, best first
    pub const ALL: [Condition; 5] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown condition: {}", s))
    }
}

/// Moderation / sale status of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListingStatus {
    #[default]
    Active,
    Sold,
    Pending,
    Rejected,
}

/// Listing entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub brand: String,
    pub model: String,
    pub description: String,
    pub condition: Condition,
    /// Asking price in whole rupees
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u64>,
    pub images: Vec<String>,
    #[serde(rename = "sellerID")]
    pub seller_id: String,
    pub location: String,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// Percentage below the original price, rounded to the nearest integer
    pub fn discount_percent(&self) -> Option<i64> {
        let original = self.original_price.filter(|p| *p > 0)? as f64;
        Some(((original - self.price as f64) / original * 100.0).round() as i64)
    }

    /// Merge the fields present in `update`
    pub fn apply(&mut self, update: UpdateListing) {
        let UpdateListing {
            title,
            brand,
            model,
            description,
            condition,
            price,
            original_price,
            images,
            location,
            status,
        } = update;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(brand) = brand {
            self.brand = brand;
        }
        if let Some(model) = model {
            self.model = model;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(condition) = condition {
            self.condition = condition;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(original_price) = original_price {
            self.original_price = original_price;
        }
        if let Some(images) = images {
            self.images = images;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(status) = status {
            self.status = status;
        }
    }
}

/// Sell form payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_condition")]
    pub condition: Condition,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: u64,
    #[serde(default, deserialize_with = "deserialize_optional_price")]
    pub original_price: Option<u64>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub images: Vec<String>,
}

fn default_condition() -> Condition {
    Condition::Good
}

/// Form fields may send prices as numbers or as numeric strings
#[derive(Deserialize)]
#[serde(untagged)]
enum PriceInput {
    Number(u64),
    Text(String),
}

impl PriceInput {
    /// `None` for an empty string
    fn into_price<E: de::Error>(self) -> Result<Option<u64>, E> {
        match self {
            PriceInput::Number(price) => Ok(Some(price)),
            PriceInput::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(None);
                }
                text.parse::<u64>()
                    .map(Some)
                    .map_err(|_| E::custom(format!("invalid price: {:?}", text)))
            }
        }
    }
}

fn deserialize_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(PriceInput::deserialize(deserializer)?
        .into_price::<D::Error>()?
        .unwrap_or_default())
}

fn deserialize_optional_price<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u64>, D::Error> {
    match Option::<PriceInput>::deserialize(deserializer)? {
        Some(input) => input.into_price(),
        None => Ok(None),
    }
}

/// Present field: `null` or an empty string clears the value
fn deserialize_clearable_price<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Option<u64>>, D::Error> {
    deserialize_optional_price(deserializer).map(Some)
}

/// Listing update payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateListing {
    pub title: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub description: Option<String>,
    pub condition: Option<Condition>,
    #[serde(deserialize_with = "deserialize_optional_price")]
    pub price: Option<u64>,
    /// `Some(None)` removes the original price
    #[serde(deserialize_with = "deserialize_clearable_price")]
    pub original_price: Option<Option<u64>>,
    pub images: Option<Vec<String>>,
    pub location: Option<String>,
    pub status: Option<ListingStatus>,
}

/// Response for the listing detail page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDetailResponse {
    pub listing: Listing,
    pub seller: Option<User>,
    pub discount_percent: Option<i64>,
    pub similar: Vec<Listing>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(price: u64, original_price: Option<u64>) -> Listing {
        let now = Utc::now();
        Listing {
            id: "listing1".to_string(),
            title: "iPhone 14 Pro Max in Perfect Condition".to_string(),
            brand: "Apple".to_string(),
            model: "iPhone 14 Pro Max".to_string(),
            description: "Used for just 6 months.".to_string(),
            condition: Condition::LikeNew,
            price,
            original_price,
            images: vec![],
            seller_id: "user1".to_string(),
            location: "Mumbai, Maharashtra".to_string(),
            status: ListingStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_condition_wire_names() {
        assert_eq!(
            serde_json::to_string(&Condition::LikeNew).unwrap(),
            "\"Like New\""
        );
        assert_eq!("Like New".parse::<Condition>(), Ok(Condition::LikeNew));
        assert!("like new".parse::<Condition>().is_err());
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(listing(89999, Some(129900)).discount_percent(), Some(31));
        assert_eq!(listing(19999, Some(25999)).discount_percent(), Some(23));
        assert_eq!(listing(100, None).discount_percent(), None);
        assert_eq!(listing(100, Some(0)).discount_percent(), None);
    }

    #[test]
    fn test_persisted_field_names() {
        let value = serde_json::to_value(listing(100, None)).unwrap();
        assert_eq!(value["sellerID"], "user1");
        assert_eq!(value["condition"], "Like New");
        assert!(value.get("originalPrice").is_none());
        assert!(value["createdAt"].is_string());
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut listing = listing(89999, Some(129900));
        listing.apply(UpdateListing {
            price: Some(84999),
            status: Some(ListingStatus::Pending),
            ..UpdateListing::default()
        });

        assert_eq!(listing.price, 84999);
        assert_eq!(listing.status, ListingStatus::Pending);
        assert_eq!(listing.original_price, Some(129900));
        assert_eq!(listing.title, "iPhone 14 Pro Max in Perfect Condition");
    }

    #[test]
    fn test_prices_accept_numeric_strings() {
        let new_listing: NewListing = serde_json::from_value(serde_json::json!({
            "price": " 29999 ",
            "originalPrice": "",
        }))
        .unwrap();
        assert_eq!(new_listing.price, 29999);
        assert_eq!(new_listing.original_price, None);

        let new_listing: NewListing =
            serde_json::from_value(serde_json::json!({"price": 100, "originalPrice": "150"}))
                .unwrap();
        assert_eq!(new_listing.original_price, Some(150));

        assert!(
            serde_json::from_value::<NewListing>(serde_json::json!({"price": "cheap"})).is_err()
        );
        assert!(serde_json::from_value::<NewListing>(serde_json::json!({"price": -5})).is_err());
    }

    #[test]
    fn test_update_can_clear_original_price() {
        let keep: UpdateListing = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(keep.original_price, None);

        let clear: UpdateListing =
            serde_json::from_value(serde_json::json!({"originalPrice": null})).unwrap();
        assert_eq!(clear.original_price, Some(None));

        let set: UpdateListing =
            serde_json::from_value(serde_json::json!({"originalPrice": "99999"})).unwrap();
        assert_eq!(set.original_price, Some(Some(99999)));

        let mut listing = listing(89999, Some(129900));
        listing.apply(keep);
        assert_eq!(listing.original_price, Some(129900));
        listing.apply(clear);
        assert_eq!(listing.original_price, None);
        assert_eq!(listing.discount_percent(), None);
    }
}
