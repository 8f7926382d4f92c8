//! Wire DTOs for products and pantry records.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (`_id`, `purchase_date`) so serde
//! round-trips stay lossless. Category is kept as a free string: the fixed
//! display list lives in [`CATEGORIES`] and unknown labels must still
//! deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Category labels shown on the pantry page, in display order.
pub const CATEGORIES: [&str; 15] = [
    "baked goods",
    "baking supplies",
    "beverages",
    "cleaning products",
    "dairy",
    "deli",
    "frozen foods",
    "herbs/spices",
    "meat",
    "miscellaneous",
    "paper products",
    "pet supplies",
    "produce",
    "staples",
    "toiletries",
];

/// Columns rendered for each pantry row.
pub const DISPLAY_COLUMNS: [&str; 3] = ["product", "purchase_date", "notes"];

/// A catalog product as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable identity key.
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub brand: String,
    /// Category label; may fall outside [`CATEGORIES`].
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub store: String,
    /// Maximum quantity the household wants on hand.
    #[serde(default, deserialize_with = "deserialize_u32_from_number")]
    pub limit: u32,
}

impl Product {
    /// Label for the product column: name, then brand, then the raw id.
    pub fn display_name(&self) -> &str {
        [self.product_name.as_str(), self.brand.as_str()]
            .into_iter()
            .find(|s| !s.trim().is_empty())
            .unwrap_or(self.id.as_str())
    }
}

/// A purchase record for a product sitting in the pantry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantryItem {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Identity of the referenced [`Product`].
    pub product: String,
    /// ISO-like date string; ordering is lexicographic.
    pub purchase_date: String,
    #[serde(default)]
    pub notes: String,
}

impl PantryItem {
    /// Sort key for the natural purchase-date order.
    pub fn date_key(&self) -> String {
        self.purchase_date.to_lowercase()
    }
}

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return u32::try_from(int).map_err(|_| D::Error::custom(format!("value {int} out of range for u32")));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= f64::from(u32::MAX)
            {
                return Ok(float as u32);
            }
            Err(D::Error::custom("expected non-negative integer-compatible number"))
        }
        serde_json::Value::Null => Ok(0),
        _ => Err(D::Error::custom("expected number")),
    }
}
