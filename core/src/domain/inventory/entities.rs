use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// The five ingredient categories. Exhaustive at every boundary: anything
/// else coming from outside coerces to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    Produce,
    Dairy,
    Pantry,
    Meat,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Produce,
        Category::Dairy,
        Category::Pantry,
        Category::Meat,
        Category::Other,
    ];

    /// Default shelf life in days, used when an expiry date has to be
    /// derived from a relative day count (receipt import).
    pub fn default_shelf_life_days(self) -> i64 {
        match self {
            Category::Produce => 7,
            Category::Dairy => 14,
            Category::Meat => 4,
            Category::Pantry => 60,
            Category::Other => 30,
        }
    }

    /// Coerce a free-form label from an external source. Unknown labels map
    /// to `Other` (30-day shelf-life assumption).
    pub fn coerce(label: &str) -> Category {
        label.parse().unwrap_or(Category::Other)
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "produce" => Ok(Category::Produce),
            "dairy" => Ok(Category::Dairy),
            "pantry" => Ok(Category::Pantry),
            "meat" => Ok(Category::Meat),
            "other" => Ok(Category::Other),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Produce => "Produce",
            Category::Dairy => "Dairy",
            Category::Pantry => "Pantry",
            Category::Meat => "Meat",
            Category::Other => "Other",
        };
        f.write_str(label)
    }
}

/// One inventory record, owned exclusively by one user.
///
/// `confidence` is advisory metadata from the receipt parser and never feeds
/// into freshness logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub category: Category,
    pub quantity: String,
    pub expiry_date: NaiveDate,
    pub confidence: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct IngredientConfig {
    pub user_id: Uuid,
    pub name: String,
    pub category: Category,
    pub quantity: String,
    pub expiry_date: NaiveDate,
    pub confidence: f64,
}

impl Ingredient {
    pub fn new(config: IngredientConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            name: config.name,
            category: config.category,
            quantity: config.quantity,
            expiry_date: config.expiry_date,
            confidence: config.confidence,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        name: Option<String>,
        category: Option<Category>,
        quantity: Option<String>,
        expiry_date: Option<NaiveDate>,
        confidence: Option<f64>,
    ) {
        let (now, _) = generate_timestamp();

        if let Some(n) = name {
            self.name = n;
        }
        if let Some(c) = category {
            self.category = c;
        }
        if let Some(q) = quantity {
            self.quantity = q;
        }
        if let Some(e) = expiry_date {
            self.expiry_date = e;
        }
        if let Some(cf) = confidence {
            self.confidence = cf;
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parsing_is_case_insensitive() {
        assert_eq!("produce".parse(), Ok(Category::Produce));
        assert_eq!("DAIRY".parse(), Ok(Category::Dairy));
        assert_eq!(" Meat ".parse(), Ok(Category::Meat));
        assert_eq!("Pantry".parse(), Ok(Category::Pantry));
        assert!("frozen".parse::<Category>().is_err());
    }

    #[test]
    fn unknown_labels_coerce_to_other() {
        assert_eq!(Category::coerce("Beverages"), Category::Other);
        assert_eq!(Category::coerce(""), Category::Other);
        assert_eq!(Category::coerce("dairy"), Category::Dairy);
    }

    #[test]
    fn shelf_life_table() {
        assert_eq!(Category::Produce.default_shelf_life_days(), 7);
        assert_eq!(Category::Dairy.default_shelf_life_days(), 14);
        assert_eq!(Category::Meat.default_shelf_life_days(), 4);
        assert_eq!(Category::Pantry.default_shelf_life_days(), 60);
        assert_eq!(Category::Other.default_shelf_life_days(), 30);
    }
}
