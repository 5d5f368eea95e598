//! Item category data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of goods an item belongs to.
///
/// Serialized by variant name; `label` gives the text shown in the form and on cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Shirt,
    Pant,
    Shoes,
    Sports,
    Accessories,
    Electronics,
}

impl Category {
    /// All categories in the order the add form lists them.
    pub fn all() -> &'static [Category] {
        &[
            Category::Shirt,
            Category::Pant,
            Category::Shoes,
            Category::Sports,
            Category::Accessories,
            Category::Electronics,
        ]
    }

    /// Stored key of the category (the variant name).
    pub fn key(&self) -> &'static str {
        match self {
            Category::Shirt => "Shirt",
            Category::Pant => "Pant",
            Category::Shoes => "Shoes",
            Category::Sports => "Sports",
            Category::Accessories => "Accessories",
            Category::Electronics => "Electronics",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Sports => "Sports Gear",
            other => other.key(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: '{0}'")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Accepts the stored key or the display label, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::all()
            .iter()
            .copied()
            .find(|c| {
                c.key().eq_ignore_ascii_case(trimmed) || c.label().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_shirt() {
        assert_eq!(Category::default(), Category::Shirt);
    }

    #[test]
    fn test_sports_label_differs_from_key() {
        assert_eq!(Category::Sports.key(), "Sports");
        assert_eq!(Category::Sports.label(), "Sports Gear");
        assert_eq!(Category::Shoes.label(), "Shoes");
    }

    #[test]
    fn test_parse_key_and_label() {
        assert_eq!("shoes".parse::<Category>(), Ok(Category::Shoes));
        assert_eq!("Sports Gear".parse::<Category>(), Ok(Category::Sports));
        assert_eq!(" Electronics ".parse::<Category>(), Ok(Category::Electronics));
        assert_eq!(
            "Hats".parse::<Category>(),
            Err(ParseCategoryError("Hats".to_string()))
        );
    }

    #[test]
    fn test_parse_label_ignores_case() {
        assert_eq!("sports gear".parse::<Category>(), Ok(Category::Sports));
        assert_eq!("SPORTS GEAR".parse::<Category>(), Ok(Category::Sports));
        assert!("sportsgear".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_variant_name() {
        let json = serde_json::to_string(&Category::Sports).unwrap();
        assert_eq!(json, "\"Sports\"");
        let parsed: Category = serde_json::from_str("\"Accessories\"").unwrap();
        assert_eq!(parsed, Category::Accessories);
    }
}
