//! Tour package model: a bundled, itinerary-based tour product

use serde::{Deserialize, Serialize};

use crate::models::taxonomy::Category;

/// One day of a package itinerary. Days are contiguous starting at 1,
/// checked at catalog load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub title: String,
    pub activities: Vec<String>,
}

/// A tour package record. Created once at startup from catalog data and
/// never mutated; identity is the `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub duration: String,
    pub group_size: String,
    /// Aggregate rating on a 0-5 scale.
    pub rating: f32,
    /// Review count. Carried as display data only; the "Most Popular" sort
    /// deliberately does not read it.
    pub reviews: u32,
    /// Offer price in whole rupees. Must not exceed `original_price`.
    pub price: u32,
    pub original_price: u32,
    pub image: String,
    pub category: Category,
    pub difficulty: String,
    pub features: Vec<String>,
    pub itinerary: Vec<ItineraryDay>,
    pub included: Vec<String>,
    pub excluded: Vec<String>,
}

impl Package {
    /// Amount knocked off the original price, in whole rupees.
    #[must_use]
    pub fn savings(&self) -> u32 {
        self.original_price - self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_catalog_shape() {
        let json = r#"{
            "id": "golden-triangle",
            "title": "Golden Triangle Tour",
            "subtitle": "Delhi • Agra • Jaipur",
            "duration": "6 Days / 5 Nights",
            "groupSize": "2-15 People",
            "rating": 4.9,
            "reviews": 1250,
            "price": 24999,
            "originalPrice": 34999,
            "image": "/images/destinations/agra-taj-mahal.jpg",
            "category": "Cultural",
            "difficulty": "Easy",
            "features": ["Professional Guide"],
            "itinerary": [
                { "day": 1, "title": "Arrival in Delhi", "activities": ["India Gate"] }
            ],
            "included": ["Accommodation"],
            "excluded": ["Flights"]
        }"#;

        let package: Package = serde_json::from_str(json).unwrap();
        assert_eq!(package.id, "golden-triangle");
        assert_eq!(package.group_size, "2-15 People");
        assert_eq!(package.original_price, 34_999);
        assert_eq!(package.itinerary[0].day, 1);
        assert_eq!(package.category, Category::Cultural);
    }

    #[test]
    fn test_savings() {
        let json = r#"{
            "id": "p", "title": "P", "subtitle": "", "duration": "",
            "groupSize": "", "rating": 4.0, "reviews": 1,
            "price": 18999, "originalPrice": 25999,
            "image": "", "category": "Adventure", "difficulty": "Easy",
            "features": [], "itinerary": [], "included": [], "excluded": []
        }"#;
        let package: Package = serde_json::from_str(json).unwrap();
        assert_eq!(package.savings(), 7_000);
    }
}
