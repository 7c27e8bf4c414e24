//! Destination model: a place a traveler can visit

use serde::{Deserialize, Serialize};

use crate::models::taxonomy::{Category, Region};

/// Marker coordinates in decimal degrees. Only ever handed to the external
/// map collaborator; no projection or distance math happens on our side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A destination record. Created once at startup from catalog data and never
/// mutated; identity is the `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub country: String,
    pub region: Region,
    pub category: Category,
    /// Starting price in whole rupees. Currency is presentation-only and not
    /// part of the schema.
    pub price: u32,
    /// Aggregate rating on a 0-5 scale.
    pub rating: f32,
    pub duration: String,
    pub coordinates: Coordinates,
    pub description: String,
    pub highlights: Vec<String>,
    pub activities: Vec<String>,
    pub included: Vec<String>,
    pub image: String,
    pub best_time: String,
    /// Shown on the home page featured rail.
    #[serde(default)]
    pub featured: bool,
}

impl Destination {
    /// Whether this record is related to `other` for the detail-page
    /// "you may also like" rail: same region or same category.
    #[must_use]
    pub fn is_similar_to(&self, other: &Destination) -> bool {
        self.id != other.id && (self.region == other.region || self.category == other.category)
    }
}
