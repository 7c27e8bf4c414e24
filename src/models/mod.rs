//! Data models for the Flydaddy catalog
//!
//! This module contains the core domain models organized by concern:
//! - Taxonomy: closed vocabularies used as filter keys (market, region, category)
//! - Destination: a place a traveler can visit, with descriptive and pricing metadata
//! - Package: a bundled, itinerary-based tour product

pub mod destination;
pub mod package;
pub mod taxonomy;

// Re-export all public types for convenient access
pub use destination::{Coordinates, Destination};
pub use package::{ItineraryDay, Package};
pub use taxonomy::{Category, Market, Region};
