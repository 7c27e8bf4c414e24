//! Flydaddy - travel agency catalog and enquiry service
//!
//! This library provides the core functionality behind the Flydaddy site:
//! the destination and tour package catalog, listing filters, selection
//! handling, contact dispatch links and the HTTP API that serves them.

pub mod api;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod models;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use catalog::{
    Catalog, DestinationQuery, HoverState, MarketFilter, NavigationIntent, PackageQuery,
    RegionFilter, SelectionBroker, SortKey,
};
pub use config::FlydaddyConfig;
pub use contact::ContactLinks;
pub use error::FlydaddyError;
pub use models::{Category, Coordinates, Destination, ItineraryDay, Market, Package, Region};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, FlydaddyError>;
