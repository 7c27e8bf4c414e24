//! Catalog module
//!
//! Everything that backs the destination and package listings:
//! - Store: the immutable in-memory collections and id lookup
//! - Filter: pure derivation of a display list from market/region/sort criteria
//! - Selection: translating clicks and hovers into navigation intents

pub mod filter;
pub mod selection;
pub mod store;

// Re-export commonly used types from submodules
pub use filter::{
    DestinationQuery, MarketFilter, PackageQuery, RegionFilter, SortKey, featured_destinations,
    filter_destinations, filter_packages, similar_destinations,
};
pub use selection::{HoverState, NavigationIntent, SelectionBroker};
pub use store::Catalog;
