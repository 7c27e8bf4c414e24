//! Selection broker
//!
//! Translates user-initiated selection events (map marker clicks, card
//! clicks) into navigation intents, and tracks the transient hover state the
//! map views keep. The broker never performs navigation itself; it only
//! emits the intent for the routing collaborator.

use crate::models::{Destination, Package};

/// A navigation request carrying the selected entity's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    DestinationDetail { id: String },
    PackageDetail { id: String },
}

impl NavigationIntent {
    /// The id of the entity the intent points at.
    #[must_use]
    pub fn entity_id(&self) -> &str {
        match self {
            NavigationIntent::DestinationDetail { id } | NavigationIntent::PackageDetail { id } => {
                id
            }
        }
    }

    /// The frontend route the navigation collaborator should transition to.
    #[must_use]
    pub fn route(&self) -> String {
        match self {
            NavigationIntent::DestinationDetail { id } => format!("/destination/{id}"),
            NavigationIntent::PackageDetail { id } => format!("/packages#{id}"),
        }
    }
}

/// Maps selection events to navigation intents. Emitting the intent is the
/// only effect; the same broker serves grid cards and map markers.
pub struct SelectionBroker;

impl SelectionBroker {
    #[must_use]
    pub fn select_destination(destination: &Destination) -> NavigationIntent {
        NavigationIntent::DestinationDetail {
            id: destination.id.clone(),
        }
    }

    #[must_use]
    pub fn select_package(package: &Package) -> NavigationIntent {
        NavigationIntent::PackageDetail {
            id: package.id.clone(),
        }
    }
}

/// Single-selection hover tracker owned by one view instance.
///
/// At most one entity is hovered at a time: entering a new hover replaces
/// the prior one and leaving clears it. No debouncing is applied, so rapid
/// pointer movement produces one transition per enter/leave. The key is
/// generic so the same tracker serves marker hover (entity id) and
/// country-boundary hover (region name).
#[derive(Debug, Clone, Default)]
pub struct HoverState<K> {
    current: Option<K>,
}

impl<K> HoverState<K> {
    #[must_use]
    pub fn new() -> Self {
        HoverState { current: None }
    }

    /// Pointer entered `key`; any prior hover is replaced.
    pub fn enter(&mut self, key: K) {
        self.current = Some(key);
    }

    /// Pointer left the hovered entity.
    pub fn leave(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Coordinates, Region};

    fn destination(id: &str) -> Destination {
        Destination {
            id: id.to_string(),
            name: "Goa".to_string(),
            country: "India".to_string(),
            region: Region::WestIndia,
            category: Category::BeachAdventure,
            price: 18_999,
            rating: 4.7,
            duration: "5 Days / 4 Nights".to_string(),
            coordinates: Coordinates {
                latitude: 15.2993,
                longitude: 74.124,
            },
            description: String::new(),
            highlights: vec![],
            activities: vec![],
            included: vec![],
            image: "/images/destinations/goa-beach.jpg".to_string(),
            best_time: "November to February".to_string(),
            featured: false,
        }
    }

    #[test]
    fn test_destination_selection_carries_id_and_route() {
        let intent = SelectionBroker::select_destination(&destination("goa-beach"));
        assert_eq!(intent.entity_id(), "goa-beach");
        assert_eq!(intent.route(), "/destination/goa-beach");
    }

    #[test]
    fn test_hover_replaces_without_leave() {
        let mut hover = HoverState::new();
        hover.enter("goa-beach");
        hover.enter("maldives-beach");
        assert_eq!(hover.current(), Some(&"maldives-beach"));
    }

    #[test]
    fn test_leave_clears_hover() {
        let mut hover = HoverState::new();
        hover.enter("goa-beach");
        hover.leave();
        assert!(hover.current().is_none());
    }

    #[test]
    fn test_leave_without_enter_is_a_no_op() {
        let mut hover: HoverState<&str> = HoverState::new();
        hover.leave();
        assert!(hover.current().is_none());
    }

    #[test]
    fn test_hover_tracks_region_names_too() {
        let mut hover = HoverState::new();
        hover.enter(Region::Europe.name().to_string());
        assert_eq!(hover.current().map(String::as_str), Some("Europe"));
    }
}
