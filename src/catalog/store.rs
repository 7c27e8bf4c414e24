//! Catalog store
//!
//! Owns the destination and package collections. The catalog is built once
//! at startup from data compiled into the binary, validated, and never
//! mutated afterwards. Views and handlers receive it as an injected
//! read-only dependency so tests can substitute fixture catalogs.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, info};

use crate::catalog::filter::MarketFilter;
use crate::error::FlydaddyError;
use crate::models::{Destination, Market, Package};

const DESTINATIONS_JSON: &str = include_str!("../data/destinations.json");
const PACKAGES_JSON: &str = include_str!("../data/packages.json");

/// Catalog data files group records by market.
#[derive(Debug, Deserialize)]
struct MarketSplit<T> {
    indian: Vec<T>,
    international: Vec<T>,
}

/// The immutable destination and package collections, indexed by id.
#[derive(Debug)]
pub struct Catalog {
    indian_destinations: Vec<Destination>,
    international_destinations: Vec<Destination>,
    indian_packages: Vec<Package>,
    international_packages: Vec<Package>,
    destination_index: HashMap<String, (Market, usize)>,
    package_index: HashMap<String, (Market, usize)>,
}

impl Catalog {
    /// Build a catalog from already-parsed collections, validating every
    /// record. Insertion order is preserved per market.
    pub fn from_collections(
        indian_destinations: Vec<Destination>,
        international_destinations: Vec<Destination>,
        indian_packages: Vec<Package>,
        international_packages: Vec<Package>,
    ) -> Result<Self, FlydaddyError> {
        let mut destination_index = HashMap::new();
        for (market, destinations) in [
            (Market::Indian, &indian_destinations),
            (Market::International, &international_destinations),
        ] {
            for (position, destination) in destinations.iter().enumerate() {
                validate_destination(destination)?;
                if destination_index
                    .insert(destination.id.clone(), (market, position))
                    .is_some()
                {
                    return Err(FlydaddyError::catalog(format!(
                        "duplicate destination id '{}'",
                        destination.id
                    )));
                }
            }
        }

        let mut package_index = HashMap::new();
        for (market, packages) in [
            (Market::Indian, &indian_packages),
            (Market::International, &international_packages),
        ] {
            for (position, package) in packages.iter().enumerate() {
                validate_package(package)?;
                if package_index
                    .insert(package.id.clone(), (market, position))
                    .is_some()
                {
                    return Err(FlydaddyError::catalog(format!(
                        "duplicate package id '{}'",
                        package.id
                    )));
                }
            }
        }

        debug!(
            destinations = destination_index.len(),
            packages = package_index.len(),
            "catalog collections validated"
        );

        Ok(Catalog {
            indian_destinations,
            international_destinations,
            indian_packages,
            international_packages,
            destination_index,
            package_index,
        })
    }

    /// Load the catalog compiled into the binary.
    pub fn load_builtin() -> Result<Self, FlydaddyError> {
        let destinations: MarketSplit<Destination> = serde_json::from_str(DESTINATIONS_JSON)
            .map_err(|e| FlydaddyError::catalog(format!("destinations data: {e}")))?;
        let packages: MarketSplit<Package> = serde_json::from_str(PACKAGES_JSON)
            .map_err(|e| FlydaddyError::catalog(format!("packages data: {e}")))?;

        let catalog = Self::from_collections(
            destinations.indian,
            destinations.international,
            packages.indian,
            packages.international,
        )?;

        info!(
            destinations = catalog.destination_count(),
            packages = catalog.package_count(),
            "loaded built-in catalog"
        );
        Ok(catalog)
    }

    /// The destination collection for a market, insertion order preserved.
    /// `All` is the Indian collection followed by the international one.
    #[must_use]
    pub fn destinations(&self, market: MarketFilter) -> Vec<&Destination> {
        match market {
            MarketFilter::All => self
                .indian_destinations
                .iter()
                .chain(self.international_destinations.iter())
                .collect(),
            MarketFilter::Only(Market::Indian) => self.indian_destinations.iter().collect(),
            MarketFilter::Only(Market::International) => {
                self.international_destinations.iter().collect()
            }
        }
    }

    /// The package collection for a market, insertion order preserved.
    #[must_use]
    pub fn packages(&self, market: MarketFilter) -> Vec<&Package> {
        match market {
            MarketFilter::All => self
                .indian_packages
                .iter()
                .chain(self.international_packages.iter())
                .collect(),
            MarketFilter::Only(Market::Indian) => self.indian_packages.iter().collect(),
            MarketFilter::Only(Market::International) => {
                self.international_packages.iter().collect()
            }
        }
    }

    /// Indexed lookup. A miss is `None`; the detail view redirects to the
    /// listing page on a miss instead of failing.
    #[must_use]
    pub fn destination_by_id(&self, id: &str) -> Option<&Destination> {
        let (market, position) = self.destination_index.get(id)?;
        match market {
            Market::Indian => self.indian_destinations.get(*position),
            Market::International => self.international_destinations.get(*position),
        }
    }

    /// Indexed lookup, same miss contract as [`Catalog::destination_by_id`].
    #[must_use]
    pub fn package_by_id(&self, id: &str) -> Option<&Package> {
        let (market, position) = self.package_index.get(id)?;
        match market {
            Market::Indian => self.indian_packages.get(*position),
            Market::International => self.international_packages.get(*position),
        }
    }

    #[must_use]
    pub fn destination_count(&self) -> usize {
        self.destination_index.len()
    }

    #[must_use]
    pub fn package_count(&self) -> usize {
        self.package_index.len()
    }
}

fn validate_destination(destination: &Destination) -> Result<(), FlydaddyError> {
    if destination.id.is_empty() {
        return Err(FlydaddyError::catalog("destination with empty id"));
    }
    if destination.name.is_empty() {
        return Err(FlydaddyError::catalog(format!(
            "destination '{}' has an empty name",
            destination.id
        )));
    }
    if !(0.0..=5.0).contains(&destination.rating) {
        return Err(FlydaddyError::catalog(format!(
            "destination '{}' rating {} is outside 0-5",
            destination.id, destination.rating
        )));
    }
    Ok(())
}

fn validate_package(package: &Package) -> Result<(), FlydaddyError> {
    if package.id.is_empty() {
        return Err(FlydaddyError::catalog("package with empty id"));
    }
    if package.title.is_empty() {
        return Err(FlydaddyError::catalog(format!(
            "package '{}' has an empty title",
            package.id
        )));
    }
    if !(0.0..=5.0).contains(&package.rating) {
        return Err(FlydaddyError::catalog(format!(
            "package '{}' rating {} is outside 0-5",
            package.id, package.rating
        )));
    }
    if package.price > package.original_price {
        return Err(FlydaddyError::catalog(format!(
            "package '{}' price {} exceeds original price {}",
            package.id, package.price, package.original_price
        )));
    }
    for (position, day) in package.itinerary.iter().enumerate() {
        let expected = u32::try_from(position)
            .map_err(|_| FlydaddyError::catalog("itinerary too long"))?
            + 1;
        if day.day != expected {
            return Err(FlydaddyError::catalog(format!(
                "package '{}' itinerary day {} out of sequence (expected {expected})",
                package.id, day.day
            )));
        }
    }
    Ok(())
}
