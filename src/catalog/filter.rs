//! Filter engine
//!
//! Pure derivation of a display list from the three listing criteria:
//! market, region and sort key. Filtering never mutates the catalog and is
//! idempotent; a criteria combination matching nothing yields an empty list,
//! which the views render as a valid "no results" state.

use std::cmp::Reverse;
use std::str::FromStr;

use crate::catalog::store::Catalog;
use crate::models::{Destination, Market, Package, Region};

/// The market axis of a listing: everything, or one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarketFilter {
    #[default]
    All,
    Only(Market),
}

impl FromStr for MarketFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(MarketFilter::All),
            "indian" => Ok(MarketFilter::Only(Market::Indian)),
            "international" => Ok(MarketFilter::Only(Market::International)),
            other => Err(format!(
                "unknown market '{other}' (expected all, indian or international)"
            )),
        }
    }
}

/// The region axis of a listing. `All` is the identity filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionFilter {
    #[default]
    All,
    Only(Region),
}

impl FromStr for RegionFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(RegionFilter::All);
        }
        Region::from_str(s).map(RegionFilter::Only)
    }
}

/// Listing sort order. `Popular` keeps catalog insertion order: no
/// popularity metric exists in the data, so the default sort is the curated
/// order the catalog ships in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Popular,
    PriceLowToHigh,
    PriceHighToLow,
    RatingHighToLow,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" => Ok(SortKey::Popular),
            "price-low" => Ok(SortKey::PriceLowToHigh),
            "price-high" => Ok(SortKey::PriceHighToLow),
            "rating" => Ok(SortKey::RatingHighToLow),
            other => Err(format!(
                "unknown sort '{other}' (expected popular, price-low, price-high or rating)"
            )),
        }
    }
}

/// Criteria for the destinations listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DestinationQuery {
    pub market: MarketFilter,
    pub region: RegionFilter,
    pub sort: SortKey,
}

/// Criteria for the packages listing. Packages carry no region tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackageQuery {
    pub market: MarketFilter,
    pub sort: SortKey,
}

/// Anything the sort keys can order.
pub trait Listed {
    fn price(&self) -> u32;
    fn rating(&self) -> f32;
}

impl Listed for Destination {
    fn price(&self) -> u32 {
        self.price
    }

    fn rating(&self) -> f32 {
        self.rating
    }
}

impl Listed for Package {
    fn price(&self) -> u32 {
        self.price
    }

    fn rating(&self) -> f32 {
        self.rating
    }
}

/// Derive the destinations display list. Composition order is fixed and
/// contractual: market narrows the base set, region filters it, sort orders
/// the result. Changing the order would change tie behavior.
#[must_use]
pub fn filter_destinations<'a>(
    catalog: &'a Catalog,
    query: &DestinationQuery,
) -> Vec<&'a Destination> {
    let mut listing = catalog.destinations(query.market);
    if let RegionFilter::Only(region) = query.region {
        listing.retain(|destination| destination.region == region);
    }
    sort_listing(&mut listing, query.sort);
    listing
}

/// Derive the packages display list. Same composition contract as
/// [`filter_destinations`], minus the region axis.
#[must_use]
pub fn filter_packages<'a>(catalog: &'a Catalog, query: &PackageQuery) -> Vec<&'a Package> {
    let mut listing = catalog.packages(query.market);
    sort_listing(&mut listing, query.sort);
    listing
}

/// Destinations related to `subject` (same region or category), first
/// `limit` in insertion order. Backs the detail-page rail.
#[must_use]
pub fn similar_destinations<'a>(
    catalog: &'a Catalog,
    subject: &Destination,
    limit: usize,
) -> Vec<&'a Destination> {
    catalog
        .destinations(MarketFilter::All)
        .into_iter()
        .filter(|candidate| candidate.is_similar_to(subject))
        .take(limit)
        .collect()
}

/// Destinations flagged for the home-page featured rail, insertion order.
#[must_use]
pub fn featured_destinations(catalog: &Catalog) -> Vec<&Destination> {
    catalog
        .destinations(MarketFilter::All)
        .into_iter()
        .filter(|destination| destination.featured)
        .collect()
}

// All sorts are stable so that equal keys keep catalog insertion order.
fn sort_listing<T: Listed>(listing: &mut [&T], sort: SortKey) {
    match sort {
        SortKey::Popular => {}
        SortKey::PriceLowToHigh => listing.sort_by_key(|item| item.price()),
        SortKey::PriceHighToLow => listing.sort_by_key(|item| Reverse(item.price())),
        SortKey::RatingHighToLow => {
            listing.sort_by(|a, b| b.rating().total_cmp(&a.rating()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Coordinates};
    use rstest::rstest;

    fn destination(
        id: &str,
        region: Region,
        category: Category,
        price: u32,
        rating: f32,
    ) -> Destination {
        Destination {
            id: id.to_string(),
            name: id.to_string(),
            country: "India".to_string(),
            region,
            category,
            price,
            rating,
            duration: "3 Days / 2 Nights".to_string(),
            coordinates: Coordinates {
                latitude: 20.0,
                longitude: 77.0,
            },
            description: String::new(),
            highlights: vec![],
            activities: vec![],
            included: vec![],
            image: "/images/test.jpg".to_string(),
            best_time: "October to March".to_string(),
            featured: false,
        }
    }

    fn fixture_catalog() -> Catalog {
        let goa = destination(
            "goa-beach",
            Region::WestIndia,
            Category::BeachAdventure,
            18_999,
            4.7,
        );
        let udaipur = destination(
            "udaipur-lake-city",
            Region::WestIndia,
            Category::Heritage,
            16_999,
            4.8,
        );
        let agra = destination(
            "agra-taj-mahal",
            Region::NorthIndia,
            Category::Heritage,
            12_999,
            4.9,
        );
        let paris = destination("paris-eiffel", Region::Europe, Category::Cultural, 99_999, 4.8);
        let dubai = destination(
            "dubai-burj-khalifa",
            Region::MiddleEast,
            Category::Luxury,
            49_999,
            4.9,
        );

        Catalog::from_collections(vec![goa, udaipur, agra], vec![paris, dubai], vec![], vec![])
            .unwrap()
    }

    fn ids(listing: &[&Destination]) -> Vec<String> {
        listing.iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn test_default_query_returns_everything_in_order() {
        let catalog = fixture_catalog();
        let listing = filter_destinations(&catalog, &DestinationQuery::default());
        assert_eq!(
            ids(&listing),
            vec![
                "goa-beach",
                "udaipur-lake-city",
                "agra-taj-mahal",
                "paris-eiffel",
                "dubai-burj-khalifa"
            ]
        );
    }

    #[test]
    fn test_market_narrows_before_region_filters() {
        let catalog = fixture_catalog();

        let query = DestinationQuery {
            market: MarketFilter::Only(Market::Indian),
            region: RegionFilter::Only(Region::WestIndia),
            sort: SortKey::Popular,
        };
        let listing = filter_destinations(&catalog, &query);
        assert_eq!(ids(&listing), vec!["goa-beach", "udaipur-lake-city"]);

        // Same region through the international collection: nothing matches,
        // and that is a displayable state rather than an error.
        let query = DestinationQuery {
            market: MarketFilter::Only(Market::International),
            region: RegionFilter::Only(Region::WestIndia),
            sort: SortKey::Popular,
        };
        assert!(filter_destinations(&catalog, &query).is_empty());
    }

    #[test]
    fn test_goa_beach_scenario() {
        let catalog = fixture_catalog();

        let domestic_west = DestinationQuery {
            market: MarketFilter::Only(Market::Indian),
            region: RegionFilter::Only(Region::WestIndia),
            sort: SortKey::Popular,
        };
        assert!(
            filter_destinations(&catalog, &domestic_west)
                .iter()
                .any(|d| d.id == "goa-beach")
        );

        let international_all = DestinationQuery {
            market: MarketFilter::Only(Market::International),
            region: RegionFilter::All,
            sort: SortKey::Popular,
        };
        assert!(
            filter_destinations(&catalog, &international_all)
                .iter()
                .all(|d| d.id != "goa-beach")
        );
    }

    #[test]
    fn test_price_sorts_are_exact_reverses_without_ties() {
        let catalog = fixture_catalog();

        let ascending = filter_destinations(
            &catalog,
            &DestinationQuery {
                sort: SortKey::PriceLowToHigh,
                ..DestinationQuery::default()
            },
        );
        let descending = filter_destinations(
            &catalog,
            &DestinationQuery {
                sort: SortKey::PriceHighToLow,
                ..DestinationQuery::default()
            },
        );

        let mut reversed = ids(&descending);
        reversed.reverse();
        assert_eq!(ids(&ascending), reversed);
    }

    #[test]
    fn test_rating_sort_is_stable_on_ties() {
        let catalog = fixture_catalog();
        let listing = filter_destinations(
            &catalog,
            &DestinationQuery {
                sort: SortKey::RatingHighToLow,
                ..DestinationQuery::default()
            },
        );
        // agra and dubai tie at 4.9; agra entered the catalog first.
        // udaipur and paris tie at 4.8 the same way.
        assert_eq!(
            ids(&listing),
            vec![
                "agra-taj-mahal",
                "dubai-burj-khalifa",
                "udaipur-lake-city",
                "paris-eiffel",
                "goa-beach"
            ]
        );
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let catalog = fixture_catalog();
        let query = DestinationQuery {
            market: MarketFilter::All,
            region: RegionFilter::Only(Region::WestIndia),
            sort: SortKey::PriceLowToHigh,
        };
        let first = ids(&filter_destinations(&catalog, &query));
        let second = ids(&filter_destinations(&catalog, &query));
        assert_eq!(first, second);
    }

    #[test]
    fn test_similar_destinations_excludes_subject_and_respects_limit() {
        let catalog = fixture_catalog();
        let goa = catalog.destination_by_id("goa-beach").unwrap();

        let similar = similar_destinations(&catalog, goa, 3);
        assert!(similar.iter().all(|d| d.id != "goa-beach"));
        assert!(similar.len() <= 3);
        // udaipur shares the region; nothing else shares region or category.
        assert_eq!(ids(&similar), vec!["udaipur-lake-city"]);
    }

    #[test]
    fn test_featured_destinations_only_returns_flagged_records() {
        let mut goa = destination(
            "goa-beach",
            Region::WestIndia,
            Category::BeachAdventure,
            18_999,
            4.7,
        );
        goa.featured = true;
        let agra = destination(
            "agra-taj-mahal",
            Region::NorthIndia,
            Category::Heritage,
            12_999,
            4.9,
        );

        let catalog = Catalog::from_collections(vec![goa, agra], vec![], vec![], vec![]).unwrap();
        let featured = featured_destinations(&catalog);
        assert_eq!(ids(&featured), vec!["goa-beach"]);
    }

    #[rstest]
    #[case("all", MarketFilter::All)]
    #[case("indian", MarketFilter::Only(Market::Indian))]
    #[case("international", MarketFilter::Only(Market::International))]
    fn test_market_filter_parses(#[case] token: &str, #[case] expected: MarketFilter) {
        assert_eq!(token.parse::<MarketFilter>().unwrap(), expected);
    }

    #[rstest]
    #[case("popular", SortKey::Popular)]
    #[case("price-low", SortKey::PriceLowToHigh)]
    #[case("price-high", SortKey::PriceHighToLow)]
    #[case("rating", SortKey::RatingHighToLow)]
    fn test_sort_key_parses(#[case] token: &str, #[case] expected: SortKey) {
        assert_eq!(token.parse::<SortKey>().unwrap(), expected);
    }

    #[rstest]
    #[case("domestic")]
    #[case("price-asc")]
    #[case("")]
    fn test_unknown_tokens_are_rejected(#[case] token: &str) {
        assert!(token.parse::<MarketFilter>().is_err());
        assert!(token.parse::<SortKey>().is_err());
    }

    #[test]
    fn test_region_filter_parses_display_names_and_all() {
        assert_eq!("All".parse::<RegionFilter>().unwrap(), RegionFilter::All);
        assert_eq!(
            "West India".parse::<RegionFilter>().unwrap(),
            RegionFilter::Only(Region::WestIndia)
        );
        assert!("Middle Earth".parse::<RegionFilter>().is_err());
    }
}
