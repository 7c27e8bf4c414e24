//! HTTP API consumed by the site frontend
//!
//! Thin JSON boundary over the catalog: listings, detail lookups, the map
//! marker feed, the region vocabulary and contact dispatch links. Detail
//! lookups for unknown ids answer with a redirect to the matching listing
//! page; bad filter tokens are a 400, while an in-vocabulary filter that
//! matches nothing is an ordinary empty listing.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Json, Redirect},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{
    Catalog, DestinationQuery, PackageQuery, SelectionBroker, featured_destinations,
    filter_destinations, filter_packages, similar_destinations,
};
use crate::config::ContactConfig;
use crate::contact::{self, ContactLinks, DEFAULT_ENQUIRY_MESSAGE};
use crate::models::{Coordinates, Destination, ItineraryDay, Package, Region};

/// How many related destinations the detail view shows.
const SIMILAR_LIMIT: usize = 3;

/// Shared state injected into every handler. The catalog is an immutable
/// dependency handed in at startup, never a module global.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    contact: ContactConfig,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, contact: ContactConfig) -> Self {
        Self { catalog, contact }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDestination {
    pub id: String,
    pub name: String,
    pub country: String,
    pub region: String,
    pub category: String,
    pub price: u32,
    pub rating: f32,
    pub duration: String,
    pub image: String,
    pub best_time: String,
    pub featured: bool,
}

impl From<&Destination> for ApiDestination {
    fn from(destination: &Destination) -> Self {
        Self {
            id: destination.id.clone(),
            name: destination.name.clone(),
            country: destination.country.clone(),
            region: destination.region.to_string(),
            category: destination.category.to_string(),
            price: destination.price,
            rating: destination.rating,
            duration: destination.duration.clone(),
            image: destination.image.clone(),
            best_time: destination.best_time.clone(),
            featured: destination.featured,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDestinationDetail {
    pub id: String,
    pub name: String,
    pub country: String,
    pub region: String,
    pub category: String,
    pub price: u32,
    pub rating: f32,
    pub duration: String,
    pub image: String,
    pub best_time: String,
    pub coordinates: Coordinates,
    pub description: String,
    pub highlights: Vec<String>,
    pub activities: Vec<String>,
    pub included: Vec<String>,
    /// "You may also like" rail: same region or category, capped.
    pub similar: Vec<ApiDestination>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPackage {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub duration: String,
    pub group_size: String,
    pub rating: f32,
    pub reviews: u32,
    pub price: u32,
    pub original_price: u32,
    pub savings: u32,
    pub image: String,
    pub category: String,
    pub difficulty: String,
}

impl From<&Package> for ApiPackage {
    fn from(package: &Package) -> Self {
        Self {
            id: package.id.clone(),
            title: package.title.clone(),
            subtitle: package.subtitle.clone(),
            duration: package.duration.clone(),
            group_size: package.group_size.clone(),
            rating: package.rating,
            reviews: package.reviews,
            price: package.price,
            original_price: package.original_price,
            savings: package.savings(),
            image: package.image.clone(),
            category: package.category.to_string(),
            difficulty: package.difficulty.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPackageDetail {
    #[serde(flatten)]
    pub summary: ApiPackage,
    pub features: Vec<String>,
    pub itinerary: Vec<ItineraryDay>,
    pub included: Vec<String>,
    pub excluded: Vec<String>,
}

impl From<&Package> for ApiPackageDetail {
    fn from(package: &Package) -> Self {
        Self {
            summary: ApiPackage::from(package),
            features: package.features.clone(),
            itinerary: package.itinerary.clone(),
            included: package.included.clone(),
            excluded: package.excluded.clone(),
        }
    }
}

/// One map pin. Geometry stays with the external map collaborator; we only
/// supply the coordinates, the tooltip fields and the route a click
/// navigates to.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMarker {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price: u32,
    pub rating: f32,
    pub route: String,
}

impl From<&Destination> for ApiMarker {
    fn from(destination: &Destination) -> Self {
        Self {
            id: destination.id.clone(),
            name: destination.name.clone(),
            latitude: destination.coordinates.latitude,
            longitude: destination.coordinates.longitude,
            price: destination.price,
            rating: destination.rating,
            route: SelectionBroker::select_destination(destination).route(),
        }
    }
}

/// Raw listing query parameters. Tokens are validated against the closed
/// vocabularies before any filtering happens.
#[derive(Debug, Default, Deserialize)]
struct ListingParams {
    market: Option<String>,
    region: Option<String>,
    sort: Option<String>,
}

impl ListingParams {
    fn destination_query(&self) -> Result<DestinationQuery, String> {
        let mut query = DestinationQuery::default();
        if let Some(market) = &self.market {
            query.market = market.parse()?;
        }
        if let Some(region) = &self.region {
            query.region = region.parse()?;
        }
        if let Some(sort) = &self.sort {
            query.sort = sort.parse()?;
        }
        Ok(query)
    }

    fn package_query(&self) -> Result<PackageQuery, String> {
        if self.region.is_some() {
            return Err("packages carry no region tag".to_string());
        }
        let mut query = PackageQuery::default();
        if let Some(market) = &self.market {
            query.market = market.parse()?;
        }
        if let Some(sort) = &self.sort {
            query.sort = sort.parse()?;
        }
        Ok(query)
    }
}

#[derive(Debug, Default, Deserialize)]
struct ContactParams {
    message: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/destinations", get(list_destinations))
        .route("/destinations/featured", get(featured_rail))
        .route("/destinations/{id}", get(get_destination))
        .route("/packages", get(list_packages))
        .route("/packages/{id}", get(get_package))
        .route("/regions", get(list_regions))
        .route("/map/markers", get(map_markers))
        .route("/contact/links", get(get_contact_links))
        .with_state(state)
}

async fn list_destinations(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Result<Json<Vec<ApiDestination>>, (StatusCode, String)> {
    let query = params
        .destination_query()
        .map_err(|message| (StatusCode::BAD_REQUEST, message))?;
    let listing = filter_destinations(&state.catalog, &query);
    debug!(results = listing.len(), ?query, "destinations listing");
    Ok(Json(listing.into_iter().map(ApiDestination::from).collect()))
}

async fn featured_rail(State(state): State<AppState>) -> Json<Vec<ApiDestination>> {
    let listing = featured_destinations(&state.catalog);
    Json(listing.into_iter().map(ApiDestination::from).collect())
}

async fn get_destination(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiDestinationDetail>, Redirect> {
    let Some(destination) = state.catalog.destination_by_id(&id) else {
        debug!(%id, "destination lookup miss, redirecting to listing");
        return Err(Redirect::to("/destinations"));
    };

    let similar = similar_destinations(&state.catalog, destination, SIMILAR_LIMIT)
        .into_iter()
        .map(ApiDestination::from)
        .collect();

    Ok(Json(ApiDestinationDetail {
        id: destination.id.clone(),
        name: destination.name.clone(),
        country: destination.country.clone(),
        region: destination.region.to_string(),
        category: destination.category.to_string(),
        price: destination.price,
        rating: destination.rating,
        duration: destination.duration.clone(),
        image: destination.image.clone(),
        best_time: destination.best_time.clone(),
        coordinates: destination.coordinates,
        description: destination.description.clone(),
        highlights: destination.highlights.clone(),
        activities: destination.activities.clone(),
        included: destination.included.clone(),
        similar,
    }))
}

async fn list_packages(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Result<Json<Vec<ApiPackage>>, (StatusCode, String)> {
    let query = params
        .package_query()
        .map_err(|message| (StatusCode::BAD_REQUEST, message))?;
    let listing = filter_packages(&state.catalog, &query);
    debug!(results = listing.len(), ?query, "packages listing");
    Ok(Json(listing.into_iter().map(ApiPackage::from).collect()))
}

async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiPackageDetail>, Redirect> {
    let Some(package) = state.catalog.package_by_id(&id) else {
        debug!(%id, "package lookup miss, redirecting to listing");
        return Err(Redirect::to("/packages"));
    };
    Ok(Json(ApiPackageDetail::from(package)))
}

/// The region chip rail, "All" first, then every region in display order.
async fn list_regions() -> Json<Vec<String>> {
    let mut regions = vec!["All".to_string()];
    regions.extend(Region::ALL.iter().map(|region| region.name().to_string()));
    Json(regions)
}

async fn map_markers(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Result<Json<Vec<ApiMarker>>, (StatusCode, String)> {
    let query = params
        .destination_query()
        .map_err(|message| (StatusCode::BAD_REQUEST, message))?;
    let listing = filter_destinations(&state.catalog, &query);
    Ok(Json(listing.into_iter().map(ApiMarker::from).collect()))
}

async fn get_contact_links(
    State(state): State<AppState>,
    Query(params): Query<ContactParams>,
) -> Result<Json<ContactLinks>, (StatusCode, String)> {
    let message = params.message.as_deref().unwrap_or(DEFAULT_ENQUIRY_MESSAGE);
    let links = contact::enquiry_links(&state.contact, message)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.user_message()))?;
    Ok(Json(links))
}
