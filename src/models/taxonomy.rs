//! Closed tagging vocabularies used as filter keys
//!
//! The catalog data tags every record with a market, a region and a category.
//! These are closed enumerations rather than free strings, so an unknown tag
//! is a load-time error instead of a silently empty filter result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which collection a record belongs to. Every record is in exactly one
/// market; the two collections are disjoint by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    Indian,
    International,
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Market::Indian => write!(f, "indian"),
            Market::International => write!(f, "international"),
        }
    }
}

/// Coarse geographic grouping tag used purely as a filter key, not a
/// geometric boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "North India")]
    NorthIndia,
    #[serde(rename = "South India")]
    SouthIndia,
    #[serde(rename = "West India")]
    WestIndia,
    #[serde(rename = "East India")]
    EastIndia,
    #[serde(rename = "Europe")]
    Europe,
    #[serde(rename = "Asia")]
    Asia,
    #[serde(rename = "Southeast Asia")]
    SoutheastAsia,
    #[serde(rename = "Middle East")]
    MiddleEast,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    #[serde(rename = "Oceania")]
    Oceania,
    #[serde(rename = "Africa")]
    Africa,
}

impl Region {
    /// Every region in the order the filter rail displays them.
    pub const ALL: [Region; 12] = [
        Region::NorthIndia,
        Region::SouthIndia,
        Region::WestIndia,
        Region::EastIndia,
        Region::Europe,
        Region::Asia,
        Region::SoutheastAsia,
        Region::MiddleEast,
        Region::NorthAmerica,
        Region::SouthAmerica,
        Region::Oceania,
        Region::Africa,
    ];

    /// The display name used by the site and in catalog data.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Region::NorthIndia => "North India",
            Region::SouthIndia => "South India",
            Region::WestIndia => "West India",
            Region::EastIndia => "East India",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::SoutheastAsia => "Southeast Asia",
            Region::MiddleEast => "Middle East",
            Region::NorthAmerica => "North America",
            Region::SouthAmerica => "South America",
            Region::Oceania => "Oceania",
            Region::Africa => "Africa",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .iter()
            .find(|region| region.name() == s)
            .copied()
            .ok_or_else(|| format!("unknown region '{s}'"))
    }
}

/// Descriptive theme tag shared by destinations and packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Beach & Adventure")]
    BeachAdventure,
    #[serde(rename = "Beach & Culture")]
    BeachCulture,
    #[serde(rename = "City & Culture")]
    CityCulture,
    #[serde(rename = "Cultural")]
    Cultural,
    #[serde(rename = "Heritage")]
    Heritage,
    #[serde(rename = "Adventure")]
    Adventure,
    #[serde(rename = "Nature & Wellness")]
    NatureWellness,
    #[serde(rename = "Luxury")]
    Luxury,
    #[serde(rename = "Luxury Beach")]
    LuxuryBeach,
}

impl Category {
    /// The display label used by the site and in catalog data.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Category::BeachAdventure => "Beach & Adventure",
            Category::BeachCulture => "Beach & Culture",
            Category::CityCulture => "City & Culture",
            Category::Cultural => "Cultural",
            Category::Heritage => "Heritage",
            Category::Adventure => "Adventure",
            Category::NatureWellness => "Nature & Wellness",
            Category::Luxury => "Luxury",
            Category::LuxuryBeach => "Luxury Beach",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
