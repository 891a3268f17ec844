use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fare bracket for a single route, in rand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareRange {
    pub min: u32,
    pub max: u32,
}

/// One curated minibus-taxi route between two places.
///
/// Routes are identified by their `(from, to)` pair; duplicates are allowed
/// and the first one in document order wins during matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub from: String,
    pub to: String,
    #[serde(rename = "taxiRank")]
    pub taxi_rank: String,
    pub fare: FareRange,
    pub duration: String,
    pub frequency: String,
    pub route_description: String,
    #[serde(default)]
    pub safety_tips: Vec<String>,
}

/// A physical taxi rank, grouped under a city key in the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxiRank {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub destinations: Vec<String>,
    #[serde(rename = "operatingHours")]
    pub operating_hours: String,
    #[serde(default)]
    pub landmarks: Vec<String>,
}

/// Human-readable distance bracket and its fare text, e.g.
/// `{ "range": "0-15km", "fare": "R10-R20" }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareTier {
    pub range: String,
    pub fare: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareTiers {
    pub short_distance: FareTier,
    pub medium_distance: FareTier,
    pub long_distance: FareTier,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareStructure {
    #[serde(default)]
    pub factors: Vec<String>,
    pub typical_ranges: FareTiers,
    #[serde(default)]
    pub payment_tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CulturalContext {
    #[serde(default)]
    pub etiquette: Vec<String>,
}

/// Root of the persisted dataset document.
///
/// Every top-level section may be absent; operations depending on a missing
/// section degrade to an empty result rather than failing. City and
/// guideline mappings are `BTreeMap`s, so iteration order is key order and
/// deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBase {
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default, rename = "taxiRanks")]
    pub taxi_ranks: BTreeMap<String, Vec<TaxiRank>>,
    #[serde(default, rename = "safetyGuidelines")]
    pub safety_guidelines: BTreeMap<String, Vec<String>>,
    #[serde(rename = "fareStructure")]
    pub fare_structure: Option<FareStructure>,
    pub cultural_context: Option<CulturalContext>,
}

/// The inbound query triple: everything the caller layer hands the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextQuery {
    pub user_location: Option<String>,
    pub destination: Option<String>,
    pub message: Option<String>,
}

impl ContextQuery {
    pub fn new(
        user_location: Option<impl Into<String>>,
        destination: Option<impl Into<String>>,
        message: Option<impl Into<String>>,
    ) -> Self {
        Self {
            user_location: user_location.map(Into::into),
            destination: destination.map(Into::into),
            message: message.map(Into::into),
        }
    }
}
