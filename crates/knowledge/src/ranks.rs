use std::sync::Arc;

use mzansi_core::matching::{bidirectional_contains, city_key};
use mzansi_core::TaxiRank;

use crate::store::KnowledgeStore;

/// Finds taxi ranks relevant to a location string, optionally scoped to one
/// city.
#[derive(Clone)]
pub struct RankLocator {
    store: Arc<KnowledgeStore>,
}

impl RankLocator {
    pub fn new(store: Arc<KnowledgeStore>) -> Self {
        Self { store }
    }

    /// All ranks whose own location, or any listed destination, matches the
    /// query under two-way containment. With a `city`, only that city's
    /// list is searched (an unknown city yields nothing); otherwise every
    /// city's ranks are scanned in map order with per-city order preserved.
    /// Results keep source order; an unloaded store yields an empty list.
    pub fn find_nearby_ranks(&self, location: &str, city: Option<&str>) -> Vec<TaxiRank> {
        let Some(base) = self.store.snapshot() else {
            return Vec::new();
        };

        let candidates: Vec<&TaxiRank> = match city {
            Some(city) => base
                .taxi_ranks
                .get(&city_key(city))
                .map(|ranks| ranks.iter().collect())
                .unwrap_or_default(),
            None => base.taxi_ranks.values().flatten().collect(),
        };

        candidates
            .into_iter()
            .filter(|rank| rank_matches(rank, location))
            .cloned()
            .collect()
    }
}

fn rank_matches(rank: &TaxiRank, location: &str) -> bool {
    bidirectional_contains(&rank.location, location)
        || rank
            .destinations
            .iter()
            .any(|destination| bidirectional_contains(destination, location))
}
