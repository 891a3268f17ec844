use std::sync::Arc;

use mzansi_core::{FareStructure, FareTier};
use serde::Serialize;

use crate::store::KnowledgeStore;

/// Result of a fare lookup: either the whole schedule or one distance tier.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FareInfo {
    Schedule(FareStructure),
    Tier(FareTier),
}

/// Resolves fare information from the fare-tier table.
#[derive(Clone)]
pub struct FareEstimator {
    store: Arc<KnowledgeStore>,
}

impl FareEstimator {
    pub fn new(store: Arc<KnowledgeStore>) -> Self {
        Self { store }
    }

    /// Without a distance, the full fare schedule. With one, the tier for
    /// that distance: `d <= 15` short, `15 < d <= 30` medium, `d > 30`
    /// long (boundaries inclusive on the lower tier). `None` when the
    /// store is unloaded or the dataset has no fare structure.
    pub fn fare_info(&self, distance_km: Option<f64>) -> Option<FareInfo> {
        let base = self.store.snapshot()?;
        let structure = base.fare_structure.as_ref()?;

        match distance_km {
            None => Some(FareInfo::Schedule(structure.clone())),
            Some(distance) => {
                let tiers = &structure.typical_ranges;
                let tier = if distance <= 15.0 {
                    &tiers.short_distance
                } else if distance <= 30.0 {
                    &tiers.medium_distance
                } else {
                    &tiers.long_distance
                };
                Some(FareInfo::Tier(tier.clone()))
            }
        }
    }
}
