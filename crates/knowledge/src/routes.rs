use std::sync::Arc;

use mzansi_core::matching::bidirectional_contains;
use mzansi_core::Route;

use crate::store::KnowledgeStore;

/// Finds at most one curated route for an origin/destination pair.
#[derive(Clone)]
pub struct RouteMatcher {
    store: Arc<KnowledgeStore>,
}

impl RouteMatcher {
    pub fn new(store: Arc<KnowledgeStore>) -> Self {
        Self { store }
    }

    /// First route in stored order where both endpoints match the query
    /// under two-way containment. No scoring; first hit wins. Returns
    /// `None` when the store is unloaded.
    pub fn find_route(&self, from: &str, to: &str) -> Option<Route> {
        let base = self.store.snapshot()?;
        base.routes
            .iter()
            .find(|route| {
                bidirectional_contains(&route.from, from) && bidirectional_contains(&route.to, to)
            })
            .cloned()
    }
}
