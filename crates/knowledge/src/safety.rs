use std::sync::Arc;

use mzansi_core::matching::is_night_hour;

use crate::store::KnowledgeStore;

const GENERAL_CATEGORY: &str = "general";
const NIGHT_TRAVEL_CATEGORY: &str = "night_travel";

/// Selects the applicable safety-tip set for a time of day and category.
#[derive(Clone)]
pub struct SafetyAdvisor {
    store: Arc<KnowledgeStore>,
}

impl SafetyAdvisor {
    pub fn new(store: Arc<KnowledgeStore>) -> Self {
        Self { store }
    }

    /// When `time_of_day` classifies as night and a `night_travel` set
    /// exists, returns the `general` tips (empty when absent) followed by
    /// the `night_travel` tips. Otherwise returns the set stored under
    /// `category` if that key exists -- even when its list is empty --
    /// falling back to `general`, falling back to nothing.
    pub fn safety_tips(&self, time_of_day: &str, category: &str) -> Vec<String> {
        let Some(base) = self.store.snapshot() else {
            return Vec::new();
        };
        let guidelines = &base.safety_guidelines;

        if is_night_hour(time_of_day) {
            if let Some(night_tips) = guidelines.get(NIGHT_TRAVEL_CATEGORY) {
                let mut tips = guidelines
                    .get(GENERAL_CATEGORY)
                    .cloned()
                    .unwrap_or_default();
                tips.extend(night_tips.iter().cloned());
                return tips;
            }
        }

        guidelines
            .get(category)
            .or_else(|| guidelines.get(GENERAL_CATEGORY))
            .cloned()
            .unwrap_or_default()
    }
}
