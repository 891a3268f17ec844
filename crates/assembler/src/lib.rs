use std::sync::Arc;
use std::time::Instant;

use mzansi_core::matching::{message_mentions_night, wants_fare_info, wants_safety_info};
use mzansi_core::{ContextQuery, FareStructure, Route, TaxiRank};
use mzansi_knowledge::{
    FareEstimator, FareInfo, KnowledgeStore, RankLocator, RouteMatcher, SafetyAdvisor,
};
use mzansi_observability::AppMetrics;
use tracing::{info, instrument};

/// At most this many matching ranks are listed in the context block.
const MAX_RANKS_LISTED: usize = 3;

/// Combines the lookup components into one ordered context block for the
/// external generation service.
///
/// Section order is fixed: route, nearby ranks, safety, fares, cultural
/// tips. A section whose trigger condition does not hold is omitted
/// entirely, never left blank; the downstream prompt template relies on the
/// labels and their order.
#[derive(Clone)]
pub struct ContextAssembler {
    store: Arc<KnowledgeStore>,
    routes: RouteMatcher,
    ranks: RankLocator,
    safety: SafetyAdvisor,
    fares: FareEstimator,
    metrics: Arc<AppMetrics>,
}

impl ContextAssembler {
    pub fn new(store: Arc<KnowledgeStore>, metrics: Arc<AppMetrics>) -> Self {
        Self {
            routes: RouteMatcher::new(store.clone()),
            ranks: RankLocator::new(store.clone()),
            safety: SafetyAdvisor::new(store.clone()),
            fares: FareEstimator::new(store.clone()),
            store,
            metrics,
        }
    }

    /// Builds the newline-joined context block for one query. Always
    /// returns a usable string; a fully failed dataset yields `""`.
    #[instrument(skip(self, query))]
    pub fn build_context(&self, query: &ContextQuery) -> String {
        let started = Instant::now();
        self.metrics.inc_context_request();

        let user_location = non_empty(query.user_location.as_deref());
        let destination = non_empty(query.destination.as_deref());
        let message = query.message.as_deref().unwrap_or("");

        let mut lines: Vec<String> = Vec::new();
        let mut route_hit = false;
        let mut ranks_matched = 0;

        if let (Some(from), Some(to)) = (user_location, destination) {
            if let Some(route) = self.routes.find_route(from, to) {
                self.metrics.inc_route_hit();
                route_hit = true;
                push_route_section(&mut lines, &route);
            }
        }

        // Destination takes priority as the rank search location.
        if let Some(search_location) = destination.or(user_location) {
            let matched = self.ranks.find_nearby_ranks(search_location, None);
            if !matched.is_empty() {
                self.metrics.add_rank_hits(matched.len());
                ranks_matched = matched.len();
                push_ranks_section(&mut lines, &matched);
            }
        }

        if wants_safety_info(message) {
            let time_of_day = if message_mentions_night(message) {
                "night"
            } else {
                "day"
            };
            let tips = self.safety.safety_tips(time_of_day, "general");
            if !tips.is_empty() {
                push_safety_section(&mut lines, &tips);
            }
        }

        if wants_fare_info(message) {
            if let Some(FareInfo::Schedule(schedule)) = self.fares.fare_info(None) {
                push_fare_section(&mut lines, &schedule);
            }
        }

        if let Some(base) = self.store.snapshot() {
            if let Some(cultural) = &base.cultural_context {
                lines.push("CULTURAL TIPS:".to_string());
                lines.push(format!("Etiquette: {}", cultural.etiquette.join(", ")));
                lines.push(String::new());
            }
        }

        if lines.is_empty() {
            self.metrics.inc_empty_context();
        }
        self.metrics.observe_latency(started.elapsed());

        info!(
            route_hit,
            ranks_matched,
            lines = lines.len(),
            "context assembled"
        );

        lines.join("\n")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn push_route_section(lines: &mut Vec<String>, route: &Route) {
    lines.push("SPECIFIC ROUTE DATA:".to_string());
    lines.push(format!("Route: {} → {}", route.from, route.to));
    lines.push(format!("Taxi Rank: {}", route.taxi_rank));
    lines.push(format!("Fare: R{}-{}", route.fare.min, route.fare.max));
    lines.push(format!("Duration: {}", route.duration));
    lines.push(format!("Frequency: {}", route.frequency));
    lines.push(format!("Route Details: {}", route.route_description));
    if !route.safety_tips.is_empty() {
        lines.push(format!("Safety Tips: {}", route.safety_tips.join(", ")));
    }
    lines.push(String::new());
}

fn push_ranks_section(lines: &mut Vec<String>, ranks: &[TaxiRank]) {
    lines.push("NEARBY TAXI RANKS:".to_string());
    for rank in ranks.iter().take(MAX_RANKS_LISTED) {
        lines.push(format!("• {}: {}", rank.name, rank.location));
        lines.push(format!("  Destinations: {}", rank.destinations.join(", ")));
        lines.push(format!("  Hours: {}", rank.operating_hours));
        lines.push(format!("  Landmarks: {}", rank.landmarks.join(", ")));
    }
    lines.push(String::new());
}

fn push_safety_section(lines: &mut Vec<String>, tips: &[String]) {
    lines.push("SAFETY GUIDELINES:".to_string());
    for tip in tips {
        lines.push(format!("• {tip}"));
    }
    lines.push(String::new());
}

fn push_fare_section(lines: &mut Vec<String>, schedule: &FareStructure) {
    lines.push("FARE INFORMATION:".to_string());
    lines.push(format!(
        "Factors affecting price: {}",
        schedule.factors.join(", ")
    ));
    lines.push("Typical ranges:".to_string());
    for tier in [
        &schedule.typical_ranges.short_distance,
        &schedule.typical_ranges.medium_distance,
        &schedule.typical_ranges.long_distance,
    ] {
        lines.push(format!("• {}: {}", tier.range, tier.fare));
    }
    lines.push(format!("Payment tips: {}", schedule.payment_tips.join(", ")));
    lines.push(String::new());
}
