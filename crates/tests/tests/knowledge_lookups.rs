use std::path::PathBuf;
use std::sync::Arc;

use mzansi_knowledge::{
    FareEstimator, FareInfo, KnowledgeStore, RankLocator, RouteMatcher, SafetyAdvisor,
};

fn kb_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/taxi-routes.json")
}

fn store() -> Arc<KnowledgeStore> {
    let store = Arc::new(KnowledgeStore::open(kb_path()));
    assert!(store.is_loaded(), "fixture dataset should load");
    store
}

#[test]
fn route_lookup_tolerates_partial_names() {
    let matcher = RouteMatcher::new(store());

    let route = matcher.find_route("Durban", "Umlazi").expect("route");
    assert_eq!(route.taxi_rank, "Berea Station Rank");

    assert!(matcher.find_route("Polokwane", "Tzaneen").is_none());
}

#[test]
fn fare_tier_boundaries() {
    let estimator = FareEstimator::new(store());

    let range_of = |distance: f64| match estimator.fare_info(Some(distance)) {
        Some(FareInfo::Tier(tier)) => tier.range,
        other => panic!("expected tier for {distance}, got {other:?}"),
    };

    assert_eq!(range_of(15.0), "0-15km");
    assert_eq!(range_of(16.0), "15-30km");
    assert_eq!(range_of(30.0), "15-30km");
    assert_eq!(range_of(31.0), "30km+");
}

#[test]
fn late_evening_hour_concatenates_tip_sets() {
    let advisor = SafetyAdvisor::new(store());
    let tips = advisor.safety_tips("22:30", "general");

    assert_eq!(tips.len(), 7);
    assert_eq!(tips[0], "Keep valuables out of sight");
    assert_eq!(tips[4], "Travel with a companion after dark");
    // Other categories never bleed into the night concatenation.
    assert!(!tips.iter().any(|tip| tip.contains("queue marshal")));
}

#[test]
fn city_scoped_rank_search_stays_in_city() {
    let locator = RankLocator::new(store());

    let durban = locator.find_nearby_ranks("CBD", Some("Durban"));
    assert_eq!(durban.len(), 1);
    assert_eq!(durban[0].name, "Berea Station Rank");

    let all = locator.find_nearby_ranks("CBD", None);
    assert!(all.len() > 3);
}

#[test]
fn reload_picks_up_a_replaced_document() {
    let original = std::fs::read_to_string(kb_path()).expect("fixture readable");

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("taxi-routes.json");
    std::fs::write(&path, &original).expect("seed dataset");

    let store = KnowledgeStore::open(&path);
    assert_eq!(store.status().routes, 5);

    let mut doc: serde_json::Value = serde_json::from_str(&original).expect("fixture parses");
    doc.as_object_mut().unwrap().remove("routes");
    std::fs::write(&path, doc.to_string()).expect("replace dataset");

    store.reload();
    assert!(store.is_loaded());
    assert_eq!(store.status().routes, 0);
}
