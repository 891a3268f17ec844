use std::path::PathBuf;
use std::sync::Arc;

use mzansi_assembler::ContextAssembler;
use mzansi_core::ContextQuery;
use mzansi_knowledge::KnowledgeStore;
use mzansi_observability::AppMetrics;

fn kb_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/taxi-routes.json")
}

fn assembler() -> ContextAssembler {
    let store = Arc::new(KnowledgeStore::open(kb_path()));
    assert!(store.is_loaded(), "fixture dataset should load");
    ContextAssembler::new(store, AppMetrics::shared())
}

fn query(from: Option<&str>, to: Option<&str>, message: Option<&str>) -> ContextQuery {
    ContextQuery::new(from, to, message)
}

#[test]
fn katlehong_route_renders_curated_facts() {
    let context =
        assembler().build_context(&query(Some("Katlehong"), Some("Johannesburg"), Some("")));

    assert!(context.contains("SPECIFIC ROUTE DATA:"));
    assert!(context.contains("Route: Katlehong → Johannesburg CBD"));
    assert!(context.contains("Fare: R20-25"));
    assert!(context.contains("Duration: 45 minutes"));
    assert!(context.contains("Frequency: every 15 minutes"));
    assert!(context.contains("Route Details: via R59 and N3"));
}

#[test]
fn route_matching_ignores_case() {
    let context =
        assembler().build_context(&query(Some("katlehong"), Some("JOHANNESBURG"), None));
    assert!(context.contains("Route: Katlehong → Johannesburg CBD"));
}

#[test]
fn rank_listing_caps_at_three_matches() {
    // "CBD" matches ranks in every city; only the first three in city-key
    // order may appear.
    let context = assembler().build_context(&query(None, Some("CBD"), None));

    let bullets = context
        .lines()
        .filter(|line| line.starts_with("• "))
        .count();
    assert_eq!(bullets, 3);

    assert!(context.contains("• Cape Town Station Deck:"));
    assert!(context.contains("• Bellville Taxi Rank:"));
    assert!(context.contains("• Berea Station Rank:"));
    assert!(!context.contains("Bree Street Taxi Rank"));
}

#[test]
fn destination_outranks_user_location_for_rank_search() {
    let context = assembler().build_context(&query(Some("Umlazi"), Some("Mamelodi"), None));

    assert!(context.contains("• Bloed Street Mall Rank:"));
    assert!(!context.contains("Berea Station Rank"));
}

#[test]
fn night_message_adds_night_travel_guidelines() {
    let context = assembler().build_context(&query(
        None,
        None,
        Some("is it safe to travel at night"),
    ));

    assert!(context.contains("SAFETY GUIDELINES:"));
    assert!(context.contains("• Keep valuables out of sight"));
    assert!(context.contains("• Travel with a companion after dark"));
}

#[test]
fn day_safety_message_skips_night_tips() {
    let context = assembler().build_context(&query(None, None, Some("is this route safe")));

    assert!(context.contains("• Keep valuables out of sight"));
    assert!(!context.contains("Travel with a companion after dark"));
}

#[test]
fn fare_message_renders_full_schedule() {
    let context =
        assembler().build_context(&query(None, None, Some("how much does it cost")));

    assert!(context.contains("FARE INFORMATION:"));
    assert!(context.contains("Factors affecting price: distance, fuel price, route demand, time of day"));
    assert!(context.contains("• 0-15km: R10-R20"));
    assert!(context.contains("• 15-30km: R20-R35"));
    assert!(context.contains("• 30km+: R35-R60"));
    assert!(context.contains("Payment tips: Carry small notes and coins"));
}

#[test]
fn neutral_message_yields_only_cultural_section() {
    let context = assembler().build_context(&query(None, None, Some("hello there")));

    assert!(!context.contains("SPECIFIC ROUTE DATA:"));
    assert!(!context.contains("NEARBY TAXI RANKS:"));
    assert!(!context.contains("SAFETY GUIDELINES:"));
    assert!(!context.contains("FARE INFORMATION:"));
    assert!(context.starts_with("CULTURAL TIPS:"));
    assert!(context.contains("Etiquette: Greet the driver and passengers when boarding"));
}

#[test]
fn section_order_is_stable_when_everything_triggers() {
    let context = assembler().build_context(&query(
        Some("Katlehong"),
        Some("Johannesburg"),
        Some("is it safe at night and how much money do I need"),
    ));

    let labels = [
        "SPECIFIC ROUTE DATA:",
        "NEARBY TAXI RANKS:",
        "SAFETY GUIDELINES:",
        "FARE INFORMATION:",
        "CULTURAL TIPS:",
    ];
    let positions: Vec<usize> = labels
        .iter()
        .map(|label| {
            context
                .find(label)
                .unwrap_or_else(|| panic!("section {label} missing"))
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn blank_locations_are_treated_as_absent() {
    let context = assembler().build_context(&query(Some("  "), Some(""), Some("hello")));

    assert!(!context.contains("SPECIFIC ROUTE DATA:"));
    assert!(!context.contains("NEARBY TAXI RANKS:"));
}

#[test]
fn failed_dataset_yields_empty_output_without_error() {
    let store = Arc::new(KnowledgeStore::open("/missing/taxi-routes.json"));
    let assembler = ContextAssembler::new(store, AppMetrics::shared());

    let context = assembler.build_context(&query(
        Some("Katlehong"),
        Some("Johannesburg"),
        Some("is it safe? what is the fare?"),
    ));
    assert_eq!(context, "");
}
