use serde_json::json;

use spire::blueprint::build_blueprint;
use spire::ingest::RawPayload;
use spire::locale::Locale;
use spire::models::{FloorKind, RemarkableKind};
use spire::ranking::Rank;

mod common;

fn build(value: serde_json::Value) -> spire::models::Blueprint {
    let payload: RawPayload = serde_json::from_value(value).unwrap();
    build_blueprint(payload, Locale::En)
}

#[test]
fn test_empty_input_law() {
    // No user or viewer record: the canonical empty blueprint.
    let blueprint = build(json!({"data": {}}));
    assert!(blueprint.floors.is_empty());
    assert_eq!(blueprint.stats.ranking, Rank::Ghost);
    assert_eq!(blueprint.stats.total_contributions, 0);
    assert_eq!(blueprint.stats.weekday_distribution, [0; 7]);
    assert!(blueprint.stats.calendar.is_empty());
    assert!(blueprint.stats.languages.is_empty());
    assert!(blueprint.stats.remarkable_events.is_empty());

    // Structurally identical in shape to a populated blueprint.
    let empty = serde_json::to_value(&blueprint).unwrap();
    let populated = serde_json::to_value(build(common::fixture_payload())).unwrap();
    let empty_keys: Vec<&String> = empty["stats"].as_object().unwrap().keys().collect();
    let populated_keys: Vec<&String> = populated["stats"].as_object().unwrap().keys().collect();
    assert_eq!(empty_keys, populated_keys);
}

#[test]
fn test_idempotence() {
    let first = serde_json::to_value(build(common::fixture_payload())).unwrap();
    let second = serde_json::to_value(build(common::fixture_payload())).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_weekday_distribution_partitions_the_total() {
    let blueprint = build(common::fixture_payload());
    let histogram_sum: u32 = blueprint.stats.weekday_distribution.iter().sum();
    assert_eq!(histogram_sum, blueprint.stats.total_contributions);
}

#[test]
fn test_floor_invariants() {
    let blueprint = build(common::fixture_payload());
    assert_eq!(blueprint.floors.len(), 8);
    for floor in &blueprint.floors {
        assert!(floor.height >= 0.2 && floor.height <= 10.0);
        assert!(floor.width >= 2.0 && floor.width <= 8.0);
        // Kind is a total function of active days.
        let expected = match floor.active_days {
            n if n > 4 => FloorKind::Solid,
            n if n > 2 => FloorKind::Wireframe,
            _ => FloorKind::Void,
        };
        assert_eq!(floor.kind, expected);
    }
}

#[test]
fn test_fixture_statistics() {
    let blueprint = build(common::fixture_payload());
    let stats = &blueprint.stats;

    assert_eq!(stats.total_contributions, 133);
    assert_eq!(stats.max_streak, 14);
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.longest_drought, 8);
    assert_eq!(stats.total_active_days, 35);
    assert_eq!(stats.consistency, 63); // 35 of 56 days
    assert_eq!(stats.weekend_ratio, 25); // 33 of 133
    assert_eq!(stats.average_per_day, 2.4);
    assert_eq!(stats.average_per_week, 16.6);
    assert_eq!(stats.busiest_day.date, "2024-02-05");
    assert_eq!(stats.busiest_day.count, 9);
    assert_eq!(stats.best_month.name, "February");
    assert_eq!(stats.worst_month.name, "March");
    assert_eq!(stats.ranking, Rank::Neophyte);
}

#[test]
fn test_fixture_events_and_marking() {
    let blueprint = build(common::fixture_payload());
    let events = &blueprint.stats.remarkable_events;

    let labels: Vec<&str> = events.iter().map(|event| event.label.as_str()).collect();
    assert_eq!(labels, vec!["VOID_01", "SURGE_01", "MILESTONE_100"]);

    // The silent week after the 25-contribution week.
    assert_eq!(events[0].week_index, 2);
    // The 60-contribution surge.
    assert_eq!(events[1].week_index, 4);
    assert_eq!(events[1].value, 60);
    // Cumulative total reaches 100 on the surge week's Saturday.
    assert_eq!(events[2].date, "2024-02-10");

    assert_eq!(
        blueprint.floors[2].remarkable_type,
        Some(RemarkableKind::Drought)
    );
    // The milestone lands on the peak's week and overwrites its marker with
    // the collapsed streak kind.
    assert_eq!(
        blueprint.floors[4].remarkable_type,
        Some(RemarkableKind::Streak)
    );
}

#[test]
fn test_languages_from_fixture() {
    let blueprint = build(common::fixture_payload());
    let languages = &blueprint.stats.languages;
    assert_eq!(languages.len(), 2);
    assert_eq!(languages[0].name, "TypeScript");
    assert_eq!(languages[0].count, 2);
    assert_eq!(languages[0].percentage, 67);
    assert_eq!(languages[1].name, "Rust");
    assert_eq!(languages[1].percentage, 33);
}

#[test]
fn test_calendar_is_reexposed_verbatim() {
    let blueprint = build(common::fixture_payload());
    assert_eq!(blueprint.stats.calendar.len(), 8);
    assert_eq!(blueprint.stats.calendar[0].first_day, "2024-01-07");
    assert_eq!(
        blueprint.stats.calendar[0].contribution_days[0].contribution_count,
        2
    );
}

#[test]
fn test_wire_shape_uses_camel_case() {
    let value = serde_json::to_value(build(common::fixture_payload())).unwrap();
    let stats = value["stats"].as_object().unwrap();
    assert!(stats.contains_key("totalContributions"));
    assert!(stats.contains_key("weekdayDistribution"));
    assert!(stats.contains_key("remarkableEvents"));
    assert_eq!(value["floors"][0]["type"], "WIREFRAME");
    assert_eq!(value["floors"][0]["isRemarkable"], false);
    assert_eq!(stats["profile"]["avatarUrl"], "https://example.test/avatar.png");
}

#[test]
fn test_viewer_envelope_without_data_wrapper() {
    let blueprint = build(json!({
        "viewer": {
            "login": "me",
            "contributionsCollection": {
                "contributionCalendar": {
                    "totalContributions": 3,
                    "weeks": [common::week("2024-01-07", &[3, 0, 0, 0, 0, 0, 0])]
                }
            }
        }
    }));
    assert_eq!(blueprint.stats.profile.login, "me");
    assert_eq!(blueprint.floors.len(), 1);
    assert_eq!(blueprint.stats.total_contributions, 3);
}
