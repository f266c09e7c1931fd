//! Shared fixtures for unit tests.

use fplsync_player::{PlayerRecord, RawElement};
use serde_json::{Value, json};

use crate::lookup::{PositionLookup, TeamLookup};
use crate::transform::process_element;

/// Returns a raw element JSON object with every required field set.
pub fn element_json(
    first_name: &str,
    web_name: &str,
    team: u32,
    element_type: u32,
    now_cost: i32,
    total_points: i32,
) -> Value {
    json!({
        "first_name": first_name,
        "web_name": web_name,
        "team": team,
        "element_type": element_type,
        "now_cost": now_cost,
        "total_points": total_points,
        "event_points": 2,
        "points_per_game": "4.5",
        "selected_by_percent": "12.3",
        "goals_scored": 3,
        "assists": 4,
        "minutes": 900,
        "clean_sheets": 2,
        "goals_conceded": 10,
        "own_goals": 0,
        "penalties_saved": 0,
        "penalties_missed": 0,
        "saves": 0,
        "yellow_cards": 1,
        "red_cards": 0,
        "bonus": 5,
        "influence": "210.4",
        "creativity": "180.0",
        "threat": "301.0",
        "ict_index": "69.1",
        "form": "5.0",
        "dreamteam_count": 1,
        "value_form": "0.6",
        "value_season": "8.2",
        "transfers_in": 120_000,
        "transfers_out": 80_000,
        "transfers_in_event": 1_500,
        "transfers_out_event": 900,
        "cost_change_start": 0,
        "cost_change_start_fall": 0,
        "cost_change_event": 0,
        "cost_change_event_fall": 0
    })
}

/// Returns a deserialized raw element.
pub fn element(
    first_name: &str,
    web_name: &str,
    team: u32,
    element_type: u32,
    now_cost: i32,
    total_points: i32,
) -> RawElement {
    serde_json::from_value(element_json(
        first_name,
        web_name,
        team,
        element_type,
        now_cost,
        total_points,
    ))
    .unwrap()
}

/// Returns a processed record with the given name, club and points.
pub fn record(player_name: &str, club_name: &str, total_points: i32) -> PlayerRecord {
    let mut record = process_element(
        &element("", "", 0, 0, 50, total_points),
        &TeamLookup::default(),
        &PositionLookup::default(),
    );
    player_name.clone_into(&mut record.player_name);
    club_name.clone_into(&mut record.club_name);
    record
}

/// Returns a bootstrap-static payload with two teams, four positions and
/// the given elements.
pub fn bootstrap_json(elements: &[Value]) -> String {
    json!({
        "events": [],
        "teams": [
            { "id": 1, "name": "Arsenal", "short_name": "ARS" },
            { "id": 12, "name": "Liverpool", "short_name": "LIV" }
        ],
        "element_types": [
            { "id": 1, "singular_name_short": "GKP" },
            { "id": 2, "singular_name_short": "DEF" },
            { "id": 3, "singular_name_short": "MID" },
            { "id": 4, "singular_name_short": "FWD" }
        ],
        "elements": elements
    })
    .to_string()
}
