//! Processed player record, one row of the output table.

use serde::{Deserialize, Serialize};

/// Sentinel used when a team or position identifier cannot be resolved.
pub const UNKNOWN_NAME: &str = "N/A";

/// Divisor converting API prices (tenths of a million) into millions.
pub const PRICE_SCALE: f64 = 10.0;

/// Output columns, in serialization order.
pub const COLUMNS: [&str; 46] = [
    "player_name",
    "club_name",
    "position_name",
    "now_cost",
    "total_points",
    "event_points",
    "points_per_game",
    "selected_by_percent",
    "goals_scored",
    "assists",
    "minutes",
    "clean_sheets",
    "goals_conceded",
    "own_goals",
    "penalties_saved",
    "penalties_missed",
    "saves",
    "yellow_cards",
    "red_cards",
    "bonus",
    "influence",
    "creativity",
    "threat",
    "ict_index",
    "form",
    "dreamteam_count",
    "value_form",
    "value_season",
    "transfers_in",
    "transfers_out",
    "transfers_in_event",
    "transfers_out_event",
    "cost_change_start",
    "cost_change_start_fall",
    "cost_change_event",
    "cost_change_event_fall",
    "expected_goals",
    "expected_assists",
    "expected_goal_involvements",
    "expected_goals_conceded",
    "starts",
    "news",
    "influence_rank",
    "creativity_rank",
    "threat_rank",
    "ict_index_rank",
];

/// A flattened player row with resolved club and position names.
///
/// Field order is the CSV column order (see [`COLUMNS`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// "{first name} {web name}".
    pub player_name: String,
    /// Club display name, or [`UNKNOWN_NAME`].
    pub club_name: String,
    /// Short position code, or [`UNKNOWN_NAME`].
    pub position_name: String,

    /// Price in millions.
    pub now_cost: f64,
    pub total_points: i32,
    pub event_points: i32,
    pub points_per_game: f64,
    pub selected_by_percent: f64,
    pub goals_scored: i32,
    pub assists: i32,
    pub minutes: i32,
    pub clean_sheets: i32,
    pub goals_conceded: i32,
    pub own_goals: i32,
    pub penalties_saved: i32,
    pub penalties_missed: i32,
    pub saves: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub bonus: i32,
    pub influence: f64,
    pub creativity: f64,
    pub threat: f64,
    pub ict_index: f64,
    pub form: f64,
    pub dreamteam_count: i32,
    pub value_form: f64,
    pub value_season: f64,
    pub transfers_in: i64,
    pub transfers_out: i64,
    pub transfers_in_event: i64,
    pub transfers_out_event: i64,

    /// Price changes in millions.
    pub cost_change_start: f64,
    pub cost_change_start_fall: f64,
    pub cost_change_event: f64,
    pub cost_change_event_fall: f64,

    pub expected_goals: f64,
    pub expected_assists: f64,
    pub expected_goal_involvements: f64,
    pub expected_goals_conceded: f64,
    pub starts: i32,
    pub news: String,

    /// Empty cell when the API does not rank the player.
    pub influence_rank: Option<u32>,
    pub creativity_rank: Option<u32>,
    pub threat_rank: Option<u32>,
    pub ict_index_rank: Option<u32>,
}

impl PlayerRecord {
    /// Returns true if the club could not be resolved.
    #[must_use]
    pub fn has_unknown_club(&self) -> bool {
        self.club_name == UNKNOWN_NAME
    }

    /// Returns true if the position could not be resolved.
    #[must_use]
    pub fn has_unknown_position(&self) -> bool {
        self.position_name == UNKNOWN_NAME
    }
}

/// Converts an API price in tenths into millions.
#[must_use]
pub fn scale_price(tenths: i32) -> f64 {
    f64::from(tenths) / PRICE_SCALE
}
