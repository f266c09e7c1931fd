//! Projection of raw elements into output records.

use fplsync_player::{PlayerRecord, RawElement, scale_price};

use crate::lookup::{PositionLookup, TeamLookup};

/// Flattens a raw element into a [`PlayerRecord`].
///
/// Club and position are resolved through the lookups, prices are converted
/// from tenths into millions and every other statistic is copied as-is.
#[must_use]
pub fn process_element(
    element: &RawElement,
    teams: &TeamLookup,
    positions: &PositionLookup,
) -> PlayerRecord {
    PlayerRecord {
        player_name: format!("{} {}", element.first_name, element.web_name),
        club_name: teams.name(element.team).to_string(),
        position_name: positions.name(element.element_type).to_string(),

        now_cost: scale_price(element.now_cost),
        total_points: element.total_points,
        event_points: element.event_points,
        points_per_game: element.points_per_game,
        selected_by_percent: element.selected_by_percent,
        goals_scored: element.goals_scored,
        assists: element.assists,
        minutes: element.minutes,
        clean_sheets: element.clean_sheets,
        goals_conceded: element.goals_conceded,
        own_goals: element.own_goals,
        penalties_saved: element.penalties_saved,
        penalties_missed: element.penalties_missed,
        saves: element.saves,
        yellow_cards: element.yellow_cards,
        red_cards: element.red_cards,
        bonus: element.bonus,
        influence: element.influence,
        creativity: element.creativity,
        threat: element.threat,
        ict_index: element.ict_index,
        form: element.form,
        dreamteam_count: element.dreamteam_count,
        value_form: element.value_form,
        value_season: element.value_season,
        transfers_in: element.transfers_in,
        transfers_out: element.transfers_out,
        transfers_in_event: element.transfers_in_event,
        transfers_out_event: element.transfers_out_event,

        cost_change_start: scale_price(element.cost_change_start),
        cost_change_start_fall: scale_price(element.cost_change_start_fall),
        cost_change_event: scale_price(element.cost_change_event),
        cost_change_event_fall: scale_price(element.cost_change_event_fall),

        expected_goals: element.expected_goals,
        expected_assists: element.expected_assists,
        expected_goal_involvements: element.expected_goal_involvements,
        expected_goals_conceded: element.expected_goals_conceded,
        starts: element.starts,
        news: element.news.clone(),

        influence_rank: element.influence_rank,
        creativity_rank: element.creativity_rank,
        threat_rank: element.threat_rank,
        ict_index_rank: element.ict_index_rank,
    }
}
