//! Raw payload types as returned by the bootstrap-static endpoint.

use serde::{Deserialize, Deserializer};

/// The full bootstrap-static snapshot.
///
/// Only the three arrays needed to build the player table are modelled;
/// every other top-level key of the payload is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Bootstrap {
    /// Premier League clubs.
    pub teams: Vec<RawTeam>,

    /// Position types (GKP, DEF, MID, FWD).
    pub element_types: Vec<RawElementType>,

    /// Player elements. Absent and empty are treated alike.
    #[serde(default)]
    pub elements: Vec<RawElement>,
}

/// A club entry of the `teams` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawTeam {
    /// Team identifier referenced by [`RawElement::team`].
    pub id: u32,

    /// Display name (e.g. "Arsenal").
    pub name: String,
}

/// A position entry of the `element_types` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawElementType {
    /// Position identifier referenced by [`RawElement::element_type`].
    pub id: u32,

    /// Short position code (e.g. "MID").
    pub singular_name_short: String,
}

/// A single player ("element") as returned by the API.
///
/// Decimal statistics are sent as JSON strings (`"4.5"`); they are accepted
/// as strings or numbers. Expected-stat fields, `starts`, `news` and the
/// rank fields do not exist for every season and default when absent or
/// `null`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawElement {
    pub first_name: String,
    pub web_name: String,
    pub team: u32,
    pub element_type: u32,

    /// Price in tenths of a million.
    pub now_cost: i32,
    pub total_points: i32,
    pub event_points: i32,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub points_per_game: f64,
    #[serde(deserialize_with = "decimal::deserialize")]
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

    #[serde(deserialize_with = "decimal::deserialize")]
    pub influence: f64,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub creativity: f64,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub threat: f64,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub ict_index: f64,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub form: f64,
    pub dreamteam_count: i32,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub value_form: f64,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub value_season: f64,

    pub transfers_in: i64,
    pub transfers_out: i64,
    pub transfers_in_event: i64,
    pub transfers_out_event: i64,

    /// Price changes, all in tenths.
    pub cost_change_start: i32,
    pub cost_change_start_fall: i32,
    pub cost_change_event: i32,
    pub cost_change_event_fall: i32,

    #[serde(default, deserialize_with = "decimal::or_zero")]
    pub expected_goals: f64,
    #[serde(default, deserialize_with = "decimal::or_zero")]
    pub expected_assists: f64,
    #[serde(default, deserialize_with = "decimal::or_zero")]
    pub expected_goal_involvements: f64,
    #[serde(default, deserialize_with = "decimal::or_zero")]
    pub expected_goals_conceded: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub starts: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub news: String,

    #[serde(default)]
    pub influence_rank: Option<u32>,
    #[serde(default)]
    pub creativity_rank: Option<u32>,
    #[serde(default)]
    pub threat_rank: Option<u32>,
    #[serde(default)]
    pub ict_index_rank: Option<u32>,
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decimal fields encoded as either a JSON string or a JSON number.
mod decimal {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Number(f64),
        Text(String),
    }

    fn parse<E: Error>(value: Decimal) -> Result<f64, E> {
        match value {
            Decimal::Number(value) => Ok(value),
            Decimal::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid decimal: {text:?}"))),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse(Decimal::deserialize(deserializer)?)
    }

    /// Like [`deserialize`], with `null` read as zero.
    pub fn or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Decimal>::deserialize(deserializer)?.map_or(Ok(0.0), parse)
    }
}
