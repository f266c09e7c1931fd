//! Identifier lookups built from the bootstrap payload.
//!
//! Both lookups are total: an unknown identifier resolves to
//! [`UNKNOWN_NAME`] instead of leaking the raw id into the table.

use std::collections::HashMap;

use fplsync_player::{RawElementType, RawTeam, UNKNOWN_NAME};

/// Team id to club display name.
#[derive(Debug, Clone, Default)]
pub struct TeamLookup {
    names: HashMap<u32, String>,
}

impl TeamLookup {
    /// Builds the lookup from the `teams` array.
    #[must_use]
    pub fn from_teams(teams: &[RawTeam]) -> Self {
        Self {
            names: teams
                .iter()
                .map(|team| (team.id, team.name.clone()))
                .collect(),
        }
    }

    /// Returns the club name, or `"N/A"` if the id is unknown.
    #[must_use]
    pub fn name(&self, id: u32) -> &str {
        self.names.get(&id).map_or(UNKNOWN_NAME, String::as_str)
    }

    /// Returns the number of known teams.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no teams are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Position id to short position code.
#[derive(Debug, Clone, Default)]
pub struct PositionLookup {
    codes: HashMap<u32, String>,
}

impl PositionLookup {
    /// Builds the lookup from the `element_types` array.
    #[must_use]
    pub fn from_element_types(element_types: &[RawElementType]) -> Self {
        Self {
            codes: element_types
                .iter()
                .map(|et| (et.id, et.singular_name_short.clone()))
                .collect(),
        }
    }

    /// Returns the position code, or `"N/A"` if the id is unknown.
    #[must_use]
    pub fn name(&self, id: u32) -> &str {
        self.codes.get(&id).map_or(UNKNOWN_NAME, String::as_str)
    }

    /// Returns the number of known positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if no positions are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
