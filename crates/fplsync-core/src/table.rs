//! The output table.

use fplsync_player::PlayerRecord;

/// Processed player records ordered by total points, highest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerTable {
    records: Vec<PlayerRecord>,
}

impl PlayerTable {
    /// Creates a table from unordered records.
    ///
    /// The sort is stable, so players with equal points keep their
    /// payload order.
    #[must_use]
    pub fn from_records(mut records: Vec<PlayerRecord>) -> Self {
        records.sort_by(|a, b| b.total_points.cmp(&a.total_points));
        Self { records }
    }

    /// Returns the records in table order.
    #[must_use]
    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the highest scoring player, if any.
    #[must_use]
    pub fn top(&self) -> Option<&PlayerRecord> {
        self.records.first()
    }

    /// Returns an iterator over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, PlayerRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a PlayerTable {
    type Item = &'a PlayerRecord;
    type IntoIter = std::slice::Iter<'a, PlayerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
