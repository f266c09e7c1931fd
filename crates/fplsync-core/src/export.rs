//! CSV serialization of the player table.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use fplsync_player::COLUMNS;

use crate::table::PlayerTable;

/// Writes the table as CSV to any writer.
///
/// The header row is always written, even for an empty table. There is no
/// index column.
///
/// # Errors
///
/// Returns an error if a row cannot be serialized or written.
pub fn write_to<W: Write>(table: &PlayerTable, writer: W) -> csv::Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(COLUMNS)?;
    for record in table {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the table to a file, replacing any existing content.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_csv(table: &PlayerTable, path: &Path) -> csv::Result<()> {
    let file = File::create(path)?;
    write_to(table, file)
}

/// Renders the table as a CSV string.
///
/// # Errors
///
/// Returns an error if a row cannot be serialized.
pub fn to_csv_string(table: &PlayerTable) -> csv::Result<String> {
    let mut buf = Vec::new();
    write_to(table, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
