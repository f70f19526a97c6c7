//! Writes ranked tables for people and for other programs.

use super::{Error, Table};
use std::io::Write;

const TEAM_WIDTH: usize = 30;

/// Writes a table as fixed-width text.
///
/// Team names longer than the team column are truncated.
///
/// # Examples
///
/// ```
/// use tally::{Match, Outcome};
/// let game = Match::new("Allegoric Alaskans", "Blithering Badgers", Outcome::Win);
/// let table = tally::tally(&[game]);
/// let mut out = Vec::new();
/// tally::render::write_text(&table, &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(
///     "Team                           | MP |  W |  D |  L |  P",
///     text.lines().next().unwrap()
/// );
/// ```
pub fn write_text<W: Write>(table: &Table, mut out: W) -> Result<(), Error> {
    writeln!(
        out,
        "{:<width$} | MP |  W |  D |  L |  P",
        "Team",
        width = TEAM_WIDTH
    )?;
    for row in table.rows() {
        writeln!(
            out,
            "{:<width$.width$} | {:>2} | {:>2} | {:>2} | {:>2} | {:>2}",
            row.team(),
            row.played(),
            row.won(),
            row.drawn(),
            row.lost(),
            row.points(),
            width = TEAM_WIDTH
        )?;
    }
    Ok(())
}

/// Writes a table as comma-separated values with a header row.
pub fn write_csv<W: Write>(table: &Table, out: W) -> Result<(), Error> {
    let mut writer = csv::Writer::from_writer(out);
    for row in table.rows() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
