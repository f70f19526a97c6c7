use super::{Match, Outcome};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

/// A team's accumulated record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableRow {
    team: String,
    played: u32,
    won: u32,
    drawn: u32,
    lost: u32,
    points: u32,
}

/// A league table with one row per team.
///
/// Rows are in no particular order until the table is sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<TableRow>,
}

/// The direction a table is ranked in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Fewest points first, ties broken alphabetically.
    Ascending,
    /// Most points first, ties broken reverse-alphabetically.
    Descending,
}

/// An order other than `asc` or `desc`.
#[derive(Debug, Fail)]
#[fail(display = "invalid order: {} (expected asc or desc)", _0)]
pub struct InvalidOrder(String);

/// Builds a table from matches and ranks it, most points first.
///
/// # Examples
///
/// ```
/// use tally::{Match, Outcome};
/// let matches = vec![
///     Match::new("Allegoric Alaskans", "Blithering Badgers", Outcome::Win),
///     Match::new("Blithering Badgers", "Courageous Californians", Outcome::Draw),
/// ];
/// let table = tally::tally(&matches);
/// assert_eq!("Allegoric Alaskans", table.rows()[0].team());
/// assert_eq!(3, table.rows()[0].points());
/// ```
pub fn tally(matches: &[Match]) -> Table {
    let mut table = Table::build(matches);
    table.sort(Order::Descending);
    table
}

impl TableRow {
    /// Creates an empty row for a team.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::TableRow;
    /// let row = TableRow::new("Devastating Donkeys");
    /// assert_eq!(0, row.played());
    /// ```
    pub fn new(team: &str) -> TableRow {
        TableRow {
            team: team.to_string(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            points: 0,
        }
    }

    /// Records one played match for this team.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::{Outcome, TableRow};
    /// let mut row = TableRow::new("Devastating Donkeys");
    /// row.record(Outcome::Win);
    /// row.record(Outcome::Draw);
    /// assert_eq!(2, row.played());
    /// assert_eq!(4, row.points());
    /// ```
    pub fn record(&mut self, outcome: Outcome) {
        self.played += 1;
        match outcome {
            Outcome::Win => self.won += 1,
            Outcome::Draw => self.drawn += 1,
            Outcome::Loss => self.lost += 1,
        }
        self.points += outcome.points();
    }

    /// Returns the team's name.
    pub fn team(&self) -> &str {
        &self.team
    }

    /// Returns the number of matches played.
    pub fn played(&self) -> u32 {
        self.played
    }

    /// Returns the number of matches won.
    pub fn won(&self) -> u32 {
        self.won
    }

    /// Returns the number of matches drawn.
    pub fn drawn(&self) -> u32 {
        self.drawn
    }

    /// Returns the number of matches lost.
    pub fn lost(&self) -> u32 {
        self.lost
    }

    /// Returns the points earned.
    pub fn points(&self) -> u32 {
        self.points
    }
}

impl Table {
    /// Builds an unsorted table from matches.
    ///
    /// Every team that appears as home or away gets exactly one row.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::{Match, Outcome, Table};
    /// let matches = vec![Match::new("Allegoric Alaskans", "Blithering Badgers", Outcome::Draw)];
    /// let table = Table::build(&matches);
    /// assert_eq!(2, table.len());
    /// ```
    pub fn build(matches: &[Match]) -> Table {
        let mut rows: HashMap<&str, TableRow> = HashMap::new();
        for game in matches {
            rows.entry(game.home())
                .or_insert_with(|| TableRow::new(game.home()))
                .record(game.outcome());
            rows.entry(game.away())
                .or_insert_with(|| TableRow::new(game.away()))
                .record(game.away_outcome());
        }
        debug!("built {} rows from {} matches", rows.len(), matches.len());
        Table {
            rows: rows.into_iter().map(|(_, row)| row).collect(),
        }
    }

    /// Ranks this table's rows in place.
    ///
    /// Rows are ordered by points, and ties between equal points are broken by team name in the
    /// same direction. The sort is stable.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::{Match, Order, Outcome, Table};
    /// let matches = vec![Match::new("Allegoric Alaskans", "Blithering Badgers", Outcome::Draw)];
    /// let mut table = Table::build(&matches);
    /// table.sort(Order::Ascending);
    /// assert_eq!("Allegoric Alaskans", table.rows()[0].team());
    /// table.sort(Order::Descending);
    /// assert_eq!("Blithering Badgers", table.rows()[0].team());
    /// ```
    pub fn sort(&mut self, order: Order) -> &mut Table {
        self.rows.sort_by(|a, b| order.compare(a, b));
        self
    }

    /// Returns this table's rows as a slice.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Consumes this table, returning its rows.
    pub fn into_rows(self) -> Vec<TableRow> {
        self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Order {
    fn compare(self, a: &TableRow, b: &TableRow) -> Ordering {
        let ordering = a
            .points
            .cmp(&b.points)
            .then_with(|| a.team.cmp(&b.team));
        match self {
            Order::Ascending => ordering,
            Order::Descending => ordering.reverse(),
        }
    }
}

impl Default for Order {
    fn default() -> Order {
        Order::Descending
    }
}

impl FromStr for Order {
    type Err = InvalidOrder;

    fn from_str(s: &str) -> Result<Order, InvalidOrder> {
        match s {
            "asc" | "ascending" => Ok(Order::Ascending),
            "desc" | "descending" => Ok(Order::Descending),
            _ => Err(InvalidOrder(s.to_string())),
        }
    }
}
