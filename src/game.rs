use super::{Error, Outcome};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A played match.
///
/// The outcome is the home team's result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Match {
    home: String,
    away: String,
    outcome: Outcome,
}

impl Match {
    /// Creates a new match between a home and an away team.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::{Match, Outcome};
    /// let game = Match::new("Allegoric Alaskans", "Blithering Badgers", Outcome::Win);
    /// ```
    pub fn new(home: &str, away: &str, outcome: Outcome) -> Match {
        Match {
            home: home.to_string(),
            away: away.to_string(),
            outcome: outcome,
        }
    }

    /// Returns the home team's name.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::{Match, Outcome};
    /// let game = Match::new("Allegoric Alaskans", "Blithering Badgers", Outcome::Win);
    /// assert_eq!("Allegoric Alaskans", game.home());
    /// ```
    pub fn home(&self) -> &str {
        &self.home
    }

    /// Returns the away team's name.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::{Match, Outcome};
    /// let game = Match::new("Allegoric Alaskans", "Blithering Badgers", Outcome::Win);
    /// assert_eq!("Blithering Badgers", game.away());
    /// ```
    pub fn away(&self) -> &str {
        &self.away
    }

    /// Returns the home team's outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the away team's outcome.
    pub fn away_outcome(&self) -> Outcome {
        self.outcome.mirror()
    }
}

/// Parses semicolon-delimited `home;away;outcome` records.
///
/// Blank lines are skipped. Unknown outcome tokens count as a loss for the home team.
///
/// # Examples
///
/// ```
/// use tally::Outcome;
/// let input = "Allegoric Alaskans;Blithering Badgers;win\n\nBlithering Badgers;Allegoric Alaskans;draw\n";
/// let matches = tally::parse_matches(input.as_bytes()).unwrap();
/// assert_eq!(2, matches.len());
/// assert_eq!(Outcome::Draw, matches[1].outcome());
/// ```
pub fn parse_matches<R: Read>(reader: R) -> Result<Vec<Match>, Error> {
    parse(reader, false)
}

/// Parses records like `parse_matches`, but fails on unknown outcome tokens.
///
/// # Examples
///
/// ```
/// let input = "Allegoric Alaskans;Blithering Badgers;forfeit\n";
/// assert!(tally::parse_matches_strict(input.as_bytes()).is_err());
/// ```
pub fn parse_matches_strict<R: Read>(reader: R) -> Result<Vec<Match>, Error> {
    parse(reader, true)
}

/// Reads matches from a path on the filesystem.
pub fn read_matches<P: AsRef<Path>>(path: P, strict: bool) -> Result<Vec<Match>, Error> {
    let file = File::open(path)?;
    parse(file, strict)
}

fn parse<R: Read>(reader: R, strict: bool) -> Result<Vec<Match>, Error> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut matches = Vec::new();
    for result in reader.records() {
        let record = result?;
        matches.push(parse_record(&record, strict)?);
    }
    debug!("parsed {} matches", matches.len());
    Ok(matches)
}

fn parse_record(record: &StringRecord, strict: bool) -> Result<Match, Error> {
    let line = record.position().map_or(0, |position| position.line());
    if record.len() != 3 {
        return Err(Error::MalformedRecord {
            line: line,
            fields: record.len(),
            record: record.iter().collect::<Vec<_>>().join(";"),
        });
    }
    let token = &record[2];
    let outcome = if strict {
        token.parse::<Outcome>().map_err(|_| Error::UnknownOutcome {
            line: line,
            token: token.to_string(),
        })?
    } else {
        Outcome::from_token(token)
    };
    Ok(Match::new(&record[0], &record[1], outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert!(parse_matches("".as_bytes()).unwrap().is_empty());
        assert!(parse_matches("\n\n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn keeps_input_order() {
        let input = "A;B;win\nC;D;loss\nB;C;draw\n";
        let matches = parse_matches(input.as_bytes()).unwrap();
        assert_eq!(
            vec![
                Match::new("A", "B", Outcome::Win),
                Match::new("C", "D", Outcome::Loss),
                Match::new("B", "C", Outcome::Draw),
            ],
            matches
        );
    }

    #[test]
    fn team_names_are_not_trimmed() {
        let matches = parse_matches(" A ;B;win".as_bytes()).unwrap();
        assert_eq!(" A ", matches[0].home());
    }

    #[test]
    fn too_few_fields() {
        let input = "A;B;win\nA;B\n";
        match parse_matches(input.as_bytes()).unwrap_err() {
            Error::MalformedRecord {
                line,
                fields,
                record,
            } => {
                assert_eq!(2, line);
                assert_eq!(2, fields);
                assert_eq!("A;B", record);
            }
            err => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn too_many_fields() {
        let input = "A;B;win;extra\n";
        match parse_matches(input.as_bytes()).unwrap_err() {
            Error::MalformedRecord { line, fields, .. } => {
                assert_eq!(1, line);
                assert_eq!(4, fields);
            }
            err => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn malformed_record_stops_parsing() {
        let input = "A;B;win\nnonsense\nC;D;win\n";
        assert!(parse_matches(input.as_bytes()).is_err());
    }

    #[test]
    fn unknown_outcome_is_a_loss() {
        let matches = parse_matches("A;B;forfeit\n".as_bytes()).unwrap();
        assert_eq!(Outcome::Loss, matches[0].outcome());
        assert_eq!(Outcome::Win, matches[0].away_outcome());
    }

    #[test]
    fn strict_rejects_unknown_outcome() {
        let input = "A;B;win\nA;B;WIN\n";
        match parse_matches_strict(input.as_bytes()).unwrap_err() {
            Error::UnknownOutcome { line, token } => {
                assert_eq!(2, line);
                assert_eq!("WIN", token);
            }
            err => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn quoted_fields() {
        let matches = parse_matches("\"A;1\";B;draw\n".as_bytes()).unwrap();
        assert_eq!("A;1", matches[0].home());
    }
}
