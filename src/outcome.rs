use std::str::FromStr;

/// An outcome token that is not `win`, `draw`, or `loss`.
#[derive(Debug, Fail, PartialEq, Eq)]
#[fail(display = "unknown outcome: {}", _0)]
pub struct UnknownOutcome(pub String);

/// The result of a match, as seen by one of the two teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Three points.
    Win,
    /// One point.
    Draw,
    /// No points.
    Loss,
}

impl Outcome {
    /// Returns the points this outcome is worth.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::Outcome;
    /// assert_eq!(3, Outcome::Win.points());
    /// assert_eq!(1, Outcome::Draw.points());
    /// assert_eq!(0, Outcome::Loss.points());
    /// ```
    pub fn points(self) -> u32 {
        match self {
            Outcome::Win => 3,
            Outcome::Draw => 1,
            Outcome::Loss => 0,
        }
    }

    /// Returns the outcome for the other side of the same match.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::Outcome;
    /// assert_eq!(Outcome::Loss, Outcome::Win.mirror());
    /// assert_eq!(Outcome::Draw, Outcome::Draw.mirror());
    /// ```
    pub fn mirror(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Draw => Outcome::Draw,
            Outcome::Loss => Outcome::Win,
        }
    }

    /// Reads an outcome token, treating anything unrecognized as a loss.
    ///
    /// Use `str::parse` instead to reject unknown tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::Outcome;
    /// assert_eq!(Outcome::Win, Outcome::from_token("win"));
    /// assert_eq!(Outcome::Loss, Outcome::from_token("forfeit"));
    /// ```
    pub fn from_token(token: &str) -> Outcome {
        token.parse().unwrap_or_else(|_| {
            debug!("unknown outcome {:?}, counting as a loss", token);
            Outcome::Loss
        })
    }
}

impl FromStr for Outcome {
    type Err = UnknownOutcome;

    fn from_str(s: &str) -> Result<Outcome, UnknownOutcome> {
        match s {
            "win" => Ok(Outcome::Win),
            "draw" => Ok(Outcome::Draw),
            "loss" => Ok(Outcome::Loss),
            _ => Err(UnknownOutcome(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_case_sensitive() {
        assert_eq!(
            Err(UnknownOutcome("Win".to_string())),
            "Win".parse::<Outcome>()
        );
        assert!(" win".parse::<Outcome>().is_err());
        assert_eq!(Outcome::Draw, "draw".parse().unwrap());
    }

    #[test]
    fn mirror_is_an_involution() {
        for &outcome in &[Outcome::Win, Outcome::Draw, Outcome::Loss] {
            assert_eq!(outcome, outcome.mirror().mirror());
        }
    }

    #[test]
    fn unknown_token_is_a_loss() {
        assert_eq!(Outcome::Loss, Outcome::from_token("forfeit"));
        assert_eq!(Outcome::Loss, Outcome::from_token(""));
    }
}
