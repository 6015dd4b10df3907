use std::fmt;

/// The catalogue of causes the evaluator can attribute a non-`OK` verdict
/// to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasonCode {
    /// Placeholder value for "nothing demoted the verdict yet"; never
    /// constructed by the evaluator itself, since a verdict of `OK` never
    /// carries a reason at all.
    NoReasonFound,
    /// A proposition's value was found, but it was the opposite polarity
    /// to the one being checked for.
    NotVarFoundButOpposite,
    /// A proposition's value is unassigned at this world, and so is its
    /// negation.
    NotVarFoundNeitherOpposite,
    /// A `<>` operation found no successor world satisfying its operand.
    NoEdgeIsGivingWhatWeSearch,
    /// An `|` operation had at least one `KO` branch and the rest
    /// `UNKNOWN`.
    UnknownOrKo,
    /// An `|` operation had every branch `UNKNOWN`.
    UnknownOrUnknown,
    /// An `&` operation had at least one `UNKNOWN` branch and no `KO`.
    UnknownAndUnknown,
}

/// The innermost cause recorded for a `KO` or `UNKNOWN` verdict: a code,
/// the world it was observed at, and the term it was observed on.
#[derive(Debug, Clone)]
pub struct Reason {
    pub(crate) code: ReasonCode,
    pub(crate) world: usize,
    pub(crate) term: String,
}

impl Reason {
    /// The reason's code, for programmatic matching.
    pub fn code(&self) -> ReasonCode {
        self.code
    }

    /// The world the reason was observed at.
    pub fn world(&self) -> usize {
        self.world
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            ReasonCode::NoReasonFound => write!(f, "no reason was recorded"),
            ReasonCode::NotVarFoundButOpposite => write!(
                f,
                "{} is not in w_{} but its negation is",
                self.term, self.world
            ),
            ReasonCode::NotVarFoundNeitherOpposite => write!(
                f,
                "{} is not in w_{} (nor its negation)",
                self.term, self.world
            ),
            ReasonCode::NoEdgeIsGivingWhatWeSearch => write!(
                f,
                "no world accessible from w_{} satisfies {}",
                self.world, self.term
            ),
            ReasonCode::UnknownOrKo => write!(
                f,
                "in w_{}, {} has a false branch and the rest are unknown",
                self.world, self.term
            ),
            ReasonCode::UnknownOrUnknown => write!(
                f,
                "in w_{}, every branch of {} is unknown",
                self.world, self.term
            ),
            ReasonCode::UnknownAndUnknown => write!(
                f,
                "in w_{}, every branch of {} is unknown",
                self.world, self.term
            ),
        }
    }
}
