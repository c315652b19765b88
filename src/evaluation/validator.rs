use super::classifier::Classifier;
use super::combo::Combo;
use super::comparator::Reason;
use super::comparator::verdict;
use super::level::Level;
use crate::cards::hand::Hand;

/// Why a proposed play was refused. Exactly one reason is reported per
/// call: shape problems before strength problems.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Rejection {
    /// No cards were played.
    Empty,
    /// The cards do not form any legal combination.
    InvalidShape,
    /// The play on the table does not form a legal combination either.
    /// Only a buggy orchestrator can get here.
    InvalidIncumbent,
    /// The play is legal but does not beat the one on the table.
    DoesNotBeat(Reason),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Rejection::Empty => write!(f, "nothing played"),
            Rejection::InvalidShape => write!(f, "not a valid combination"),
            Rejection::InvalidIncumbent => write!(f, "the play on the table is not a valid combination"),
            Rejection::DoesNotBeat(reason) => write!(f, "does not beat the table: {}", reason),
        }
    }
}

impl std::error::Error for Rejection {}

impl From<Reason> for Rejection {
    fn from(reason: Reason) -> Self {
        Rejection::DoesNotBeat(reason)
    }
}

/// Accepts or rejects a proposed play against the play on the table.
///
/// A leading play (`incumbent` is `None`) only has to be a legal shape.
/// Whether `play` actually comes out of `hand` is the orchestrator's
/// concern, not checked here. On success, returns the play's classification.
pub fn validate(
    play: Hand,
    incumbent: Option<Hand>,
    hand: Hand,
    level: Level,
) -> Result<Combo, Rejection> {
    log::trace!("validating {} from {} cards at level {}", play, hand.size(), level);
    validation(play, incumbent, level).inspect_err(|rejection| {
        log::debug!("rejected {} ({})", play, rejection);
    })
}

fn validation(play: Hand, incumbent: Option<Hand>, level: Level) -> Result<Combo, Rejection> {
    if play.size() == 0 {
        return Err(Rejection::Empty);
    }
    let challenger = Classifier::from((play, level))
        .classify()
        .ok_or(Rejection::InvalidShape)?;
    match incumbent {
        None => Ok(challenger),
        Some(table) => {
            let incumbent = Classifier::from((table, level))
                .classify()
                .ok_or(Rejection::InvalidIncumbent)?;
            verdict(&challenger, &incumbent)?;
            Ok(challenger)
        }
    }
}
