use super::combo::Combo;
use std::cmp::Ordering;

/// Why a challenger fails to beat an incumbent.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Reason {
    /// A normal play can never beat a bomb.
    IllegalFamily,
    /// Normal plays only beat the same kind.
    IllegalKindMismatch,
    /// Runs only beat runs of the same length.
    IllegalSpanMismatch,
    /// Right shape, but not strictly stronger.
    NotStrongerEnough,
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Reason::IllegalFamily => write!(f, "a normal play cannot beat a bomb"),
            Reason::IllegalKindMismatch => write!(f, "kinds differ"),
            Reason::IllegalSpanMismatch => write!(f, "lengths differ"),
            Reason::NotStrongerEnough => write!(f, "not stronger"),
        }
    }
}

impl std::error::Error for Reason {}

/// Decides whether `challenger` legally beats `incumbent`, and if not, why.
///
/// First the family gate: bombs beat every normal play and no normal play
/// beats a bomb. Two bombs compare by tier, then within a tier by strength.
/// Two normal plays must share kind (and span, for runs) before their
/// strengths are compared. Ties never win.
pub fn verdict(challenger: &Combo, incumbent: &Combo) -> Result<(), Reason> {
    match (challenger.tier(), incumbent.tier()) {
        (None, Some(_)) => Err(Reason::IllegalFamily),
        (Some(_), None) => Ok(()),
        (Some(ours), Some(theirs)) => match ours.cmp(&theirs) {
            Ordering::Greater => Ok(()),
            Ordering::Less => Err(Reason::NotStrongerEnough),
            Ordering::Equal => stronger(challenger, incumbent),
        },
        (None, None) if challenger.kind() != incumbent.kind() => {
            Err(Reason::IllegalKindMismatch)
        }
        (None, None) if challenger.kind().is_spanned() && challenger.span() != incumbent.span() => {
            Err(Reason::IllegalSpanMismatch)
        }
        (None, None) => stronger(challenger, incumbent),
    }
}

/// Whether `challenger` legally beats `incumbent`.
pub fn beats(challenger: &Combo, incumbent: &Combo) -> bool {
    verdict(challenger, incumbent).is_ok()
}

fn stronger(challenger: &Combo, incumbent: &Combo) -> Result<(), Reason> {
    if challenger.strength() > incumbent.strength() {
        Ok(())
    } else {
        Err(Reason::NotStrongerEnough)
    }
}
