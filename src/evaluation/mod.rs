pub mod classifier;
pub use classifier::*;

pub mod combo;
pub use combo::*;

pub mod comparator;
pub use comparator::*;

pub mod kind;
pub use kind::*;

pub mod level;
pub use level::*;

pub mod memo;
pub use memo::*;

pub mod strength;
pub use strength::*;

pub mod tier;
pub use tier::*;

pub mod validator;
pub use validator::*;

use crate::cards::hand::Hand;

/// Classifies a set of cards under the given level, or `None` if the
/// cards do not form a legal combination.
pub fn classify(hand: Hand, level: Level) -> Option<Combo> {
    Classifier::from((hand, level)).classify()
}
