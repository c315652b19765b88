use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;

/// The rank currently being climbed.
///
/// The orchestrator owns this value and passes it into every engine call.
/// It decides two things:
///
/// - which cards are level cards (the Heart of the level rank), and
///   therefore wildcards eligible to fill a Pair or Triple slot
/// - the play-scale value of those cards, which sits strictly between
///   the 2 and the Small joker
///
/// Level-rank cards of other suits are ordinary cards at their plain
/// rank value. Jokers can never be the level.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Level(Rank);

impl Level {
    /// Play-scale value of the Heart level card.
    pub const VALUE: u8 = 16;

    pub fn rank(&self) -> Rank {
        self.0
    }
    /// True iff the card is the Heart of the level rank.
    pub fn is_level(&self, card: &Card) -> bool {
        card.rank() == self.0 && card.suit() == Suit::H
    }
    /// The wildcards held in a hand.
    pub fn wilds(&self, hand: &Hand) -> Hand {
        hand.at(self.0).of(&Suit::H)
    }
    /// Play-scale value of a single card.
    pub fn value(&self, card: &Card) -> u8 {
        if self.is_level(card) {
            Self::VALUE
        } else {
            card.rank().normal()
        }
    }
    /// Play-scale value of a same-rank group. The group is only elevated
    /// when every card in it is a level card.
    pub fn group(&self, rank: Rank, cards: &Hand) -> u8 {
        if rank == self.0 && self.wilds(cards).size() == cards.size() {
            Self::VALUE
        } else {
            rank.normal()
        }
    }
}

impl TryFrom<Rank> for Level {
    type Error = String;
    fn try_from(rank: Rank) -> Result<Self, Self::Error> {
        if rank.is_joker() {
            Err(format!("jokers cannot be the level: {}", rank))
        } else {
            Ok(Self(rank))
        }
    }
}
impl From<Level> for Rank {
    fn from(level: Level) -> Self {
        level.0
    }
}

/// str isomorphism
impl TryFrom<&str> for Level {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Rank::try_from(s).and_then(Self::try_from)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
