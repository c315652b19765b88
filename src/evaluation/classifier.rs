use super::combo::Combo;
use super::kind::Kind;
use super::level::Level;
use super::strength::Strength;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;

/// A lazy classifier for a played set of cards.
///
/// Shapes are tried from most to least privileged and the first match
/// wins, so a five-card suited run is a straight flush and never a
/// straight, and four jokers are a king bomb and never a bomb.
///
/// The Heart level card may fill one missing slot of a Pair or Triple.
/// It never stands in for another rank anywhere else, though it still
/// takes part in runs and bombs at its own rank.
pub struct Classifier {
    hand: Hand,
    level: Level,
}

impl From<(Hand, Level)> for Classifier {
    fn from((hand, level): (Hand, Level)) -> Self {
        Self { hand, level }
    }
}

impl Classifier {
    pub fn classify(&self) -> Option<Combo> {
        if self.hand.size() == 0 {
            return None;
        }
        None.or_else(|| self.find_king_bomb())
            .or_else(|| self.find_straight_flush())
            .or_else(|| self.find_bomb())
            .or_else(|| self.find_triple_straight())
            .or_else(|| self.find_pair_straight())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_triple_with_pair())
            .or_else(|| self.find_triple())
            .or_else(|| self.find_pair())
            .or_else(|| self.find_single())
    }

    fn find_king_bomb(&self) -> Option<Combo> {
        let n = self.hand.size();
        let small = self.hand.tally(Rank::Small);
        let big = self.hand.tally(Rank::Big);
        match (n, small, big) {
            (4, 2, 2) => Some(Combo::new(Kind::KingBomb, 0, None)),
            _ => None,
        }
    }
    fn find_straight_flush(&self) -> Option<Combo> {
        if self.hand.size() < crate::MIN_STRAIGHT || self.hand.suits() != 1 {
            return None;
        }
        self.find_run(1).map(|(top, span)| {
            Combo::new(Kind::StraightFlush, span * 20 + top.normal(), Some(span))
        })
    }
    fn find_bomb(&self) -> Option<Combo> {
        let n = self.hand.size();
        if n < crate::MIN_BOMB || n > crate::MAX_BOMB {
            return None;
        }
        self.find_rank_of_group()
            .filter(|rank| !rank.is_joker())
            .map(|rank| Combo::new(Kind::Bomb(n as u8), rank.face(), None))
    }
    fn find_triple_straight(&self) -> Option<Combo> {
        let n = self.hand.size();
        if n % 3 != 0 || n < 3 * crate::MIN_TRIPLE_STRAIGHT {
            return None;
        }
        self.find_run(3).map(|(top, span)| {
            Combo::new(Kind::TripleStraight, top.normal() + span, Some(span))
        })
    }
    fn find_pair_straight(&self) -> Option<Combo> {
        let n = self.hand.size();
        if n % 2 != 0 || n < 2 * crate::MIN_PAIR_STRAIGHT {
            return None;
        }
        self.find_run(2).map(|(top, span)| {
            Combo::new(Kind::PairStraight, top.normal() + span, Some(span))
        })
    }
    fn find_straight(&self) -> Option<Combo> {
        if self.hand.size() < crate::MIN_STRAIGHT {
            return None;
        }
        self.find_run(1)
            .map(|(top, span)| Combo::new(Kind::Straight, top.normal() + span, Some(span)))
    }
    fn find_triple_with_pair(&self) -> Option<Combo> {
        if self.hand.size() != 5 || u16::from(self.hand).count_ones() != 2 {
            return None;
        }
        let triple = Rank::all()
            .into_iter()
            .filter(|r| !r.is_joker())
            .find(|r| self.hand.tally(*r) == 3)?;
        let value = self.level.group(triple, &self.hand.at(triple));
        Some(Combo::new(Kind::TripleWithPair, value, None))
    }
    fn find_triple(&self) -> Option<Combo> {
        if self.hand.size() != 3 {
            return None;
        }
        if self.find_jokers() == 3 {
            return Some(Combo::new(Kind::Triple, Strength::JOKERS, None));
        }
        self.find_rank_of_group()
            .map(|rank| self.level.group(rank, &self.hand))
            .or_else(|| self.find_rank_of_wild_group().map(|rank| rank.normal()))
            .map(|value| Combo::new(Kind::Triple, value, None))
    }
    fn find_pair(&self) -> Option<Combo> {
        if self.hand.size() != 2 {
            return None;
        }
        if self.find_jokers() == 2 {
            return Some(Combo::new(Kind::Pair, Strength::JOKERS, None));
        }
        self.find_rank_of_group()
            .map(|rank| self.level.group(rank, &self.hand))
            .or_else(|| self.find_rank_of_wild_group().map(|rank| rank.normal()))
            .map(|value| Combo::new(Kind::Pair, value, None))
    }
    fn find_single(&self) -> Option<Combo> {
        let mut hand = self.hand;
        match (hand.next(), hand.next()) {
            (Some(card), None) => Some(Combo::new(Kind::Single, self.level.value(&card), None)),
            _ => None,
        }
    }

    /// Count of jokers of either colour.
    fn find_jokers(&self) -> usize {
        self.hand.tally(Rank::Small) + self.hand.tally(Rank::Big)
    }
    /// The rank shared by every card, if there is exactly one.
    fn find_rank_of_group(&self) -> Option<Rank> {
        let ranks = u16::from(self.hand);
        match ranks.count_ones() {
            1 => Some(Rank::from(ranks)),
            _ => None,
        }
    }
    /// The target rank of a group completed by exactly one wildcard:
    /// every other card shares one non-joker rank.
    fn find_rank_of_wild_group(&self) -> Option<Rank> {
        let wilds = self.level.wilds(&self.hand);
        if wilds.size() != 1 {
            return None;
        }
        let mut rest = self.hand;
        for wild in wilds {
            rest.remove(wild);
        }
        let ranks = u16::from(rest);
        match ranks.count_ones() {
            1 => Some(Rank::from(ranks)).filter(|rank| !rank.is_joker()),
            _ => None,
        }
    }
    /// The highest rank and unit count of a run of consecutive ranks,
    /// each present exactly `width` times. Only 3 through A may take part.
    fn find_run(&self, width: usize) -> Option<(Rank, u8)> {
        let ranks = u16::from(self.hand);
        let units = Rank::all()
            .into_iter()
            .filter(|r| ranks & u16::from(*r) != 0)
            .all(|r| r.is_sequential() && self.hand.tally(r) == width);
        let low = ranks >> ranks.trailing_zeros();
        let contiguous = low & (low + 1) == 0;
        if units && contiguous {
            Some((Rank::from(ranks), ranks.count_ones() as u8))
        } else {
            None
        }
    }
}
