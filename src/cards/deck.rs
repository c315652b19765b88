use super::card::Card;
use super::hand::Hand;

/// A mutable pack of the two 54-card decks supporting random draws.
///
/// Wraps a [`Hand`] representing the remaining cards. Dealing is the
/// orchestrator's business; the deck only guarantees the 108-card
/// invariant and uniform sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates the full 108-card pack.
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw(&mut self) -> Card {
        debug_assert!(self.0.size() > 0);
        let n = self.0.size();
        let i = rand::random_range(0..n);
        let mut deck = u128::from(self.0);
        for _ in 0..i {
            deck &= deck - 1;
        }
        let card = Card::from(deck.trailing_zeros() as u8);
        self.0.remove(card);
        card
    }
    /// Draws `n` cards as one hand.
    pub fn hand(&mut self, n: usize) -> Hand {
        (0..n.min(self.size()))
            .map(|_| self.draw())
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
    /// Deals the whole pack into four disjoint hands.
    pub fn deal(&mut self) -> [Hand; crate::N] {
        std::array::from_fn(|_| self.hand(crate::HAND_SIZE))
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0.size() > 0 {
            Some(self.draw())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;

    #[test]
    fn full_pack() {
        let hand = Hand::from(Deck::new());
        assert_eq!(hand.size(), 108);
        assert_eq!(hand.tally(Rank::Small), 2);
        assert_eq!(hand.tally(Rank::Big), 2);
        for rank in Rank::all().into_iter().filter(|r| !r.is_joker()) {
            assert_eq!(hand.tally(rank), 8);
            for suit in Suit::all() {
                assert_eq!(hand.at(rank).of(&suit).size(), 2);
            }
        }
    }

    #[test]
    fn draws_are_unique() {
        let mut deck = Deck::new();
        let drawn = Hand::from((&mut deck).collect::<Vec<Card>>());
        assert_eq!(drawn.size(), 108);
        assert_eq!(deck.size(), 0);
    }

    #[test]
    fn deal_is_disjoint_and_exhaustive() {
        let hands = Deck::new().deal();
        assert!(hands.iter().all(|h| h.size() == crate::HAND_SIZE));
        let all = hands.into_iter().fold(Hand::empty(), Hand::add);
        assert_eq!(all, Hand::from(Deck::new()));
    }
}
