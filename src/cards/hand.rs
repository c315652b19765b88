use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// Hand represents an unordered set of physical Cards, stored as a u128 bitmask
/// with one bit per card of the two-deck pack (108 live bits). Since both decks'
/// duplicates are distinct bits, a Hand is a sub-multiset of the pack in
/// rank/suit terms, with no heap allocation and Copy semantics.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u128);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }
    pub const fn mask() -> u128 {
        (1 << 108) - 1
    }

    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u128::from(card);
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u128::from(*card) != 0
    }
    /// Whether every card of `other` is also in this hand.
    pub fn covers(&self, other: &Self) -> bool {
        other.0 & !self.0 == 0
    }

    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    /// How many cards of the given rank, across suits and copies.
    pub fn tally(&self, rank: Rank) -> usize {
        (self.0 & u128::from(rank)).count_ones() as usize
    }
    /// The sub-hand of cards in the given suit.
    pub fn of(&self, suit: &Suit) -> Self {
        Self(self.0 & u128::from(*suit))
    }
    /// The sub-hand of cards of the given rank.
    pub fn at(&self, rank: Rank) -> Self {
        Self(self.0 & u128::from(rank))
    }
    /// How many distinct suits are present.
    pub fn suits(&self) -> usize {
        Suit::all()
            .into_iter()
            .chain(std::iter::once(Suit::Joker))
            .filter(|s| self.of(s).size() > 0)
            .count()
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u128 isomorphism
impl From<u128> for Hand {
    fn from(n: u128) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u128 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(c: Card) -> Self {
        Self(u128::from(c))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards.into_iter().map(u128::from).fold(0, |a, b| a | b))
    }
}

/// one-way conversion to u16 Rank presence masks
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        Rank::all()
            .into_iter()
            .filter(|r| h.tally(*r) > 0)
            .map(u16::from)
            .fold(0, |a, b| a | b)
    }
}

/// str isomorphism
/// the first occurrence of a card takes copy 0, a repeat takes copy 1
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .try_fold(Hand::empty(), |hand, card| {
                let card = card?;
                match (hand.contains(&card), hand.contains(&card.twin())) {
                    (false, _) => Ok(Hand::add(hand, Hand::from(card))),
                    (true, false) => Ok(Hand::add(hand, Hand::from(card.twin()))),
                    (true, true) => Err(format!("more than two of {}", card)),
                }
            })
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = Vec::<Card>::from(*self)
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u128() {
        let hand = Hand::try_from("3c 7h 7h Ks SJ BJ").unwrap();
        assert_eq!(hand, Hand::from(u128::from(hand)));
    }

    #[test]
    fn repeats_take_the_second_copy() {
        let hand = Hand::try_from("7h 7h").unwrap();
        assert_eq!(hand.size(), 2);
        assert_eq!(hand.tally(Rank::Seven), 2);
        assert_eq!(
            hand.map(|c| c.copy()).collect::<Vec<_>>(),
            vec![0, 1]
        );
    }

    #[test]
    fn third_copy_is_rejected() {
        assert!(Hand::try_from("7h 7h 7h").is_err());
        assert!(Hand::try_from("BJ BJ BJ").is_err());
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert_eq!(iter.next(), Some(Card::try_from("2c").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Ts").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Jc").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Js").unwrap()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn ranks_and_suits() {
        let hand = Hand::try_from("3c 3d 5h 5h 9s SJ").unwrap();
        assert_eq!(hand.tally(Rank::Five), 2);
        assert_eq!(hand.tally(Rank::Small), 1);
        assert_eq!(hand.of(&Suit::H).size(), 2);
        assert_eq!(hand.of(&Suit::Joker).size(), 1);
        assert_eq!(hand.suits(), 5);
        assert_eq!(
            u16::from(hand),
            u16::from(Rank::Three) | u16::from(Rank::Five) | u16::from(Rank::Nine) | u16::from(Rank::Small)
        );
        assert_eq!(hand.tally(Rank::Three), 2);
    }

    #[test]
    fn covering() {
        let hand = Hand::try_from("3c 7d Kh").unwrap();
        let play = Hand::try_from("7d").unwrap();
        assert!(hand.covers(&play));
        assert!(!play.covers(&hand));
        assert!(!hand.covers(&Hand::try_from("7d 7d").unwrap()));
    }

    #[test]
    fn display() {
        let hand = Hand::try_from("BJ 3c Th").unwrap();
        assert_eq!(hand.to_string(), "3c Th BJ");
    }
}
