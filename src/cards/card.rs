use super::rank::Rank;
use super::suit::Suit;

/// A physical playing card encoded as a single byte.
///
/// Two 54-card decks give 108 cards, bijectively mapped to `0..108`.
/// Ordinary cards encode as `(rank * 4 + suit) * 2 + copy`, so every rank
/// occupies one aligned block of eight. The jokers sit on top:
/// Small copy 0 and 1 at 104 and 105, Big copy 0 and 1 at 106 and 107.
///
/// The copy tag only distinguishes the two decks. It never affects
/// legality or strength.
///
/// # Parsing
///
/// Tokens are a rank followed by a suit, like `"Th"` or `"10♥"`, or
/// `"SJ"` / `"BJ"` for the jokers. Parsed cards always carry copy 0;
/// [`Hand`] parsing assigns copy 1 to repeated tokens.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Card(u8);

impl Card {
    const JOKERS: u8 = 104;

    pub fn rank(&self) -> Rank {
        match self.0 {
            n if n < Self::JOKERS => Rank::from(n / 8),
            n if n < Self::JOKERS + 2 => Rank::Small,
            _ => Rank::Big,
        }
    }
    pub fn suit(&self) -> Suit {
        match self.0 {
            n if n < Self::JOKERS => Suit::from((n / 2) % 4),
            _ => Suit::Joker,
        }
    }
    /// Which of the two decks this card came from.
    pub fn copy(&self) -> u8 {
        self.0 % 2
    }
    pub fn is_joker(&self) -> bool {
        self.0 >= Self::JOKERS
    }
    /// The same rank and suit from the other deck.
    pub fn twin(&self) -> Self {
        Self(self.0 ^ 1)
    }
}

/// (Rank, Suit, copy) isomorphism
///
/// Jokers must carry the joker suit and vice versa.
impl TryFrom<(Rank, Suit, u8)> for Card {
    type Error = String;
    fn try_from((rank, suit, copy): (Rank, Suit, u8)) -> Result<Self, Self::Error> {
        if copy > 1 {
            return Err(format!("invalid copy tag: {}", copy));
        }
        match (rank, suit) {
            (Rank::Small, Suit::Joker) => Ok(Self(Self::JOKERS + copy)),
            (Rank::Big, Suit::Joker) => Ok(Self(Self::JOKERS + 2 + copy)),
            (r, s) if r.is_joker() || s == Suit::Joker => {
                Err(format!("jokers only pair with the joker suit: {}{}", r, s))
            }
            (r, s) => Ok(Self((u8::from(r) * 4 + u8::from(s)) * 2 + copy)),
        }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted pair of decks 0-107
/// Th (copy 1)
/// 69
/// 0b01000101
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 108, "invalid card u8: {}", n);
        Self(n)
    }
}

/// u128 representation
/// each card is just one bit turned on. this is a one-way morphism
impl From<Card> for u128 {
    fn from(c: Card) -> u128 {
        1 << u8::from(c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.rank() {
            r if r.is_joker() => write!(f, "{}", r),
            r => write!(f, "{}{}", r, self.suit()),
        }
    }
}

/// str isomorphism (up to the copy tag, which is always 0)
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        if let Ok(rank) = Rank::try_from(s) {
            if rank.is_joker() {
                return Card::try_from((rank, Suit::Joker, 0));
            }
        }
        match s.char_indices().last() {
            Some((i, _)) if i > 0 => {
                let rank = Rank::try_from(&s[..i])?;
                let suit = Suit::try_from(&s[i..])?;
                Card::try_from((rank, suit, 0))
            }
            _ => Err(format!("invalid card str: {}", s)),
        }
    }
}
