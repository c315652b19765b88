/// Card suit: clubs, diamonds, hearts, spades, and the joker pseudo-suit.
///
/// Suits never affect strength. They matter in exactly two places:
/// straight flushes, and the Heart level card that acts as a wildcard.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
    Joker = 4,
}

impl Suit {
    /// The four ordinary suits.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            4 => Suit::Joker,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u128 representation
///
/// Within each rank byte, a suit owns two adjacent bits (one per deck copy).
/// The joker suit owns the top nibble.
impl From<Suit> for u128 {
    fn from(s: Suit) -> u128 {
        match s {
            Suit::Joker => 0xF << 104,
            s => {
                let byte = 0b11u128 << (u8::from(s) * 2);
                (0..13).fold(0, |mask, i| mask | byte << (i * 8))
            }
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "c" | "♣" => Ok(Suit::C),
            "d" | "♦" => Ok(Suit::D),
            "h" | "♥" => Ok(Suit::H),
            "s" | "♠" => Ok(Suit::S),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::C => write!(f, "c"),
            Suit::D => write!(f, "d"),
            Suit::H => write!(f, "h"),
            Suit::S => write!(f, "s"),
            Suit::Joker => write!(f, "*"),
        }
    }
}
