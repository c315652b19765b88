/// Card rank, including the two jokers.
///
/// Discriminant order is face order (2 < 3 < … < A < Small < Big). That is
/// exactly the scale bombs are compared on, where 2 is the lowest rank and
/// the level rank carries no elevation. The play scale used for singles,
/// pairs and straights is [`Rank::normal`], where 2 sits above the Ace.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Rank {
    #[default]
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
    Small = 13,
    Big = 14,
}

impl Rank {
    /// All fifteen ranks in face order.
    pub const fn all() -> [Rank; 15] {
        [
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
            Rank::Small,
            Rank::Big,
        ]
    }
    pub fn is_joker(&self) -> bool {
        matches!(self, Rank::Small | Rank::Big)
    }
    /// Ranks 3 through A are the only ones that may appear in a run.
    pub fn is_sequential(&self) -> bool {
        !self.is_joker() && *self != Rank::Two
    }
    /// Bomb-internal value: face value, with 2 below 3.
    pub fn face(&self) -> u8 {
        u8::from(*self) + 2
    }
    /// Play-scale value, ignoring the level: 3..=14 for 3..A,
    /// 15 for the 2, 17 and 18 for the jokers. 16 is reserved for
    /// the Heart level card, see `Level::value`.
    pub fn normal(&self) -> u8 {
        match self {
            Rank::Two => 15,
            Rank::Small => 17,
            Rank::Big => 18,
            r => r.face(),
        }
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::Two,
            1 => Rank::Three,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            13 => Rank::Small,
            14 => Rank::Big,
            _ => unreachable!("invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// u16 isomorphism
///
/// With 15 ranks a presence mask fits in 15 bits.
/// From a mask we recover the highest rank present.
impl From<u16> for Rank {
    fn from(n: u16) -> Rank {
        debug_assert!(n & 0x7FFF != 0);
        let msb = (16 - 1 - (n & 0x7FFF).leading_zeros()) as u8;
        Rank::from(msb)
    }
}
impl From<Rank> for u16 {
    fn from(r: Rank) -> u16 {
        1 << u8::from(r)
    }
}

/// u128 injection
///
/// Each non-joker rank owns one byte of the Hand bitmask (4 suits x 2 copies).
/// The jokers share the top nibble, two bits each.
impl From<Rank> for u128 {
    fn from(r: Rank) -> u128 {
        match r {
            Rank::Small => 0b0011 << 104,
            Rank::Big => 0b1100 << 104,
            r => 0xFF << (u8::from(r) * 8),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Rank {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "T" | "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            "SJ" => Ok(Rank::Small),
            "BJ" => Ok(Rank::Big),
            _ => Err(format!("invalid rank str: {}", s)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
                Rank::Small => "SJ",
                Rank::Big => "BJ",
            }
        )
    }
}
