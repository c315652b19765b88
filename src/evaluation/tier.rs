/// Rank of a bomb-family play in the bomb hierarchy.
///
/// Variant order is the hierarchy. A straight flush sits between the
/// 5-card and 6-card bombs, and the king bomb beats everything.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Tier {
    Four,
    Five,
    Flush,
    Six,
    Seven,
    Eight,
    King,
}

impl Tier {
    /// All tiers from weakest to strongest.
    pub const fn all() -> [Tier; 7] {
        [
            Tier::Four,
            Tier::Five,
            Tier::Flush,
            Tier::Six,
            Tier::Seven,
            Tier::Eight,
            Tier::King,
        ]
    }
    /// Tier of a plain same-rank bomb of `n` cards.
    /// Two decks hold at most eight cards of a rank.
    pub fn of(n: u8) -> Self {
        match n {
            0..=4 => Tier::Four,
            5 => Tier::Five,
            6 => Tier::Six,
            7 => Tier::Seven,
            _ => Tier::Eight,
        }
    }
}

impl From<Tier> for u8 {
    fn from(t: Tier) -> u8 {
        t as u8
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Tier::Four => write!(f, "4-bomb"),
            Tier::Five => write!(f, "5-bomb"),
            Tier::Flush => write!(f, "straight flush"),
            Tier::Six => write!(f, "6-bomb"),
            Tier::Seven => write!(f, "7-bomb"),
            Tier::Eight => write!(f, "8-bomb"),
            Tier::King => write!(f, "king bomb"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_flush_between_five_and_six() {
        assert!(Tier::Five < Tier::Flush);
        assert!(Tier::Flush < Tier::Six);
    }

    #[test]
    fn hierarchy_is_total() {
        let tiers = Tier::all();
        assert!(tiers.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(tiers.last(), Some(&Tier::King));
    }

    #[test]
    fn plain_bombs_by_count() {
        assert_eq!(Tier::of(4), Tier::Four);
        assert_eq!(Tier::of(6), Tier::Six);
        assert_eq!(Tier::of(8), Tier::Eight);
    }
}
