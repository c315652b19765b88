use super::tier::Tier;

/// Which side of the family gate a play is on.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Family {
    Normal,
    Bomb,
}

/// The closed set of legal combination shapes.
///
/// Normal kinds only ever compare against the same kind. Bomb kinds
/// compare across each other through their [`Tier`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Kind {
    Single,
    Pair,
    Triple,
    TripleWithPair,
    Straight,
    /// Consecutive pairs.
    PairStraight,
    /// Consecutive triples, a.k.a. steel plate.
    TripleStraight,
    /// 4 to 8 cards of one rank.
    Bomb(u8),
    StraightFlush,
    /// Both Small and both Big jokers.
    KingBomb,
}

impl Kind {
    pub fn tier(&self) -> Option<Tier> {
        match self {
            Kind::Bomb(n) => Some(Tier::of(*n)),
            Kind::StraightFlush => Some(Tier::Flush),
            Kind::KingBomb => Some(Tier::King),
            _ => None,
        }
    }
    pub fn family(&self) -> Family {
        match self.tier() {
            Some(_) => Family::Bomb,
            None => Family::Normal,
        }
    }
    /// Kinds whose length must match before strength is compared.
    pub fn is_spanned(&self) -> bool {
        matches!(
            self,
            Kind::Straight | Kind::PairStraight | Kind::TripleStraight
        )
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Kind::Single => write!(f, "Single"),
            Kind::Pair => write!(f, "Pair"),
            Kind::Triple => write!(f, "Triple"),
            Kind::TripleWithPair => write!(f, "TripleWithPair"),
            Kind::Straight => write!(f, "Straight"),
            Kind::PairStraight => write!(f, "PairStraight"),
            Kind::TripleStraight => write!(f, "TripleStraight"),
            Kind::Bomb(n) => write!(f, "Bomb({})", n),
            Kind::StraightFlush => write!(f, "StraightFlush"),
            Kind::KingBomb => write!(f, "KingBomb"),
        }
    }
}
