use super::kind::Kind;
use super::tier::Tier;

/// A single comparable ordinal for a classified play.
///
/// Normal kinds get `base(kind) + value`, spaced so kinds never overlap.
/// Bomb kinds get a base derived from their [`Tier`] discriminant plus a
/// payload, so the ordinal always agrees with the structural bomb order.
/// Within one tier the payload breaks ties: the face value for plain
/// bombs, `span * 20 + top` for straight flushes.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Strength(u16);

impl Strength {
    /// Value of a joker pair or joker triple, above every card.
    pub const JOKERS: u8 = 19;

    fn base(kind: &Kind) -> u16 {
        match kind {
            Kind::Single => 0,
            Kind::Pair => 100,
            Kind::Triple => 200,
            Kind::TripleWithPair => 300,
            Kind::Straight => 400,
            Kind::PairStraight => 500,
            Kind::TripleStraight => 600,
            Kind::Bomb(n) => Self::bomb(Tier::of(*n)),
            Kind::StraightFlush => Self::bomb(Tier::Flush),
            Kind::KingBomb => Self::bomb(Tier::King),
        }
    }
    fn bomb(tier: Tier) -> u16 {
        1000 * (1 + u8::from(tier) as u16)
    }
}

impl From<(Kind, u8)> for Strength {
    fn from((kind, value): (Kind, u8)) -> Self {
        Self(Self::base(&kind) + value as u16)
    }
}

/// u16 isomorphism
impl From<Strength> for u16 {
    fn from(s: Strength) -> u16 {
        s.0
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_do_not_overlap() {
        let single = Strength::from((Kind::Single, Strength::JOKERS));
        let pair = Strength::from((Kind::Pair, 3));
        assert!(single < pair);
    }

    #[test]
    fn ordinal_follows_bomb_tiers() {
        let five = Strength::from((Kind::Bomb(5), 14));
        let flush = Strength::from((Kind::StraightFlush, 5 * 20 + 7));
        let six = Strength::from((Kind::Bomb(6), 2));
        let king = Strength::from((Kind::KingBomb, 0));
        let eight = Strength::from((Kind::Bomb(8), 14));
        assert!(five < flush);
        assert!(flush < six);
        assert!(eight < king);
    }

    #[test]
    fn every_bomb_outranks_every_normal() {
        let straight = Strength::from((Kind::TripleStraight, 14 + 12));
        let four = Strength::from((Kind::Bomb(4), 2));
        assert!(straight < four);
    }

    #[test]
    fn bases_rise_with_every_kind() {
        let kinds = [
            Kind::Single,
            Kind::Pair,
            Kind::Triple,
            Kind::TripleWithPair,
            Kind::Straight,
            Kind::PairStraight,
            Kind::TripleStraight,
            Kind::Bomb(4),
            Kind::Bomb(5),
            Kind::StraightFlush,
            Kind::Bomb(6),
            Kind::Bomb(7),
            Kind::Bomb(8),
            Kind::KingBomb,
        ];
        for pair in kinds.windows(2) {
            let lo = Strength::from((pair[0], 0));
            let hi = Strength::from((pair[1], 0));
            assert!(lo < hi, "{} should sit below {}", pair[0], pair[1]);
        }
    }
}
