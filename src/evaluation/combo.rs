use super::kind::Family;
use super::kind::Kind;
use super::strength::Strength;
use super::tier::Tier;

/// A classified play: its shape, its strength, and its length.
///
/// Only the classifier builds these, and only from a legal shape.
/// `span` counts the units of a run: cards for a straight or straight
/// flush, pairs for a pair straight, triples for a triple straight.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Combo {
    kind: Kind,
    strength: Strength,
    span: Option<u8>,
}

impl Combo {
    pub(crate) fn new(kind: Kind, value: u8, span: Option<u8>) -> Self {
        Self {
            kind,
            strength: Strength::from((kind, value)),
            span,
        }
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn family(&self) -> Family {
        self.kind.family()
    }
    pub fn tier(&self) -> Option<Tier> {
        self.kind.tier()
    }
    pub fn strength(&self) -> Strength {
        self.strength
    }
    pub fn span(&self) -> Option<u8> {
        self.span
    }
}

impl std::fmt::Display for Combo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.span {
            Some(span) => write!(
                f,
                "{:<16}x{:<3}{:>6}",
                self.kind.to_string(),
                span,
                u16::from(self.strength)
            ),
            None => write!(
                f,
                "{:<16}    {:>6}",
                self.kind.to_string(),
                u16::from(self.strength)
            ),
        }
    }
}
