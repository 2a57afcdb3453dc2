use crate::cards::{parse_cards, Card};
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly three cards, got {0}")]
    InvalidHandSize(usize),
    #[error("duplicate cards in hand")]
    DuplicateCards,
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Three distinct cards held by the player or the dealer.
///
/// ```
/// use gta_poker::hand::ThreeCardHand;
///
/// let hand: ThreeCardHand = "As Ks Qs".parse().unwrap();
/// assert_eq!(hand.as_array().len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreeCardHand([Card; 3]);

impl ThreeCardHand {
    pub fn try_new(a: Card, b: Card, c: Card) -> Result<Self, HandError> {
        if a == b || a == c || b == c {
            return Err(HandError::DuplicateCards);
        }
        Ok(Self([a, b, c]))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match *slice {
            [a, b, c] => Self::try_new(a, b, c),
            _ => Err(HandError::InvalidHandSize(slice.len())),
        }
    }

    pub fn as_array(&self) -> [Card; 3] {
        self.0
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.0
    }
}

impl FromStr for ThreeCardHand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

impl fmt::Display for ThreeCardHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}, {b}, {c}")
    }
}
