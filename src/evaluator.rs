use crate::cards::{Card, Rank};
use crate::hand::{HandError, ThreeCardHand};

/// Lowest high card the dealer needs to play without a made hand.
pub const DEALER_QUALIFIER: u8 = Rank::Queen.value();

/// Three-card hand category from weakest to strongest.
/// The discriminant is the numeric rank tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    Flush = 3,
    Straight = 4,
    ThreeOfAKind = 5,
    StraightFlush = 6,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::HighCard,
        Category::Pair,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::StraightFlush,
    ];

    pub const fn tier(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High card",
            Category::Pair => "Pair",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a kind",
            Category::StraightFlush => "Straight flush",
        }
    }
}

/// Classification of a three-card hand.
///
/// `distinguishing_card` is the repeated value for pairs and trips, otherwise
/// the highest card. It only breaks ties between hands of the same category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct HandClassification {
    pub is_flush: bool,
    pub is_straight: bool,
    pub is_straight_flush: bool,
    pub is_pair: bool,
    pub is_three_of_kind: bool,
    pub category: Category,
    pub distinguishing_card: u8,
    pub is_playable_by_dealer: bool,
}

impl HandClassification {
    /// Numeric rank tier, 1 (high card) through 6 (straight flush).
    pub const fn rank(&self) -> u8 {
        self.category.tier()
    }

    /// Human-readable label, e.g. `"Pair of 7s"` or `"J-high (dealer does not play)"`.
    pub fn describe(&self, for_dealer: bool) -> String {
        let face = Rank::from_value(self.distinguishing_card).map_or("?", Rank::face);
        match self.category {
            Category::StraightFlush => format!("{face}-high straight flush"),
            Category::ThreeOfAKind => format!("Three {face}s"),
            Category::Straight => format!("{face}-high straight"),
            Category::Flush => format!("{face}-high flush"),
            Category::Pair => format!("Pair of {face}s"),
            Category::HighCard if for_dealer && !self.is_playable_by_dealer => {
                format!("{face}-high (dealer does not play)")
            }
            Category::HighCard => format!("{face}-high"),
        }
    }
}

/// Classify exactly three cards.
///
/// ```
/// use gta_poker::cards::parse_cards;
/// use gta_poker::evaluator::{classify, Category};
///
/// let wheel = parse_cards("2h 3d Ac").unwrap();
/// let c = classify(&wheel).unwrap();
/// assert_eq!(c.category, Category::Straight);
/// assert_eq!(c.distinguishing_card, 14);
/// ```
pub fn classify(cards: &[Card]) -> Result<HandClassification, HandError> {
    match *cards {
        [a, b, c] => Ok(classify_three([a, b, c])),
        _ => Err(HandError::InvalidHandSize(cards.len())),
    }
}

/// Classify an already validated hand.
pub fn classify_hand(hand: &ThreeCardHand) -> HandClassification {
    classify_three(hand.as_array())
}

fn classify_three(mut sorted: [Card; 3]) -> HandClassification {
    sorted.sort_by_key(|c| c.value());
    let [lo, mid, hi] = sorted.map(Card::value);

    // Sorted, so any repeat shares the middle value.
    let repeats = u8::from(lo == mid) + u8::from(mid == hi);
    let is_three_of_kind = repeats == 2;
    let is_pair = repeats == 1;
    let distinguishing_card = if repeats > 0 { mid } else { hi };

    let is_flush = sorted[0].suit() == sorted[1].suit() && sorted[1].suit() == sorted[2].suit();
    let is_wheel = (lo, mid, hi) == (2, 3, Rank::Ace.value());
    let is_straight = (lo + 1 == mid && mid + 1 == hi) || is_wheel;
    let is_straight_flush = is_flush && is_straight;

    let is_playable_by_dealer = is_flush
        || is_straight
        || is_pair
        || is_three_of_kind
        || distinguishing_card >= DEALER_QUALIFIER;

    let category = if is_straight_flush {
        Category::StraightFlush
    } else if is_three_of_kind {
        Category::ThreeOfAKind
    } else if is_straight {
        Category::Straight
    } else if is_flush {
        Category::Flush
    } else if is_pair {
        Category::Pair
    } else {
        Category::HighCard
    };

    HandClassification {
        is_flush,
        is_straight,
        is_straight_flush,
        is_pair,
        is_three_of_kind,
        category,
        distinguishing_card,
        is_playable_by_dealer,
    }
}
