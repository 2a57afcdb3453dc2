use crate::evaluator::HandClassification;
use core::cmp::Ordering;

/// Which side takes the main wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    Player,
    Dealer,
}

/// Decide a player-vs-dealer showdown.
///
/// A dealer that does not qualify loses regardless of the player's hand.
/// Otherwise the higher category wins, then the higher distinguishing card.
/// Hands still tied after that go to the dealer; no further kickers are compared.
pub fn showdown(player: &HandClassification, dealer: &HandClassification) -> Winner {
    if !dealer.is_playable_by_dealer {
        return Winner::Player;
    }
    let ord = player
        .category
        .cmp(&dealer.category)
        .then(player.distinguishing_card.cmp(&dealer.distinguishing_card));
    match ord {
        Ordering::Greater => Winner::Player,
        Ordering::Less | Ordering::Equal => Winner::Dealer,
    }
}

/// Return the winning classification of the two.
///
/// ```
/// use gta_poker::cards::parse_cards;
/// use gta_poker::evaluator::classify;
/// use gta_poker::showdown::resolve;
///
/// let player = classify(&parse_cards("2s 5d 9h").unwrap()).unwrap();
/// let dealer = classify(&parse_cards("Jc 7d 3h").unwrap()).unwrap();
/// // Jack-high dealer does not qualify.
/// assert!(std::ptr::eq(resolve(&player, &dealer), &player));
/// ```
pub fn resolve<'a>(
    player: &'a HandClassification,
    dealer: &'a HandClassification,
) -> &'a HandClassification {
    match showdown(player, dealer) {
        Winner::Player => player,
        Winner::Dealer => dealer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::evaluator::classify;

    fn of(s: &str) -> HandClassification {
        classify(&parse_cards(s).expect("valid cards")).expect("three cards")
    }

    #[test]
    fn unqualified_dealer_always_loses() {
        let weak_player = of("2s 4d 7h");
        let dealer = of("Jc 9d 8s");
        assert_eq!(showdown(&weak_player, &dealer), Winner::Player);
    }

    #[test]
    fn higher_category_wins() {
        assert_eq!(showdown(&of("5s 5d 2h"), &of("As Kd 3c")), Winner::Player);
        assert_eq!(showdown(&of("As Kd 3c"), &of("5s 5d 2h")), Winner::Dealer);
        // Straight beats flush in three-card play.
        assert_eq!(showdown(&of("4s 5d 6h"), &of("2c 9c Kc")), Winner::Player);
    }

    #[test]
    fn distinguishing_card_breaks_equal_categories() {
        assert_eq!(showdown(&of("Ks 8d 2h"), &of("Qc Jd 9s")), Winner::Player);
        assert_eq!(showdown(&of("8s 8d Ah"), &of("9c 9d 2s")), Winner::Dealer);
    }

    #[test]
    fn exact_ties_go_to_the_dealer() {
        // Player's second card is higher, but only the top card is compared.
        assert_eq!(showdown(&of("Ks Jd 2h"), &of("Kc 9d 3s")), Winner::Dealer);
        assert_eq!(showdown(&of("7s 7d Ah"), &of("7c 7h 2s")), Winner::Dealer);
    }
}
