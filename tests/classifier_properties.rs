use gta_poker::cards::{Card, Rank, Suit};
use gta_poker::deck::Deck;
use gta_poker::evaluator::{classify, Category, DEALER_QUALIFIER};
use gta_poker::showdown::{showdown, Winner};
use proptest::prelude::*;
use proptest::sample::subsequence;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn full_deck() -> Vec<Card> {
    Rank::ALL.iter().flat_map(|&r| Suit::ALL.iter().map(move |&s| Card::new(r, s))).collect()
}

fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    subsequence(full_deck(), n).prop_shuffle()
}

proptest! {
    #[test]
    fn exactly_one_category(cards in distinct_cards(3)) {
        let c = classify(&cards).unwrap();
        let flags = [
            c.is_straight_flush,
            c.is_three_of_kind,
            c.is_straight && !c.is_straight_flush,
            c.is_flush && !c.is_straight_flush,
            c.is_pair,
        ];
        let made = flags.iter().filter(|&&f| f).count();
        prop_assert!(made <= 1);
        prop_assert_eq!(made == 0, matches!(c.category, Category::HighCard));
        prop_assert!((1..=6).contains(&c.rank()));
    }

    #[test]
    fn order_does_not_matter(cards in distinct_cards(3)) {
        let a = classify(&cards).unwrap();
        let mut rev = cards.clone();
        rev.reverse();
        prop_assert_eq!(a, classify(&rev).unwrap());
    }

    #[test]
    fn distinguishing_card_is_in_hand(cards in distinct_cards(3)) {
        let c = classify(&cards).unwrap();
        prop_assert!(cards.iter().any(|k| k.value() == c.distinguishing_card));
        if !c.is_pair {
            let top = cards.iter().map(|k| k.value()).max().unwrap();
            prop_assert_eq!(c.distinguishing_card, top);
        }
    }

    #[test]
    fn dealer_plays_with_made_hand_or_queen(cards in distinct_cards(3)) {
        let c = classify(&cards).unwrap();
        let made = !matches!(c.category, Category::HighCard);
        prop_assert_eq!(
            c.is_playable_by_dealer,
            made || c.distinguishing_card >= DEALER_QUALIFIER
        );
    }

    #[test]
    fn showdown_respects_category_order(six in distinct_cards(6)) {
        let p = classify(&six[..3]).unwrap();
        let d = classify(&six[3..]).unwrap();
        let forward = showdown(&p, &d);
        // Identical hands tie, and ties go to a qualifying dealer.
        prop_assert_eq!(showdown(&p, &p), if p.is_playable_by_dealer { Winner::Dealer } else { Winner::Player });
        if d.is_playable_by_dealer && p.category > d.category {
            prop_assert_eq!(forward, Winner::Player);
        }
        if d.is_playable_by_dealer && p.category < d.category {
            prop_assert_eq!(forward, Winner::Dealer);
        }
    }
}

proptest! {
    #[test]
    fn draws_are_distinct_and_leave_the_deck(
        seed in any::<u64>(),
        first in 0usize..60,
        count in 0usize..60,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        let _ = deck.draw_random(first, &mut rng);
        let before = deck.len();

        let drawn = deck.draw_random(count, &mut rng);
        prop_assert_eq!(drawn.len(), count.min(before));
        prop_assert_eq!(deck.len(), before - drawn.len());
        let unique: HashSet<Card> = drawn.iter().copied().collect();
        prop_assert_eq!(unique.len(), drawn.len());
        prop_assert!(drawn.iter().all(|c| !deck.contains(*c)));
    }
}
