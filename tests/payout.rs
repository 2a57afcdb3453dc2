use gta_poker::cards::parse_cards;
use gta_poker::config::SimConfig;
use gta_poker::evaluator::{classify, Category};
use gta_poker::payout::{compute_payout, PayTable, PayoutCalculator, RoundTiming};
use gta_poker::showdown::Winner;

fn cards(s: &str) -> Vec<gta_poker::cards::Card> {
    parse_cards(s).unwrap()
}

#[test]
fn side_bet_table() {
    let t = PayTable::default();
    assert_eq!(t.side_bet(Category::StraightFlush, 1_000), 40_000);
    assert_eq!(t.side_bet(Category::ThreeOfAKind, 1_000), 30_000);
    assert_eq!(t.side_bet(Category::Straight, 1_000), 6_000);
    assert_eq!(t.side_bet(Category::Flush, 1_000), 4_000);
    assert_eq!(t.side_bet(Category::Pair, 1_000), 1_000);
    assert_eq!(t.side_bet(Category::HighCard, 1_000), -1_000);
}

#[test]
fn ante_bonus_table() {
    let t = PayTable::default();
    assert_eq!(t.ante_bonus(Category::StraightFlush, 10), 50);
    assert_eq!(t.ante_bonus(Category::ThreeOfAKind, 10), 40);
    assert_eq!(t.ante_bonus(Category::Straight, 10), 10);
    for c in [Category::Flush, Category::Pair, Category::HighCard] {
        assert_eq!(t.ante_bonus(c, 10), 0);
    }
}

#[test]
fn zero_side_bet_costs_nothing() {
    let r = compute_payout(&cards("Ks Jd 8h"), &cards("Qc 7d 2s"), 100, 0).unwrap();
    assert_eq!(r.payout, 200);
}

#[test]
fn dealer_win_ignores_player_side_bet_hand() {
    // The player's pair would pay the side bet, but the round is lost.
    let r = compute_payout(&cards("3c 3d 9h"), &cards("8c 8s Ah"), 1_000, 500).unwrap();
    assert_eq!(r.winner, Winner::Dealer);
    assert_eq!(r.payout, 0);
    assert_eq!(r.time_cost, 190);
}

#[test]
fn calculator_uses_custom_table_and_timing() {
    let calc = PayoutCalculator::new(
        PayTable { ante_bonus: [10, 5, 2], side_bet: [50, 20, 5, 3, 2] },
        RoundTiming { game_secs: 30, rest_secs: 60 },
    );
    let r = calc.compute(&cards("4h 5d 6c"), &cards("Qc 7d 2s"), 100, 10).unwrap();
    assert_eq!(r.payout, 200 + 200 + 50);
    assert_eq!(r.time_cost, 30);

    let lost = calc.compute(&cards("4h 7d 9c"), &cards("Qc 7s 2s"), 100, 10).unwrap();
    assert_eq!(lost.time_cost, 90);
}

#[test]
fn settle_matches_compute() {
    let calc = SimConfig::default().payout_calculator();
    let p = cards("Jh Qh Kh");
    let d = cards("Ac 2d 5s");
    let a = calc.compute(&p, &d, 500, 100).unwrap();
    let b = calc.settle(classify(&p).unwrap(), classify(&d).unwrap(), 500, 100);
    assert_eq!(a, b);
    assert_eq!(a.player.category, Category::StraightFlush);
}
