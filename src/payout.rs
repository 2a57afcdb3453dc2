//! Round settlement: ante bonus, side bet and the time a round costs.

use crate::cards::Card;
use crate::evaluator::{classify, Category, HandClassification};
use crate::hand::HandError;
use crate::showdown::{showdown, Winner};

/// Multipliers keyed by the player's hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayTable {
    /// Ante bonus multipliers: straight flush, trips, straight.
    pub ante_bonus: [i64; 3],
    /// Side-bet multipliers: straight flush, trips, straight, flush, pair.
    pub side_bet: [i64; 5],
}

impl Default for PayTable {
    fn default() -> Self {
        Self { ante_bonus: [5, 4, 1], side_bet: [40, 30, 6, 4, 1] }
    }
}

impl PayTable {
    /// Bonus on top of the ante return; only the three strongest categories earn one.
    pub fn ante_bonus(&self, category: Category, ante: i64) -> i64 {
        let mult = match category {
            Category::StraightFlush => self.ante_bonus[0],
            Category::ThreeOfAKind => self.ante_bonus[1],
            Category::Straight => self.ante_bonus[2],
            Category::Flush | Category::Pair | Category::HighCard => 0,
        };
        ante.saturating_mul(mult)
    }

    /// Side-bet result; a high card forfeits the stake.
    pub fn side_bet(&self, category: Category, stake: i64) -> i64 {
        match category {
            Category::StraightFlush => stake.saturating_mul(self.side_bet[0]),
            Category::ThreeOfAKind => stake.saturating_mul(self.side_bet[1]),
            Category::Straight => stake.saturating_mul(self.side_bet[2]),
            Category::Flush => stake.saturating_mul(self.side_bet[3]),
            Category::Pair => stake.saturating_mul(self.side_bet[4]),
            Category::HighCard => stake.saturating_neg(),
        }
    }
}

/// Seconds spent per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTiming {
    /// Length of one game.
    pub game_secs: u64,
    /// Wait before the next game after a loss.
    pub rest_secs: u64,
}

impl Default for RoundTiming {
    fn default() -> Self {
        Self { game_secs: 40, rest_secs: 150 }
    }
}

/// Outcome of settling one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundPayout {
    pub payout: i64,
    pub time_cost: u64,
    pub winner: Winner,
    pub player: HandClassification,
    pub dealer: HandClassification,
}

/// Settles rounds against a pay table and timing model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayoutCalculator {
    pub table: PayTable,
    pub timing: RoundTiming,
}

impl PayoutCalculator {
    pub fn new(table: PayTable, timing: RoundTiming) -> Self {
        Self { table, timing }
    }

    pub fn compute(
        &self,
        player_cards: &[Card],
        dealer_cards: &[Card],
        ante: i64,
        side_bet: i64,
    ) -> Result<RoundPayout, HandError> {
        let player = classify(player_cards)?;
        let dealer = classify(dealer_cards)?;
        Ok(self.settle(player, dealer, ante, side_bet))
    }

    /// Settle two classified hands.
    pub fn settle(
        &self,
        player: HandClassification,
        dealer: HandClassification,
        ante: i64,
        side_bet: i64,
    ) -> RoundPayout {
        let winner = showdown(&player, &dealer);
        if winner == Winner::Dealer {
            return RoundPayout {
                payout: 0,
                time_cost: self.timing.game_secs.saturating_add(self.timing.rest_secs),
                winner,
                player,
                dealer,
            };
        }

        let ante_bonus = self.table.ante_bonus(player.category, ante);
        let side = self.table.side_bet(player.category, side_bet);
        // A folding dealer only returns the ante.
        let main = if dealer.is_playable_by_dealer { ante.saturating_mul(2) } else { ante };
        RoundPayout {
            payout: main.saturating_add(ante_bonus).saturating_add(side),
            time_cost: self.timing.game_secs,
            winner,
            player,
            dealer,
        }
    }
}

/// Settle one round with the default pay table and timing.
///
/// ```
/// use gta_poker::cards::parse_cards;
/// use gta_poker::payout::compute_payout;
///
/// let player = parse_cards("Qs Ks As").unwrap();
/// let dealer = parse_cards("Qh 7d 2c").unwrap();
/// let round = compute_payout(&player, &dealer, 100, 50).unwrap();
/// assert_eq!(round.payout, 2700);
/// assert_eq!(round.time_cost, 40);
/// ```
pub fn compute_payout(
    player_cards: &[Card],
    dealer_cards: &[Card],
    ante: i64,
    side_bet: i64,
) -> Result<RoundPayout, HandError> {
    PayoutCalculator::default().compute(player_cards, dealer_cards, ante, side_bet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn pay(player: &str, dealer: &str, ante: i64, side: i64) -> RoundPayout {
        let p = parse_cards(player).unwrap();
        let d = parse_cards(dealer).unwrap();
        compute_payout(&p, &d, ante, side).unwrap()
    }

    #[test]
    fn dealer_win_pays_nothing_and_costs_rest() {
        let r = pay("2s 5d 9h", "Ac 4d 7s", 100, 50);
        assert_eq!(r.winner, Winner::Dealer);
        assert_eq!(r.payout, 0);
        assert_eq!(r.time_cost, 190);
    }

    #[test]
    fn straight_flush_against_qualified_dealer() {
        let r = pay("Qs Ks As", "Qh 7d 2c", 100, 50);
        assert_eq!(r.payout, 200 + 500 + 2000);
    }

    #[test]
    fn high_card_win_forfeits_side_bet() {
        let r = pay("Ks Jd 8h", "Qc 7d 2s", 100, 50);
        assert_eq!(r.winner, Winner::Player);
        assert_eq!(r.payout, 150);
        assert_eq!(r.time_cost, 40);
    }

    #[test]
    fn folding_dealer_returns_only_the_ante() {
        // Trips against a jack-high dealer: 100 + 400 + 30 * 50.
        let r = pay("9s 9d 9h", "Jc 7d 2s", 100, 50);
        assert_eq!(r.payout, 100 + 400 + 1500);
    }

    #[test]
    fn flush_and_pair_earn_no_ante_bonus() {
        assert_eq!(pay("2h 9h Kh", "Qc 7d 2s", 100, 50).payout, 200 + 200);
        assert_eq!(pay("Ah Ad 3c", "Qc 7d 2s", 100, 50).payout, 200 + 50);
        assert_eq!(pay("4h 5d 6c", "Qc 7d 2s", 100, 50).payout, 200 + 100 + 300);
    }

    #[test]
    fn huge_wagers_saturate_instead_of_wrapping() {
        let r = pay("Qs Ks As", "Qh 7d 2c", i64::MAX / 2, i64::MAX / 2);
        assert_eq!(r.payout, i64::MAX);
    }

    #[test]
    fn invalid_hand_size_is_reported() {
        let p = parse_cards("As Ks").unwrap();
        let d = parse_cards("Qh 7d 2c").unwrap();
        assert_eq!(compute_payout(&p, &d, 100, 50), Err(HandError::InvalidHandSize(2)));
    }
}
