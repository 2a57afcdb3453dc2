use crate::cards::Card;
use crate::config::{ConfigError, DealPolicy, SimConfig};
use crate::deck::{draw_fresh, Deck};
use crate::hand::HandError;
use crate::payout::{PayoutCalculator, RoundPayout};
use rand::Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimError {
    #[error("hand error: {0}")]
    Hand(#[from] HandError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("at least one trial is required")]
    NoTrials,
    #[error("bankroll or clock overflowed after {chips} chips and {elapsed_secs}s")]
    Overflow { chips: i64, elapsed_secs: u64 },
}

/// Bankroll and clock of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundState {
    pub chips: i64,
    pub elapsed_secs: u64,
}

impl RoundState {
    pub const fn new(chips: i64, elapsed_secs: u64) -> Self {
        Self { chips, elapsed_secs }
    }
}

/// Ante and side bet for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wagers {
    pub ante: i64,
    pub side_bet: i64,
}

/// Plays single rounds under a fixed configuration.
#[derive(Debug, Clone)]
pub struct Simulator {
    max_ante: i64,
    max_side_bet: i64,
    side_bet_unit: i64,
    deal: DealPolicy,
    calculator: PayoutCalculator,
}

impl Simulator {
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        config.validate_table()?;
        Ok(Self {
            max_ante: config.max_ante,
            max_side_bet: config.max_side_bet,
            side_bet_unit: config.side_bet_unit,
            deal: config.deal,
            calculator: config.payout_calculator(),
        })
    }

    /// Size wagers from the current bankroll: half the bankroll up to the ante cap,
    /// then what is left after ante and play, rounded down to the unit and capped.
    pub fn wagers(&self, chips: i64) -> Wagers {
        let ante = self.max_ante.min(chips / 2).max(0);
        let rest = (chips - 2 * ante).max(0);
        let side_bet = self.max_side_bet.min(rest / self.side_bet_unit * self.side_bet_unit);
        Wagers { ante, side_bet }
    }

    /// Deal player and dealer hands according to the deal policy.
    pub fn deal<R: Rng + ?Sized>(&self, rng: &mut R) -> (Vec<Card>, Vec<Card>) {
        match self.deal {
            DealPolicy::SharedDeck => {
                let mut deck = Deck::standard();
                let player = deck.draw_random(3, rng);
                let dealer = deck.draw_random(3, rng);
                (player, dealer)
            }
            DealPolicy::IndependentDecks => (draw_fresh(3, rng), draw_fresh(3, rng)),
        }
    }

    /// Settle a round on already dealt hands.
    pub fn settle(
        &self,
        state: &RoundState,
        player: &[Card],
        dealer: &[Card],
    ) -> Result<(RoundState, RoundPayout), SimError> {
        let Wagers { ante, side_bet } = self.wagers(state.chips);
        let round = self.calculator.compute(player, dealer, ante, side_bet)?;
        let overflow =
            || SimError::Overflow { chips: state.chips, elapsed_secs: state.elapsed_secs };
        let next = RoundState {
            chips: state.chips.checked_add(round.payout).ok_or_else(overflow)?,
            elapsed_secs: state.elapsed_secs.checked_add(round.time_cost).ok_or_else(overflow)?,
        };
        log::trace!(
            "ante {ante} side {side_bet}: {:?} wins, payout {} -> chips {}",
            round.winner,
            round.payout,
            next.chips
        );
        Ok((next, round))
    }

    /// Deal and settle one round.
    pub fn play_round<R: Rng + ?Sized>(
        &self,
        state: &RoundState,
        rng: &mut R,
    ) -> Result<RoundState, SimError> {
        let (player, dealer) = self.deal(rng);
        self.settle(state, &player, &dealer).map(|(next, _)| next)
    }

    /// Play `rounds` rounds in sequence from `start`.
    pub fn play_trial<R: Rng + ?Sized>(
        &self,
        start: RoundState,
        rounds: usize,
        rng: &mut R,
    ) -> Result<RoundState, SimError> {
        (0..rounds).try_fold(start, |state, _| self.play_round(&state, rng))
    }
}

/// Play one round with the default configuration.
///
/// ```
/// use gta_poker::simulator::simulate_round;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let next = simulate_round(100_000, 0, &mut rng).unwrap();
/// assert!(next.elapsed_secs == 40 || next.elapsed_secs == 190);
/// ```
pub fn simulate_round<R: Rng + ?Sized>(
    bankroll: i64,
    elapsed_secs: u64,
    rng: &mut R,
) -> Result<RoundState, SimError> {
    Simulator::new(&SimConfig::default())?.play_round(&RoundState::new(bankroll, elapsed_secs), rng)
}
