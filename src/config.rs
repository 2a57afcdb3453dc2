use crate::payout::{PayTable, PayoutCalculator, RoundTiming};

/// How the two hands of a round are dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum DealPolicy {
    /// Both hands come from one fresh deck, so no card appears twice.
    #[default]
    SharedDeck,
    /// Each hand comes from its own fresh deck; a card may appear in both hands.
    IndependentDecks,
}

impl DealPolicy {
    pub fn label(self) -> &'static str {
        match self {
            DealPolicy::SharedDeck => "Shared deck",
            DealPolicy::IndependentDecks => "Independent decks",
        }
    }
}

/// How trials for one round count are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Execution {
    /// Spread trials over the rayon thread pool.
    #[default]
    Parallel,
    /// Run trials one after another on the calling thread.
    Sequential,
}

impl Execution {
    pub fn label(self) -> &'static str {
        match self {
            Execution::Parallel => "Parallel",
            Execution::Sequential => "Sequential",
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("at least one trial is required")]
    ZeroTrials,
    #[error("side bet unit must be positive")]
    ZeroSideBetUnit,
    #[error("initial chips must not be negative, got {0}")]
    NegativeChips(i64),
}

/// Every knob of the simulation model.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct SimConfig {
    pub initial_chips: i64,
    pub max_ante: i64,
    pub max_side_bet: i64,
    /// Side bets are rounded down to a multiple of this.
    pub side_bet_unit: i64,
    pub trials: usize,
    /// Largest round count on the growth curve.
    pub max_rounds: usize,
    pub deal: DealPolicy,
    pub execution: Execution,
    /// Fixed seed for reproducible runs; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub pay_table: PayTable,
    pub timing: RoundTiming,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            initial_chips: 100_000,
            max_ante: 50_000,
            max_side_bet: 5_000,
            side_bet_unit: 1_000,
            trials: 1_000,
            max_rounds: 50,
            deal: DealPolicy::default(),
            execution: Execution::default(),
            seed: None,
            pay_table: PayTable::default(),
            timing: RoundTiming::default(),
        }
    }
}

impl SimConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_initial_chips(mut self, chips: i64) -> Self {
        self.initial_chips = chips;
        self
    }

    pub fn with_deal(mut self, deal: DealPolicy) -> Self {
        self.deal = deal;
        self
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn with_pay_table(mut self, table: PayTable) -> Self {
        self.pay_table = table;
        self
    }

    pub fn with_timing(mut self, timing: RoundTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Full check, including the Monte-Carlo settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        self.validate_table()
    }

    /// Check only what a single round depends on: bankroll and wager sizing.
    pub fn validate_table(&self) -> Result<(), ConfigError> {
        if self.side_bet_unit <= 0 {
            return Err(ConfigError::ZeroSideBetUnit);
        }
        if self.initial_chips < 0 {
            return Err(ConfigError::NegativeChips(self.initial_chips));
        }
        Ok(())
    }

    pub fn payout_calculator(&self) -> PayoutCalculator {
        PayoutCalculator::new(self.pay_table, self.timing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_table_game() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.initial_chips, 100_000);
        assert_eq!(cfg.max_ante, 50_000);
        assert_eq!(cfg.max_side_bet, 5_000);
        assert_eq!(cfg.side_bet_unit, 1_000);
        assert_eq!(cfg.trials, 1_000);
        assert_eq!(cfg.max_rounds, 50);
        assert_eq!(cfg.deal, DealPolicy::SharedDeck);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_sets_fields() {
        let cfg = SimConfig::default()
            .with_seed(9)
            .with_trials(10)
            .with_max_rounds(3)
            .with_deal(DealPolicy::IndependentDecks)
            .with_execution(Execution::Sequential);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.trials, 10);
        assert_eq!(cfg.max_rounds, 3);
        assert_eq!(cfg.deal, DealPolicy::IndependentDecks);
        assert_eq!(cfg.execution, Execution::Sequential);
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert_eq!(SimConfig::default().with_trials(0).validate(), Err(ConfigError::ZeroTrials));
        let mut cfg = SimConfig::default();
        cfg.side_bet_unit = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroSideBetUnit));
        assert_eq!(
            SimConfig::default().with_initial_chips(-1).validate(),
            Err(ConfigError::NegativeChips(-1))
        );
    }

    #[test]
    fn table_check_ignores_trial_count() {
        let cfg = SimConfig::default().with_trials(0);
        assert!(cfg.validate_table().is_ok());
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroTrials));
    }
}
