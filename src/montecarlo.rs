//! Monte-Carlo estimate of bankroll and playing time after a number of rounds.
//!
//! Every trial starts from the configured bankroll at time zero and plays the
//! round simulator `N` times. The estimate for `N` is the floored mean of the
//! trials' final bankroll and elapsed time. Trials share nothing, so they may
//! run on the rayon pool; each one draws from its own ChaCha8 stream, which
//! keeps seeded runs identical whatever the scheduling.

use crate::config::{Execution, SimConfig};
use crate::simulator::{RoundState, SimError, Simulator};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// Averaged outcome after a fixed number of rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expectation {
    pub rounds: usize,
    pub avg_bankroll: i64,
    pub avg_time_secs: u64,
}

/// Receives growth-curve points as they are produced.
pub trait CurveObserver {
    fn observe(&mut self, point: &Expectation);
}

impl<F> CurveObserver for F
where
    F: FnMut(&Expectation),
{
    fn observe(&mut self, point: &Expectation) {
        self(point)
    }
}

/// Runs batches of independent trials under one configuration.
#[derive(Debug, Clone)]
pub struct Estimator {
    config: SimConfig,
    simulator: Simulator,
    base_seed: u64,
}

impl Estimator {
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let simulator = Simulator::new(&config)?;
        let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Ok(Self { config, simulator, base_seed })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    /// Estimate after `num_rounds` rounds with the configured trial count.
    pub fn expected_value_after(&self, num_rounds: usize) -> Result<Expectation, SimError> {
        self.expected_value_with_trials(num_rounds, self.config.trials)
    }

    pub fn expected_value_with_trials(
        &self,
        num_rounds: usize,
        trials: usize,
    ) -> Result<Expectation, SimError> {
        if trials == 0 {
            return Err(SimError::NoTrials);
        }
        let finals: Vec<RoundState> = match self.config.execution {
            Execution::Parallel => (0..trials)
                .into_par_iter()
                .map(|t| self.run_trial(num_rounds, t))
                .collect::<Result<_, _>>()?,
            Execution::Sequential => {
                (0..trials).map(|t| self.run_trial(num_rounds, t)).collect::<Result<_, _>>()?
            }
        };

        let (avg_bankroll, avg_time_secs) = floored_mean(&finals);
        let point = Expectation { rounds: num_rounds, avg_bankroll, avg_time_secs };
        log::debug!(
            "{num_rounds} rounds x {trials} trials: avg chips {} avg time {}s",
            point.avg_bankroll,
            point.avg_time_secs
        );
        Ok(point)
    }

    /// Estimate for every round count from 1 to `max_rounds`, in order.
    pub fn growth_curve<O>(&self, observer: &mut O) -> Result<Vec<Expectation>, SimError>
    where
        O: CurveObserver + ?Sized,
    {
        log::info!(
            "growth curve: {} round counts, {} trials each, {}",
            self.config.max_rounds,
            self.config.trials,
            self.config.deal.label()
        );
        let mut curve = Vec::with_capacity(self.config.max_rounds);
        for rounds in 1..=self.config.max_rounds {
            let point = self.expected_value_after(rounds).inspect_err(|e| {
                log::warn!("estimate after {rounds} rounds failed: {e}");
            })?;
            observer.observe(&point);
            curve.push(point);
        }
        log::info!("growth curve complete");
        Ok(curve)
    }

    fn run_trial(&self, num_rounds: usize, trial: usize) -> Result<RoundState, SimError> {
        let mut rng = self.trial_rng(num_rounds, trial);
        let start = RoundState::new(self.config.initial_chips, 0);
        self.simulator.play_trial(start, num_rounds, &mut rng)
    }

    fn trial_rng(&self, num_rounds: usize, trial: usize) -> ChaCha8Rng {
        // Distinct round counts get unrelated draws.
        let seed = self.base_seed ^ (num_rounds as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(trial as u64);
        rng
    }
}

/// Mean bankroll and clock, both rounded toward negative infinity. `finals` must not be empty.
fn floored_mean(finals: &[RoundState]) -> (i64, u64) {
    let n = finals.len().max(1) as i128;
    let chips: i128 = finals.iter().map(|s| i128::from(s.chips)).sum();
    let secs: u128 = finals.iter().map(|s| u128::from(s.elapsed_secs)).sum();
    (chips.div_euclid(n) as i64, (secs / n as u128) as u64)
}

/// Estimate after `num_rounds` rounds over `trials` trials with the default configuration.
///
/// ```
/// use gta_poker::montecarlo::expected_value_after;
///
/// let e = expected_value_after(0, 10).unwrap();
/// assert_eq!(e.avg_bankroll, 100_000);
/// assert_eq!(e.avg_time_secs, 0);
/// ```
pub fn expected_value_after(num_rounds: usize, trials: usize) -> Result<Expectation, SimError> {
    Estimator::new(SimConfig::default())?.expected_value_with_trials(num_rounds, trials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DealPolicy;

    fn seeded(trials: usize) -> Estimator {
        Estimator::new(SimConfig::default().with_seed(5).with_trials(trials)).unwrap()
    }

    #[test]
    fn zero_rounds_returns_initial_state() {
        let e = seeded(25).expected_value_after(0).unwrap();
        assert_eq!(e, Expectation { rounds: 0, avg_bankroll: 100_000, avg_time_secs: 0 });
    }

    #[test]
    fn mean_is_floored() {
        let finals = [RoundState::new(100, 40), RoundState::new(101, 190)];
        assert_eq!(floored_mean(&finals), (100, 115));
        let finals = [RoundState::new(2, 1), RoundState::new(2, 1), RoundState::new(3, 1)];
        assert_eq!(floored_mean(&finals), (2, 1));
        // Floor, not truncation toward zero.
        let finals = [RoundState::new(-1, 0), RoundState::new(-2, 0)];
        assert_eq!(floored_mean(&finals).0, -2);
    }

    #[test]
    fn zero_trials_is_an_error() {
        assert_eq!(seeded(1).expected_value_with_trials(3, 0), Err(SimError::NoTrials));
    }

    #[test]
    fn parallel_and_sequential_agree_with_a_seed() {
        let cfg = SimConfig::default().with_seed(77).with_trials(200);
        let par = Estimator::new(cfg.clone()).unwrap().expected_value_after(10).unwrap();
        let seq = Estimator::new(cfg.with_execution(Execution::Sequential))
            .unwrap()
            .expected_value_after(10)
            .unwrap();
        assert_eq!(par, seq);
    }

    #[test]
    fn one_round_time_is_between_win_and_loss_costs() {
        let e = seeded(300).expected_value_after(1).unwrap();
        assert!((40..=190).contains(&e.avg_time_secs));
        // A loss never costs chips; only a forfeited side bet can, and the
        // opening bankroll leaves nothing for a side bet.
        assert!(e.avg_bankroll >= 100_000);
    }

    #[test]
    fn growth_curve_reports_every_round_count() {
        let cfg = SimConfig::default()
            .with_seed(1)
            .with_trials(20)
            .with_max_rounds(5)
            .with_deal(DealPolicy::IndependentDecks);
        let est = Estimator::new(cfg).unwrap();
        let mut seen = Vec::new();
        let curve = est.growth_curve(&mut |p: &Expectation| seen.push(p.rounds)).unwrap();
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
        assert_eq!(curve.len(), 5);
        assert!(curve[4].avg_time_secs > curve[0].avg_time_secs);
    }
}
