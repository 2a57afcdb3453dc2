use crate::cards::Card;
use crate::config::{DealPolicy, Execution, SimConfig};
use crate::montecarlo::{Estimator, Expectation};
use crate::payout::RoundPayout;
use crate::simulator::RoundState;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Curve,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    TogglePause,
    Restart,
}

/// One dealt round shown next to the curve.
#[derive(Debug, Clone)]
pub struct SampleRound {
    pub player: Vec<Card>,
    pub dealer: Vec<Card>,
    pub result: RoundPayout,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_trials: usize,
    pub cfg_max_rounds: usize,
    pub cfg_deal: DealPolicy,
    pub cfg_execution: Execution,
    pub curve: Vec<Expectation>,
    pub sample: Option<SampleRound>,
    pub paused: bool,
    base: SimConfig,
    estimator: Option<Estimator>,
    sample_rng: StdRng,
    error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl AppState {
    pub fn new(config: SimConfig) -> Self {
        let sample_rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => {
                let mut seed = [0u8; 32];
                rand::rng().fill_bytes(&mut seed);
                StdRng::from_seed(seed)
            }
        };
        Self {
            scene: Scene::Menu,
            menu_index: 0,
            cfg_trials: config.trials,
            cfg_max_rounds: config.max_rounds,
            cfg_deal: config.deal,
            cfg_execution: config.execution,
            curve: Vec::new(),
            sample: None,
            paused: false,
            base: config,
            estimator: None,
            sample_rng,
            error: None,
        }
    }

    /// Configuration the curve is (or will be) computed with.
    pub fn config(&self) -> &SimConfig {
        self.estimator.as_ref().map_or(&self.base, Estimator::config)
    }

    pub fn has_estimator(&self) -> bool {
        self.estimator.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_done(&self) -> bool {
        self.curve.len() >= self.config().max_rounds
    }

    /// Dispatch an input action. Returns `true` when state changed.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::MenuNext if self.scene == Scene::Menu => self.menu_next(),
            InputAction::MenuPrev if self.scene == Scene::Menu => self.menu_prev(),
            InputAction::MenuInc if self.scene == Scene::Menu => self.menu_inc(),
            InputAction::MenuDec if self.scene == Scene::Menu => self.menu_dec(),
            InputAction::MenuApply if self.scene == Scene::Menu => self.apply_menu(),
            InputAction::MenuCancel if self.scene == Scene::Menu => self.cancel_menu(),
            InputAction::ToggleMenu => self.toggle_menu(),
            InputAction::TogglePause if self.scene == Scene::Curve => {
                self.paused = !self.paused;
            }
            InputAction::Restart if self.scene == Scene::Curve => self.restart(),
            _ => return false,
        }
        true
    }

    /// Advance the curve by one round count and deal a fresh sample round.
    pub fn on_tick(&mut self) {
        if self.scene != Scene::Curve || self.paused || self.is_done() {
            return;
        }
        let Some(est) = self.estimator.as_ref() else { return };
        let rounds = self.curve.len() + 1;
        let estimate = est.expected_value_after(rounds);

        let sim = est.simulator();
        let (player, dealer) = sim.deal(&mut self.sample_rng);
        let start = RoundState::new(est.config().initial_chips, 0);
        let sample = sim
            .settle(&start, &player, &dealer)
            .map(|(_, result)| SampleRound { player, dealer, result });

        match estimate.and_then(|point| sample.map(|sample| (point, sample))) {
            Ok((point, sample)) => {
                self.curve.push(point);
                self.sample = Some(sample);
            }
            Err(e) => {
                log::warn!("tick for {rounds} rounds failed: {e}");
                self.error = Some(e.to_string());
                self.paused = true;
            }
        }
    }

    pub fn restart(&mut self) {
        self.curve.clear();
        self.sample = None;
        self.error = None;
        self.paused = false;
    }

    pub(crate) fn start(&mut self, config: SimConfig) {
        self.restart();
        match Estimator::new(config) {
            Ok(est) => {
                self.base = est.config().clone();
                self.estimator = Some(est);
                self.scene = Scene::Curve;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }

    pub(crate) fn base_config(&self) -> &SimConfig {
        &self.base
    }
}
