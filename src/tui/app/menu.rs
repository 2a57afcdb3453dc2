use crate::config::{DealPolicy, Execution};

use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Trials,
    MaxRounds,
    Deal,
    Execution,
}

const MENU_ITEMS: [MenuItem; 4] =
    [MenuItem::Trials, MenuItem::MaxRounds, MenuItem::Deal, MenuItem::Execution];

const TRIALS_STEP: usize = 100;
const MAX_ROUNDS_LIMIT: usize = 500;

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Trials => format!("Trials per point: {}", app.cfg_trials),
            MenuItem::MaxRounds => format!("Rounds: 1..{}", app.cfg_max_rounds),
            MenuItem::Deal => format!("Dealing: {}", app.cfg_deal.label()),
            MenuItem::Execution => format!("Execution: {}", app.cfg_execution.label()),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Trials => {
                app.cfg_trials = app.cfg_trials.saturating_add(TRIALS_STEP);
            }
            MenuItem::MaxRounds => {
                if app.cfg_max_rounds < MAX_ROUNDS_LIMIT {
                    app.cfg_max_rounds += 1;
                }
            }
            MenuItem::Deal => app.cfg_deal = next_deal(app.cfg_deal),
            MenuItem::Execution => app.cfg_execution = next_execution(app.cfg_execution),
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Trials => {
                app.cfg_trials = app.cfg_trials.saturating_sub(TRIALS_STEP).max(TRIALS_STEP);
            }
            MenuItem::MaxRounds => {
                if app.cfg_max_rounds > 1 {
                    app.cfg_max_rounds -= 1;
                }
            }
            // Two-valued settings: both directions toggle.
            MenuItem::Deal => app.cfg_deal = next_deal(app.cfg_deal),
            MenuItem::Execution => app.cfg_execution = next_execution(app.cfg_execution),
        }
    }
}

fn next_deal(deal: DealPolicy) -> DealPolicy {
    match deal {
        DealPolicy::SharedDeck => DealPolicy::IndependentDecks,
        DealPolicy::IndependentDecks => DealPolicy::SharedDeck,
    }
}

fn next_execution(execution: Execution) -> Execution {
    match execution {
        Execution::Parallel => Execution::Sequential,
        Execution::Sequential => Execution::Parallel,
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        match self.scene {
            Scene::Menu => self.cancel_menu(),
            Scene::Curve => self.open_menu(),
        }
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.menu_index = 0;
        let cfg = self.config();
        let (trials, max_rounds, deal, execution) =
            (cfg.trials, cfg.max_rounds, cfg.deal, cfg.execution);
        self.cfg_trials = trials;
        self.cfg_max_rounds = max_rounds;
        self.cfg_deal = deal;
        self.cfg_execution = execution;
        self.scene = Scene::Menu;
    }

    pub fn apply_menu(&mut self) {
        let config = self
            .base_config()
            .clone()
            .with_trials(self.cfg_trials.max(1))
            .with_max_rounds(self.cfg_max_rounds.max(1))
            .with_deal(self.cfg_deal)
            .with_execution(self.cfg_execution);
        self.start(config);
    }

    /// Leave the menu without applying; only possible once a curve exists.
    pub fn cancel_menu(&mut self) {
        if self.has_estimator() {
            self.scene = Scene::Curve;
        }
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
