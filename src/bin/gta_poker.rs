use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use gta_poker::config::{DealPolicy, Execution, SimConfig};
use gta_poker::evaluator::classify_hand;
use gta_poker::hand::ThreeCardHand;
use gta_poker::montecarlo::{Estimator, Expectation};
use gta_poker::report::{curve_header, curve_row};
use gta_poker::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "gta-poker", version, about = "Three-card poker bankroll simulator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate average chips and playing time for 1..=rounds rounds
    Simulate(SimulateArgs),
    /// Classify a three-card hand, e.g. `classify "As Ks Qs"`
    Classify {
        /// Three cards separated by spaces or commas
        cards: String,
    },
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// Trials per round count
    #[arg(short, long, default_value_t = 1_000)]
    trials: usize,
    /// Largest round count
    #[arg(short, long, default_value_t = 50)]
    rounds: usize,
    /// Starting bankroll
    #[arg(long, default_value_t = 100_000)]
    chips: i64,
    /// Fixed seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// How player and dealer hands are dealt
    #[arg(long, value_enum, default_value_t = DealArg::Shared)]
    deal: DealArg,
    /// Run trials on the current thread
    #[arg(long)]
    sequential: bool,
    /// Show the curve in the interactive viewer
    #[arg(long)]
    tui: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DealArg {
    Shared,
    Independent,
}

impl From<DealArg> for DealPolicy {
    fn from(arg: DealArg) -> Self {
        match arg {
            DealArg::Shared => DealPolicy::SharedDeck,
            DealArg::Independent => DealPolicy::IndependentDecks,
        }
    }
}

impl SimulateArgs {
    fn config(&self) -> SimConfig {
        let config = SimConfig::default()
            .with_trials(self.trials)
            .with_max_rounds(self.rounds)
            .with_initial_chips(self.chips)
            .with_deal(self.deal.into())
            .with_execution(if self.sequential { Execution::Sequential } else { Execution::Parallel });
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_tui(config: SimConfig) -> anyhow::Result<()> {
    let mut terminal = setup_terminal().context("failed to enter raw mode")?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::new(config);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    Ok(res?)
}

fn simulate(config: SimConfig) -> anyhow::Result<()> {
    let estimator = Estimator::new(config)?;
    println!("{}", curve_header());
    let mut print_row = |p: &Expectation| println!("{}", curve_row(p));
    estimator.growth_curve(&mut print_row)?;
    Ok(())
}

fn classify(cards: &str) -> anyhow::Result<()> {
    let hand: ThreeCardHand = cards.parse().with_context(|| format!("invalid hand '{cards}'"))?;
    let c = classify_hand(&hand);
    println!("{hand}");
    println!("  {}", c.describe(false));
    println!("  category: {} (tier {})", c.category.label(), c.category.tier());
    println!("  distinguishing card: {}", c.distinguishing_card);
    println!(
        "  flush: {}  straight: {}  pair: {}  trips: {}",
        c.is_flush, c.is_straight, c.is_pair, c.is_three_of_kind
    );
    println!("  dealer would play: {}", c.is_playable_by_dealer);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Classify { cards }) => classify(&cards),
        Some(Command::Simulate(args)) => {
            let config = args.config();
            if args.tui && io::stdout().is_terminal() {
                run_tui(config)
            } else {
                simulate(config)
            }
        }
        None if io::stdout().is_terminal() => run_tui(SimConfig::default()),
        None => simulate(SimConfig::default()),
    }
}
