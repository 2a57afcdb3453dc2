//! gta-poker: three-card poker payout simulator and horse-odds calculator
//!
//! Goals:
//! - Pure, deterministic hand classification and round settlement
//! - Reproducible Monte-Carlo estimates when seeded
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: settle a round
//! ```
//! use gta_poker::cards::parse_cards;
//! use gta_poker::evaluator::{classify, Category};
//! use gta_poker::payout::compute_payout;
//!
//! let player = parse_cards("7s 7d Kh").unwrap();
//! let dealer = parse_cards("Qc 9d 4s").unwrap();
//! assert_eq!(classify(&player).unwrap().category, Category::Pair);
//!
//! // Pair beats queen-high: ante back plus even money, side bet pays 1:1.
//! let round = compute_payout(&player, &dealer, 100, 50).unwrap();
//! assert_eq!(round.payout, 250);
//! ```
//!
//! ## Growth curve
//! ```
//! use gta_poker::config::SimConfig;
//! use gta_poker::montecarlo::Estimator;
//!
//! let est = Estimator::new(SimConfig::default().with_seed(1).with_trials(50)).unwrap();
//! let after_three = est.expected_value_after(3).unwrap();
//! assert_eq!(after_three.rounds, 3);
//! ```
//!
//! ## TUI
//! Run the interactive growth-curve viewer with:
//! ```sh
//! cargo run --bin gta-poker
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod montecarlo;
pub mod odds;
pub mod payout;
pub mod report;
pub mod showdown;
pub mod simulator;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
