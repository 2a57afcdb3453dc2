//! Horse-race odds: posted odds to implied probability, normalized against the book.
//!
//! Odds are "N to 1". A runner posted at `N` has implied probability
//! `1 / (N + 1)`. The book total is the sum over all runners; a total under 1
//! means the posted odds are more generous than fair. Each runner's estimate
//! is its implied probability rescaled so the field sums to 1.

use std::fmt;
use std::str::FromStr;

/// Estimates above this are called out.
pub const STANDOUT_THRESHOLD: f64 = 0.4;

/// Implied win probability for odds of `odds` to 1. Zero odds mark a blank runner.
///
/// ```
/// use gta_poker::odds::implied_probability;
///
/// assert_eq!(implied_probability(3.0), 0.25);
/// assert_eq!(implied_probability(0.0), 0.0);
/// ```
pub fn implied_probability(odds: f64) -> f64 {
    if odds == 0.0 {
        return 0.0;
    }
    1.0 / (odds + 1.0)
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum OddsError {
    #[error("runner #{runner}: odds must not be negative, got {odds}")]
    Negative { runner: usize, odds: f64 },
    #[error("runner #{runner}: odds must be a finite number")]
    NotFinite { runner: usize },
    #[error("runner #{runner}: cannot parse odds '{input}'")]
    Parse { runner: usize, input: String },
}

/// How the book total compares with a fair market.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookVerdict {
    VeryGood,
    BetterThanPosted,
    WorseThanPosted,
}

impl BookVerdict {
    pub fn from_total(total: f64) -> Self {
        if total < 0.8 {
            BookVerdict::VeryGood
        } else if total < 1.0 {
            BookVerdict::BetterThanPosted
        } else {
            BookVerdict::WorseThanPosted
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            BookVerdict::VeryGood => "Odds are very good.",
            BookVerdict::BetterThanPosted => "Odds are better than posted.",
            BookVerdict::WorseThanPosted => "Odds are worse than posted.",
        }
    }
}

impl fmt::Display for BookVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One runner with posted odds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunnerEstimate {
    /// 1-based runner number.
    pub runner: usize,
    pub odds: f64,
    pub implied: f64,
    pub adjusted: f64,
    pub standout: bool,
}

/// Result of analysing a field of runners.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketAnalysis {
    pub book_total: f64,
    pub verdict: BookVerdict,
    /// Runners with posted odds, in runner order. Blank runners are skipped.
    pub runners: Vec<RunnerEstimate>,
    /// Runner numbers sharing the highest estimate.
    pub best: Vec<usize>,
}

impl MarketAnalysis {
    /// Betting advice, e.g. `"Bet on horses #1 or #3"`. `None` when every runner is blank.
    pub fn advice(&self) -> Option<String> {
        if self.best.is_empty() {
            return None;
        }
        let plural = if self.best.len() > 1 { "s" } else { "" };
        let names: Vec<String> = self.best.iter().map(|r| format!("#{r}")).collect();
        Some(format!("Bet on horse{plural} {}", names.join(" or ")))
    }

    pub fn estimate(&self, runner: usize) -> Option<&RunnerEstimate> {
        self.runners.iter().find(|r| r.runner == runner)
    }
}

/// Analyse a field; `None` or `Some(0.0)` marks a runner without posted odds.
///
/// ```
/// use gta_poker::odds::{analyze, BookVerdict};
///
/// let m = analyze(&[Some(1.0), Some(3.0), None, Some(3.0)]).unwrap();
/// assert_eq!(m.book_total, 1.0);
/// assert_eq!(m.verdict, BookVerdict::WorseThanPosted);
/// assert_eq!(m.advice().as_deref(), Some("Bet on horse #1"));
/// ```
pub fn analyze(odds: &[Option<f64>]) -> Result<MarketAnalysis, OddsError> {
    let mut posted = Vec::with_capacity(odds.len());
    for (idx, o) in odds.iter().enumerate() {
        let runner = idx + 1;
        let Some(o) = *o else { continue };
        if !o.is_finite() {
            return Err(OddsError::NotFinite { runner });
        }
        if o < 0.0 {
            return Err(OddsError::Negative { runner, odds: o });
        }
        if o == 0.0 {
            continue;
        }
        posted.push((runner, o, implied_probability(o)));
    }

    let book_total: f64 = posted.iter().map(|&(_, _, p)| p).sum();
    let runners: Vec<RunnerEstimate> = posted
        .iter()
        .map(|&(runner, odds, implied)| {
            let adjusted = implied + (implied / book_total) * (1.0 - book_total);
            RunnerEstimate { runner, odds, implied, adjusted, standout: adjusted > STANDOUT_THRESHOLD }
        })
        .collect();

    let top = runners.iter().map(|r| r.adjusted).fold(f64::NEG_INFINITY, f64::max);
    let best = runners.iter().filter(|r| r.adjusted == top).map(|r| r.runner).collect();

    Ok(MarketAnalysis { book_total, verdict: BookVerdict::from_total(book_total), runners, best })
}

/// Parse one odds entry per runner. Empty entries and `-` are blank runners.
pub fn parse_field<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<Option<f64>>, OddsError> {
    inputs
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            let t = s.as_ref().trim();
            if t.is_empty() || t == "-" {
                return Ok(None);
            }
            f64::from_str(t)
                .map(Some)
                .map_err(|_| OddsError::Parse { runner: idx + 1, input: t.to_string() })
        })
        .collect()
}

/// Format a probability as a percentage with `digits` decimals.
pub fn to_percent(p: f64, digits: usize) -> String {
    format!("{:.*}%", digits, p * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn estimates_sum_to_one() {
        let m = analyze(&[Some(2.0), Some(4.0), Some(9.0)]).unwrap();
        let sum: f64 = m.runners.iter().map(|r| r.adjusted).sum();
        assert!(close(sum, 1.0));
        assert!(close(m.book_total, 1.0 / 3.0 + 0.2 + 0.1));
        assert_eq!(m.verdict, BookVerdict::VeryGood);
        assert_eq!(m.best, vec![1]);
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(BookVerdict::from_total(0.5), BookVerdict::VeryGood);
        assert_eq!(BookVerdict::from_total(0.8), BookVerdict::BetterThanPosted);
        assert_eq!(BookVerdict::from_total(1.0), BookVerdict::WorseThanPosted);
    }

    #[test]
    fn blank_runners_keep_their_numbers() {
        let m = analyze(&[None, Some(1.0), Some(0.0), Some(4.0)]).unwrap();
        let numbers: Vec<usize> = m.runners.iter().map(|r| r.runner).collect();
        assert_eq!(numbers, vec![2, 4]);
        assert_eq!(m.best, vec![2]);
        assert!(m.estimate(2).is_some_and(|r| r.standout));
        assert!(m.estimate(3).is_none());
    }

    #[test]
    fn ties_recommend_every_leader() {
        let m = analyze(&[Some(3.0), Some(5.0), Some(3.0)]).unwrap();
        assert_eq!(m.best, vec![1, 3]);
        assert_eq!(m.advice().as_deref(), Some("Bet on horses #1 or #3"));
    }

    #[test]
    fn empty_field_has_no_advice() {
        let m = analyze(&[None, Some(0.0)]).unwrap();
        assert!(m.runners.is_empty());
        assert_eq!(m.advice(), None);
        assert_eq!(m.verdict, BookVerdict::VeryGood);
    }

    #[test]
    fn bad_odds_are_rejected() {
        assert_eq!(
            analyze(&[Some(2.0), Some(-1.0)]),
            Err(OddsError::Negative { runner: 2, odds: -1.0 })
        );
        assert_eq!(analyze(&[Some(f64::NAN)]), Err(OddsError::NotFinite { runner: 1 }));
    }

    #[test]
    fn parse_field_accepts_blanks() {
        let f = parse_field(&["3", "", "-", "4.5"]).unwrap();
        assert_eq!(f, vec![Some(3.0), None, None, Some(4.5)]);
        assert!(matches!(parse_field(&["x"]), Err(OddsError::Parse { runner: 1, .. })));
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(to_percent(0.25, 2), "25.00%");
        assert_eq!(to_percent(1.0 / 3.0, 1), "33.3%");
    }
}
