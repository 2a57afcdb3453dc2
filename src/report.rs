use crate::montecarlo::Expectation;
use std::fmt::Write as _;

/// Format seconds as a compact clock: `M:SS` under an hour, `H:MM:SS` above.
///
/// ```
/// use gta_poker::report::format_clock;
///
/// assert_eq!(format_clock(40), "0:40");
/// assert_eq!(format_clock(190), "3:10");
/// assert_eq!(format_clock(3_700), "1:01:40");
/// ```
pub fn format_clock(secs: u64) -> String {
    let (h, m, s) = (secs / 3600, secs / 60 % 60, secs % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}

/// Column titles of the growth table.
pub fn curve_header() -> String {
    format!("{:>5}  {:>15}  {:>12}", "Round", "Average Chips", "Average Time")
}

/// One growth-table row, aligned with [`curve_header`].
pub fn curve_row(p: &Expectation) -> String {
    format!("{:>5}  {:>15}  {:>12}", p.rounds, p.avg_bankroll, format_clock(p.avg_time_secs))
}

/// Render a growth curve as a plain-text table.
pub fn render_curve(points: &[Expectation]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", curve_header());
    for p in points {
        let _ = writeln!(out, "{}", curve_row(p));
    }
    out
}
