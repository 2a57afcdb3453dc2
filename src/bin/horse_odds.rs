use clap::Parser;
use gta_poker::odds::{analyze, parse_field, to_percent};

/// Turn posted horse-race odds into normalized win estimates.
#[derive(Parser, Debug)]
#[command(name = "horse-odds", version)]
struct Cli {
    /// Odds per runner as "N" for N to 1; use "-" for a runner without odds
    #[arg(required = true, allow_hyphen_values = true)]
    odds: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let field = parse_field(&cli.odds)?;
    let market = analyze(&field)?;
    log::debug!("book total {:.4} over {} runners", market.book_total, market.runners.len());

    for r in &market.runners {
        let mark = if r.standout { " *" } else { "" };
        println!(
            "#{:<3} {:>6}/1  implied {:>7}  estimate {:>7}{mark}",
            r.runner,
            r.odds,
            to_percent(r.implied, 2),
            to_percent(r.adjusted, 2)
        );
    }
    println!("Book total: {}", to_percent(market.book_total, 2));
    println!("{}", market.verdict);
    match market.advice() {
        Some(advice) => println!("{advice}"),
        None => println!("No runners with posted odds."),
    }
    Ok(())
}
