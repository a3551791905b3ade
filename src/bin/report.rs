//! Render aggregate report tables from the cached data payload.
//!
//! Usage: `report <ownership|positional|financial|standings> [args]`
//!   ownership                 full ownership table
//!   positional <POS> <PCT>    ownership for one position above a threshold
//!   financial                 entries/paid/won/ROI by contest type and buy-in
//!   standings <CODE>          placement distribution (3m|6m|12m|pa|m|t)

use tracing_subscriber::EnvFilter;

use bestball::aggregate::{financial_summary, ownership, positional_ownership, standings_summary};
use bestball::cache;
use bestball::config::Config;
use bestball::error::{AppError, Result};
use bestball::types::{FinancialRow, OwnershipRow, StandingsRow};
use bestball::updater::Updater;

fn main() {
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .init();

    if let Err(e) = run(&cfg) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cfg: &Config) -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let updater = Updater::new(&cfg.username, &cfg.data_dir);
    let data = cache::load_data(&updater.data_path())?;

    match args.first().map(String::as_str) {
        Some("ownership") => print_ownership(&ownership(&data.rosters)),
        Some("positional") => {
            let position = args
                .get(1)
                .ok_or_else(|| AppError::Config("positional needs a position".to_string()))?;
            let threshold = args
                .get(2)
                .and_then(|t| t.parse::<f64>().ok())
                .unwrap_or(10.0);
            let rows = ownership(&data.rosters);
            print_ownership(&positional_ownership(&rows, position, threshold));
        }
        Some("financial") => print_financial(&financial_summary(&data.standings)),
        Some("standings") => {
            let code = args
                .get(1)
                .ok_or_else(|| AppError::Config("standings needs a contest type code".to_string()))?;
            print_standings(&standings_summary(&data.standings, code)?);
        }
        _ => {
            eprintln!("usage: report <ownership|positional|financial|standings> [args]");
            std::process::exit(2);
        }
    }
    Ok(())
}

fn print_ownership(rows: &[OwnershipRow]) {
    println!("{:<24} {:<4} {:<5} {:>5} {:>5} {:>6}", "player", "pos", "team", "n", "tot", "pct");
    for r in rows {
        println!(
            "{:<24} {:<4} {:<5} {:>5} {:>5} {:>6.1}",
            r.display_name, r.position, r.team_abbreviation, r.n, r.tot, r.pct
        );
    }
}

fn print_financial(rows: &[FinancialRow]) {
    println!(
        "{:<12} {:>8} {:>8} {:>10} {:>10} {:>8}",
        "type", "buy-in", "entries", "paid", "won", "roi"
    );
    for r in rows {
        let roi = r.roi.map(|v| format!("{v:.1}")).unwrap_or_else(|| "n/a".to_string());
        println!(
            "{:<12} {:>8.2} {:>8} {:>10.2} {:>10.2} {:>8}",
            r.contest_type.to_string(),
            r.buy_in_amount,
            r.entries,
            r.paid,
            r.won,
            roi
        );
    }
}

fn print_standings(rows: &[StandingsRow]) {
    println!("{:>6} {:>8} {:>6}", "place", "n_teams", "pct");
    for r in rows {
        println!("{:>6} {:>8} {:>6.2}", r.place, r.n_teams, r.pct);
    }
}
