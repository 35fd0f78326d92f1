use std::env;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nba_prop_signal::betting::{recommend_for_date, OddsSource, RandomOdds, SeededOdds, SlateOutcome};
use nba_prop_signal::config::Config;
use nba_prop_signal::data::DataContext;
use nba_prop_signal::models::parse_date;

/// Print the recommendations for a date without starting the server.
///
/// Usage: preview_bets [--date YYYY-MM-DD]
fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pipeable JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "preview_bets=info,nba_prop_signal=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();
    let date = parse_date_arg(&args)?;

    let config = Config::from_env()?;
    let data = DataContext::load(&config).context("Failed to load player and schedule data")?;

    let odds: Box<dyn OddsSource> = match config.odds_seed {
        Some(seed) => Box::new(SeededOdds::new(seed)),
        None => Box::new(RandomOdds),
    };

    info!("Previewing bets for {}", date);

    match recommend_for_date(&data, date, odds.as_ref()) {
        SlateOutcome::NoActivePlayers => {
            println!("No active players found for {}.", date);
        }
        SlateOutcome::Picks(picks) => {
            println!("{}", serde_json::to_string_pretty(&picks)?);
        }
    }

    Ok(())
}

/// Parse --date argument, defaulting to today
fn parse_date_arg(args: &[String]) -> Result<NaiveDate> {
    for (i, arg) in args.iter().enumerate() {
        if arg == "--date" || arg == "-d" {
            let value = args.get(i + 1).context("--date requires a value")?;
            return parse_date(value).with_context(|| format!("Invalid date: {}", value));
        }
    }
    Ok(Local::now().date_naive())
}
