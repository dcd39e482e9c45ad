//! Interactive terminal drill over an in-memory demo deck.
//!
//! A minimal host for the scheduler: seeds a handful of vocabulary cards,
//! then drives the next/answer loop until the session has nothing left to
//! offer. Configuration comes from the environment: `SRS_DRILL_STRATEGY`
//! selects the scheduling strategy by name and `SRS_DRILL_CONFIG` points
//! at a JSON file with session limits.

use std::io::{self, Write};

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Utc};
use srs_core::{get_strategy, ReviewOutcome, SessionConfig, StudySession, Timestamp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Front and back of a demo card; the session itself only tracks indices.
struct Card {
    front: &'static str,
    back: &'static str,
}

const DEMO_DECK: &[Card] = &[
    Card { front: "la manzana", back: "the apple" },
    Card { front: "el cuaderno", back: "the notebook" },
    Card { front: "la madrugada", back: "the early morning" },
    Card { front: "el desván", back: "the attic" },
    Card { front: "la alfombra", back: "the carpet" },
    Card { front: "el lápiz", back: "the pencil" },
];

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config()?;
    let strategy_name = std::env::var("SRS_DRILL_STRATEGY").unwrap_or_else(|_| "sm2".into());
    let strategy =
        get_strategy(&strategy_name).ok_or_else(|| anyhow!("unknown strategy: {strategy_name}"))?;
    tracing::info!("Scheduling with the {strategy_name} strategy");

    let mut session = StudySession::new(strategy, config);
    for _ in DEMO_DECK {
        session.add_never_reviewed()?;
    }
    tracing::info!("Seeded {} cards", session.len());

    let mut reviews = 0;
    loop {
        let now = current_timestamp()?;
        let Some(index) = session.next_review(now) else {
            break;
        };
        let card = &DEMO_DECK[index];

        println!();
        println!("  {}", card.front);
        prompt("  [press enter to reveal] ")?;
        read_line()?;
        println!("  {}", card.back);

        let outcome = read_outcome()?;
        let due = session.update_card(index, outcome, now)?;
        reviews += 1;
        tracing::debug!("Card {index} due again at {due}");
        println!("  due again {}", format_timestamp(due));
    }

    println!();
    println!(
        "Session complete after {reviews} reviews ({} new, {} existing still budgeted).",
        session.remaining_new(),
        session.remaining_existing()
    );
    Ok(())
}

/// Session limits from `SRS_DRILL_CONFIG`, or the defaults.
fn load_config() -> Result<SessionConfig> {
    match std::env::var("SRS_DRILL_CONFIG") {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading session config from {path}"))?;
            let config = serde_json::from_str(&raw)
                .with_context(|| format!("parsing session config from {path}"))?;
            Ok(config)
        }
        Err(_) => Ok(SessionConfig::default()),
    }
}

fn current_timestamp() -> Result<Timestamp> {
    Timestamp::try_from(Utc::now().timestamp()).context("system clock is before the epoch")
}

fn format_timestamp(timestamp: Timestamp) -> String {
    match DateTime::<Utc>::from_timestamp(timestamp as i64, 0) {
        Some(when) => when.format("%Y-%m-%d %H:%M").to_string(),
        None => format!("t+{timestamp}s"),
    }
}

fn prompt(text: &str) -> Result<()> {
    print!("{text}");
    io::stdout().flush().context("flushing stdout")?;
    Ok(())
}

fn read_line() -> Result<String> {
    let mut line = String::new();
    let read = io::stdin().read_line(&mut line).context("reading stdin")?;
    if read == 0 {
        bail!("input closed");
    }
    Ok(line.trim().to_string())
}

fn read_outcome() -> Result<ReviewOutcome> {
    loop {
        prompt("  1 = wrong, 2 = hesitant, 3 = perfect: ")?;
        let line = read_line()?;
        match line.parse::<u8>().ok().and_then(ReviewOutcome::from_quality) {
            Some(outcome) => return Ok(outcome),
            None => println!("  please answer 1, 2 or 3"),
        }
    }
}
