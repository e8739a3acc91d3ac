// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five card stud hand analyzer.
//!
//! Deals hands from a shuffled deck, or reads them from a file, and prints the
//! hands ranked from the strongest to the weakest.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};
use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use fivecard_eval::{Deck, Hand, ParseError, classify_all, rank_hands};

pub mod input;
pub mod report;

use input::InputError;

#[derive(Debug, Parser)]
struct Cli {
    /// A file with one comma separated hand per line, if not given hands are
    /// dealt from a shuffled deck.
    file: Option<PathBuf>,
    /// Number of hands to deal.
    #[clap(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(2..=10))]
    hands: u8,
    /// Seed for shuffling the deck.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Enables debug logs.
    #[clap(long, short)]
    verbose: bool,
}

/// Where the hands come from.
#[derive(Debug)]
enum Config {
    /// Deal hands from a shuffled deck.
    Deal {
        /// Number of hands.
        hands: usize,
        /// Shuffle seed.
        seed: Option<u64>,
    },
    /// Read hands from a file.
    File {
        /// The hands file.
        path: PathBuf,
    },
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        match cli.file {
            Some(path) => Config::File { path },
            None => Config::Deal {
                hands: cli.hands as usize,
                seed: cli.seed,
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let config = Config::from(cli);
    info!("Starting with {config:?}");

    match run(config, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run<W: Write>(config: Config, out: &mut W) -> Result<()> {
    match config {
        Config::Deal { hands, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            report::write_banner(out, "POKER HAND ANALYZER")?;

            let mut deck = Deck::new_and_shuffled(&mut rng);
            report::write_deck(out, &deck)?;

            info!("Dealing {hands} hands");
            let hands = deck
                .deal_hands(hands, Hand::SIZE)
                .into_iter()
                .map(Hand::from_cards)
                .collect::<Result<Vec<_>, _>>()?;

            report::write_hands(out, &hands)?;
            report::write_remaining(out, deck.cards())?;
            report::write_results(out, &rank_hands(classify_all(hands)))?;
        }
        Config::File { path } => {
            report::write_banner(out, "P O K E R   H A N D   A N A L Y Z E R")?;
            report::write_banner(out, "USING TEST DECK")?;
            writeln!(out, "*** File: {}", path.display())?;

            let lines = input::read_hands(&path)?;
            info!("Read {} hands from {}", lines.len(), path.display());

            let hands = lines
                .iter()
                .map(|line| Hand::parse(line))
                .collect::<Result<Vec<_>, _>>()?;

            report::write_hands(out, &hands)?;
            report::write_results(out, &rank_hands(classify_all(hands)))?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Maps an error to the process exit code.
fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(e) = err.downcast_ref::<InputError>() {
        e.exit_code()
    } else if err.downcast_ref::<ParseError>().is_some() {
        8
    } else {
        1
    }
}
