// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands file reading and validation.
//!
//! A hands file has one hand per line with the cards separated by commas:
//!
//! ```text
//! 10H, JH, QH, KH, AH
//! 2C, 3C, 4C, 5C, 6C
//! ```
use ahash::HashSet;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

use fivecard_eval::{Card, Hand, Rank, Suit};

/// Hands file errors.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file cannot be read.
    #[error("could not open file {}: {source}", .path.display())]
    Io {
        /// The file path.
        path: PathBuf,
        /// The I/O error.
        source: io::Error,
    },
    /// The same card appears more than once.
    #[error("duplicate card found in deck: {0}")]
    DuplicateCard(String),
    /// A card suit is not uppercase.
    #[error("suits must be uppercase, invalid suit: {0}")]
    LowercaseSuit(String),
    /// A card is not 2 or 3 characters long.
    #[error("cards must be 2 or 3 characters long, invalid card length: '{0}'")]
    CardLength(String),
    /// A line doesn't have 5 cards.
    #[error("line {line} has {count} cards, expected 5")]
    CardCount {
        /// The line number starting from 1.
        line: usize,
        /// The number of cards on the line.
        count: usize,
    },
    /// The file has no hands.
    #[error("no hands found")]
    NoHands,
}

impl InputError {
    /// The process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            InputError::Io { .. } => 3,
            InputError::DuplicateCard(_) => 4,
            InputError::LowercaseSuit(_) => 5,
            InputError::CardLength(_) => 6,
            InputError::CardCount { .. } => 7,
            InputError::NoHands => 9,
        }
    }
}

/// Reads and validates the hands in a file.
pub fn read_hands<P: AsRef<Path>>(path: P) -> Result<Vec<String>, InputError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_hands(&content)
}

/// Validates the hands in a comma separated text.
///
/// Returns one string per non blank line with the line cards separated by a
/// space, ready to be parsed by [Hand::parse].
pub fn parse_hands(content: &str) -> Result<Vec<String>, InputError> {
    let mut seen = HashSet::default();
    let mut hands = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut cards = Vec::with_capacity(Hand::SIZE);
        for token in line.split(',').map(str::trim) {
            validate_card(token)?;

            // Tokens that are not cards are reported by the hand parser.
            if parse_card(token).is_some_and(|card| !seen.insert(card)) {
                return Err(InputError::DuplicateCard(token.to_string()));
            }

            cards.push(token);
        }

        if cards.len() != Hand::SIZE {
            return Err(InputError::CardCount {
                line: idx + 1,
                count: cards.len(),
            });
        }

        hands.push(cards.join(" "));
    }

    if hands.is_empty() {
        return Err(InputError::NoHands);
    }

    Ok(hands)
}

/// Parses a validated token, `05D` and `5D` are the same card.
fn parse_card(token: &str) -> Option<Card> {
    let (idx, letter) = token.char_indices().last()?;
    let suit = Suit::from_letter(letter)?;
    Some(Card::new(Rank::from_face(&token[..idx])?, suit))
}

fn validate_card(token: &str) -> Result<(), InputError> {
    let len = token.chars().count();
    if !(2..=3).contains(&len) {
        return Err(InputError::CardLength(token.to_string()));
    }

    // The suit is always the last character.
    if !token.chars().last().is_some_and(char::is_uppercase) {
        return Err(InputError::LowercaseSuit(token.to_string()));
    }

    Ok(())
}
