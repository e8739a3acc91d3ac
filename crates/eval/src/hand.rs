// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand parsing and occurrence counts.
use ahash::HashMap;
use std::{fmt, str::FromStr};
use thiserror::Error;

use fivecard_cards::{Card, Rank, Suit};

/// Hand parsing errors.
///
/// Each error carries the offending token so that callers can report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token is not 2 or 3 characters long.
    #[error("malformed card token '{0}'")]
    MalformedToken(String),
    /// The face part of the token is not a valid face.
    #[error("invalid face in card token '{0}'")]
    InvalidFace(String),
    /// The last character of the token is not a valid suit.
    #[error("invalid suit in card token '{0}'")]
    InvalidSuit(String),
    /// The hand doesn't have 5 cards.
    #[error("a hand must have 5 cards, found {0}")]
    CardCount(usize),
}

/// A five cards hand.
///
/// The hand keeps the cards in the order they were given, together with the
/// number of occurrences of each face and suit.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    face_counts: HashMap<Rank, u8>,
    suit_counts: HashMap<Suit, u8>,
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Parses a hand from whitespace separated card tokens, e.g. `"10H JH QH KH AH"`.
    ///
    /// Each token is a face (2-10, J, Q, K, A) followed by an uppercase suit
    /// letter (D, C, H, S).
    pub fn parse(s: &str) -> Result<Hand, ParseError> {
        let cards = s
            .split_whitespace()
            .map(parse_card)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cards(cards)
    }

    /// Creates a hand from a list of cards.
    pub fn from_cards(cards: Vec<Card>) -> Result<Hand, ParseError> {
        if cards.len() != Self::SIZE {
            return Err(ParseError::CardCount(cards.len()));
        }

        let mut face_counts = HashMap::default();
        let mut suit_counts = HashMap::default();
        for card in &cards {
            *face_counts.entry(card.rank()).or_insert(0) += 1;
            *suit_counts.entry(card.suit()).or_insert(0) += 1;
        }

        Ok(Hand {
            cards,
            face_counts,
            suit_counts,
        })
    }

    /// The hand cards in the order they were given.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The last card in the hand.
    pub fn last_card(&self) -> Card {
        // A hand always has five cards.
        self.cards[Self::SIZE - 1]
    }

    /// The number of cards with the given face.
    pub fn face_count(&self, rank: Rank) -> u8 {
        self.face_counts.get(&rank).copied().unwrap_or(0)
    }

    /// The number of cards with the given suit.
    pub fn suit_count(&self, suit: Suit) -> u8 {
        self.suit_counts.get(&suit).copied().unwrap_or(0)
    }

    /// The distinct faces in the hand in ascending order.
    pub fn faces(&self) -> Vec<Rank> {
        let mut faces = self.face_counts.keys().copied().collect::<Vec<_>>();
        faces.sort_unstable();
        faces
    }

    /// The face counts in descending order, e.g. `[3, 2]` for a full house.
    pub fn face_groups(&self) -> Vec<u8> {
        let mut groups = self.face_counts.values().copied().collect::<Vec<_>>();
        groups.sort_unstable_by(|a, b| b.cmp(a));
        groups
    }

    /// Checks if all cards have the same suit.
    pub fn is_suited(&self) -> bool {
        self.suit_counts.values().any(|&n| n as usize == Self::SIZE)
    }

    /// The highest face that appears exactly `count` times.
    pub fn face_with_count(&self, count: u8) -> Option<Rank> {
        self.face_counts
            .iter()
            .filter(|&(_, &n)| n == count)
            .map(|(&rank, _)| rank)
            .max()
    }

    /// The faces that appear exactly `count` times in descending order.
    pub fn faces_with_count(&self, count: u8) -> Vec<Rank> {
        let mut faces = self
            .face_counts
            .iter()
            .filter(|&(_, &n)| n == count)
            .map(|(&rank, _)| rank)
            .collect::<Vec<_>>();
        faces.sort_unstable_by(|a, b| b.cmp(a));
        faces
    }

    /// The highest card whose face is not repeated in the hand.
    pub fn unpaired_high_card(&self) -> Option<Card> {
        self.cards
            .iter()
            .filter(|c| self.face_count(c.rank()) == 1)
            .max_by_key(|c| c.rank())
            .copied()
    }

    /// The face values of the cards that are not repeated in the hand,
    /// highest first.
    pub fn kickers(&self) -> Vec<u8> {
        self.faces_with_count(1)
            .into_iter()
            .map(|r| r.value())
            .collect()
    }
}

impl FromStr for Hand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::parse(s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

/// Parses a face and suit token, the suit is always the last character.
fn parse_card(token: &str) -> Result<Card, ParseError> {
    let len = token.chars().count();
    if !(2..=3).contains(&len) {
        return Err(ParseError::MalformedToken(token.to_string()));
    }

    // The token has at least two chars.
    let (split, suit) = token
        .char_indices()
        .last()
        .ok_or_else(|| ParseError::MalformedToken(token.to_string()))?;

    let rank =
        Rank::from_face(&token[..split]).ok_or_else(|| ParseError::InvalidFace(token.to_string()))?;
    let suit = Suit::from_letter(suit).ok_or_else(|| ParseError::InvalidSuit(token.to_string()))?;

    Ok(Card::new(rank, suit))
}
