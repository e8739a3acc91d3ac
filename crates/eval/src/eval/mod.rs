// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classification.
//!
//! A five cards hand is classified into exactly one [HandCategory] using the
//! occurrence counts of its faces and suits. The category order rank is the
//! coarse key used to sort hands, lower is stronger, hands with the same
//! category are compared with the category tie-break rules in [tiebreak].
use log::trace;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use fivecard_cards::{Card, Rank};

use crate::hand::Hand;

pub mod tiebreak;

/// A hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// Ten to ace of the same suit.
    RoyalStraightFlush = 5,
    /// Five consecutive faces of the same suit.
    StraightFlush,
    /// Four cards with the same face.
    FourOfAKind,
    /// Three cards with one face and two with another.
    FullHouse,
    /// Five cards of the same suit.
    Flush,
    /// Five consecutive faces.
    Straight,
    /// Three cards with the same face.
    ThreeOfAKind,
    /// Two pairs of cards with the same face.
    TwoPair,
    /// Two cards with the same face.
    Pair,
    /// None of the above.
    HighCard,
}

impl HandCategory {
    /// Returns all categories from the strongest to the weakest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            RoyalStraightFlush,
            StraightFlush,
            FourOfAKind,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            TwoPair,
            Pair,
            HighCard,
        ]
        .into_iter()
    }

    /// The category sort key, from 5 for a royal straight flush to 14 for a
    /// high card, lower is stronger.
    #[inline]
    pub fn order_rank(&self) -> u8 {
        *self as u8
    }

    /// The category name.
    pub fn label(&self) -> &'static str {
        match self {
            HandCategory::RoyalStraightFlush => "Royal Straight Flush",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::Pair => "Pair",
            HandCategory::HighCard => "High Card",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The faces of an ace low straight.
const WHEEL: [Rank; 5] = [Rank::Deuce, Rank::Trey, Rank::Four, Rank::Five, Rank::Ace];

/// The faces of a royal straight.
const ROYAL: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

/// Classifies a hand.
pub fn classify(hand: &Hand) -> HandCategory {
    let flush = hand.is_suited();
    let faces = hand.faces();
    let straight = is_straight(&faces);

    match (flush, straight) {
        (true, true) if faces == ROYAL => HandCategory::RoyalStraightFlush,
        (true, true) => HandCategory::StraightFlush,
        (true, false) => HandCategory::Flush,
        (false, true) => HandCategory::Straight,
        (false, false) => match hand.face_groups().as_slice() {
            [4, ..] => HandCategory::FourOfAKind,
            [3, 2] => HandCategory::FullHouse,
            [3, ..] => HandCategory::ThreeOfAKind,
            [2, 2, ..] => HandCategory::TwoPair,
            [2, ..] => HandCategory::Pair,
            _ => HandCategory::HighCard,
        },
    }
}

/// Checks if the distinct faces, in ascending order, form a straight.
///
/// The ace counts as a one in the ace low straight.
fn is_straight(faces: &[Rank]) -> bool {
    if faces.len() != Hand::SIZE {
        return false;
    }

    if *faces == WHEEL {
        return true;
    }

    faces.windows(2).all(|w| w[1].value() == w[0].value() + 1)
}

/// A classified hand.
#[derive(Debug, Clone)]
pub struct Classification {
    category: HandCategory,
    hand: Hand,
}

impl Classification {
    /// Classifies a hand.
    pub fn new(hand: Hand) -> Self {
        let category = classify(&hand);
        trace!("Classified {hand} as {category}");
        Self { category, hand }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The category sort key, lower is stronger.
    pub fn order_rank(&self) -> u8 {
        self.category.order_rank()
    }

    /// The category name.
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    /// The classified hand.
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The hand cards in their original order.
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Compares the strength of this hand with another hand.
    ///
    /// Returns [Ordering::Greater] if this hand is stronger, see
    /// [tiebreak::resolve].
    pub fn cmp_strength(&self, other: &Classification) -> Ordering {
        tiebreak::resolve(self, other)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.hand, self.category)
    }
}
