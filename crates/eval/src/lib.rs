// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five card stud hand evaluator.
//!
//! Classifies five cards hands into one of ten categories, from a royal straight
//! flush to a high card, and ranks a set of hands breaking ties between hands
//! with the same category with category specific rules that use both the card
//! faces and the suit order diamonds < clubs < hearts < spades.
//!
//! To use the evaluator parse a hand and classify it:
//!
//! ```
//! # use fivecard_eval::*;
//! let hand = Hand::parse("AD 2D 3D 4D 5D").unwrap();
//! let c = Classification::new(hand);
//! assert_eq!(c.category(), HandCategory::StraightFlush);
//! assert_eq!(c.order_rank(), 6);
//! ```
//!
//! or rank a set of hands from the strongest to the weakest:
//!
//! ```
//! # use fivecard_eval::*;
//! let ranked = rank_strs(&["2D 3D 4D 5D 6D", "2C 3C 4C 5C 6C"]).unwrap();
//! assert_eq!(ranked[0].hand().to_string(), "2C 3C 4C 5C 6C");
//! assert_eq!(ranked[0].label(), "Straight Flush");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Classification, HandCategory, classify, tiebreak};

pub mod hand;
pub use hand::{Hand, ParseError};

pub mod ranking;
pub use ranking::{classify_all, rank_hands, rank_strs};

// Reexport cards types.
pub use fivecard_cards::{Card, Deck, Rank, Suit};
