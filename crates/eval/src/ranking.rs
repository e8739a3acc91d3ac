// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ranking of a set of hands.
use log::debug;

use crate::{
    eval::Classification,
    hand::{Hand, ParseError},
};

/// Sorts classified hands from the strongest to the weakest.
///
/// Hands are sorted by category order rank and hands with the same category by
/// the category tie-break rules. The sort is stable so hands that cannot be
/// told apart keep their relative order.
pub fn rank_hands(mut hands: Vec<Classification>) -> Vec<Classification> {
    hands.sort_by(|a, b| {
        a.order_rank()
            .cmp(&b.order_rank())
            .then_with(|| b.cmp_strength(a))
    });

    debug!(
        "Ranked {} hands, winner {}",
        hands.len(),
        hands.first().map(|c| c.to_string()).unwrap_or_default()
    );

    hands
}

/// Classifies each hand.
pub fn classify_all(hands: Vec<Hand>) -> Vec<Classification> {
    hands.into_iter().map(Classification::new).collect()
}

/// Parses, classifies and ranks hands from their text form.
///
/// Fails on the first hand that cannot be parsed.
pub fn rank_strs<S: AsRef<str>>(hands: &[S]) -> Result<Vec<Classification>, ParseError> {
    let hands = hands
        .iter()
        .map(|s| Hand::parse(s.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rank_hands(classify_all(hands)))
}
