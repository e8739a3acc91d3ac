// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example count_all5
// ...
// Total hands           2598960
// Elapsed:              0.412s
// Hands/sec:            6308155
//
// Royal Straight Flush: 4
// Straight Flush:       36
// Four of a Kind:       624
// Full House:           3744
// Flush:                5108
// Straight:             10200
// Three of a Kind:      54912
// Two Pair:             123552
// Pair:                 1098240
// High Card:            1302540
// ```

use std::time::Instant;

use fivecard_eval::*;

fn main() {
    // Classify all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; 15];

    Deck::default().for_each(5, |cards| {
        let hand = Hand::from_cards(cards.to_vec()).expect("5 cards hand");
        counts[classify(&hand).order_rank() as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands           {total}");
    println!("Elapsed:              {:.3}s", elapsed);
    println!("Hands/sec:            {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::categories() {
        let label = format!("{}:", category.label());
        println!("{label:<22}{}", counts[category.order_rank() as usize]);
    }
}
