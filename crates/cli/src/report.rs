// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Console output.
use std::io::{self, Write};

use fivecard_eval::{Card, Classification, Deck, Hand};

/// Cards per row when printing a deck.
const ROW_SIZE: usize = 13;

/// Writes a banner line followed by a blank line.
pub fn write_banner<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    writeln!(w, "*** {title} ***")?;
    writeln!(w)
}

/// Writes the deck cards, a suit worth of cards per row.
pub fn write_deck<W: Write>(w: &mut W, deck: &Deck) -> io::Result<()> {
    writeln!(w, "*** Shuffled {} card deck:", deck.count())?;
    for row in deck.cards().chunks(ROW_SIZE) {
        write_cards(w, row)?;
    }

    writeln!(w)
}

/// Writes one hand per line.
pub fn write_hands<W: Write>(w: &mut W, hands: &[Hand]) -> io::Result<()> {
    writeln!(w, "*** Here are the {} hands...", hands.len())?;
    for hand in hands {
        writeln!(w, "{hand}")?;
    }

    writeln!(w)
}

/// Writes the cards left in the deck after dealing.
pub fn write_remaining<W: Write>(w: &mut W, cards: &[Card]) -> io::Result<()> {
    writeln!(w, "*** Here is what remains in the deck...")?;
    write_cards(w, cards)?;
    writeln!(w)
}

/// Writes the ranked hands, strongest first.
pub fn write_results<W: Write>(w: &mut W, ranked: &[Classification]) -> io::Result<()> {
    writeln!(w, "--- WINNING HAND ORDER ---")?;
    for c in ranked {
        writeln!(w, "{} - {}", c.hand(), c.label())?;
    }

    writeln!(w)
}

fn write_cards<W: Write>(w: &mut W, cards: &[Card]) -> io::Result<()> {
    let line = cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(w, "{line}")
}
