// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Tie-break rules for hands with the same category.
//!
//! Each category maps a hand to a key, hands are compared by comparing their
//! keys lexicographically so that the comparison is a total order that can be
//! used for sorting. The keys use the suit order diamonds < clubs < hearts <
//! spades:
//!
//! | Category                     | Key                                            |
//! |------------------------------|------------------------------------------------|
//! | Royal/Straight Flush, Flush  | last card suit, unpaired high card face        |
//! | Straight                     | unpaired high card face                        |
//! | Three of a Kind              | triplet face, kickers, unpaired high card suit |
//! | Four of a Kind               | quad face, kicker face                         |
//! | Full House                   | triplet face, pair face                        |
//! | Two Pair                     | kicker suit, kicker suit letter                |
//! | Pair                         | unpaired high card suit, suit letter           |
//! | High Card                    | unpaired high card suit, unpaired high face    |
//!
//! Note that the ace in an ace low straight is compared with its face value.
use std::cmp::Ordering;

use fivecard_cards::{Card, Suit};

use super::{Classification, HandCategory};
use crate::hand::Hand;

/// Compares two classified hands.
///
/// Returns [Ordering::Greater] if `a` ranks ahead of `b`, [Ordering::Less] if
/// `b` ranks ahead of `a`, and [Ordering::Equal] if the hands cannot be told
/// apart. Hands with different categories are compared using the category
/// order rank.
pub fn resolve(a: &Classification, b: &Classification) -> Ordering {
    if a.category() != b.category() {
        // Lower order rank is stronger.
        return b.order_rank().cmp(&a.order_rank());
    }

    let (ka, kb) = (key(a.category(), a.hand()), key(b.category(), b.hand()));
    ka.cmp(&kb)
}

/// A tie-break key, compared lexicographically.
type Key = Vec<u32>;

fn key(category: HandCategory, hand: &Hand) -> Key {
    use HandCategory::*;

    match category {
        RoyalStraightFlush | StraightFlush | Flush => {
            vec![suit_rank(hand.last_card().suit()), high_face(hand)]
        }
        Straight => vec![high_face(hand)],
        ThreeOfAKind => {
            let mut key = vec![group_face(hand, 3)];
            key.extend(hand.kickers().into_iter().map(u32::from));
            key.push(high_suit(hand));
            key
        }
        FourOfAKind => vec![group_face(hand, 4), group_face(hand, 1)],
        FullHouse => vec![group_face(hand, 3), group_face(hand, 2)],
        TwoPair | Pair => {
            // The card that is not part of the pairs, for a pair the highest.
            let suit = hand.unpaired_high_card().map(|c| c.suit());
            vec![
                suit.map(suit_rank).unwrap_or_default(),
                suit.map(|s| u32::from(s.letter())).unwrap_or_default(),
            ]
        }
        HighCard => vec![high_suit(hand), high_face(hand)],
    }
}

/// The face of the cards that appear `count` times, or 0.
fn group_face(hand: &Hand, count: u8) -> u32 {
    hand.face_with_count(count)
        .map(|r| u32::from(r.value()))
        .unwrap_or_default()
}

/// The face of the unpaired high card, or 0.
fn high_face(hand: &Hand) -> u32 {
    hand.unpaired_high_card()
        .map(|c| u32::from(c.face_value()))
        .unwrap_or_default()
}

/// The suit rank of the unpaired high card, or 0.
fn high_suit(hand: &Hand) -> u32 {
    hand.unpaired_high_card()
        .map(|c: Card| u32::from(c.suit_rank()))
        .unwrap_or_default()
}

fn suit_rank(suit: Suit) -> u32 {
    u32::from(suit.rank())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn classify(s: &str) -> Classification {
        Classification::new(Hand::parse(s).unwrap())
    }

    fn cmp(a: &str, b: &str) -> Ordering {
        let (a, b) = (classify(a), classify(b));
        assert_eq!(a.category(), b.category(), "{a} vs {b}");
        resolve(&a, &b)
    }

    #[test]
    fn different_categories() {
        let flush = classify("2H 7H 9H JH KH");
        let pair = classify("AC AD 7H 8S 9C");
        assert_eq!(resolve(&flush, &pair), Ordering::Greater);
        assert_eq!(resolve(&pair, &flush), Ordering::Less);
    }

    #[test]
    fn straight_flush_by_suit() {
        // Clubs beat diamonds regardless of faces.
        assert_eq!(cmp("2D 3D 4D 5D 6D", "2C 3C 4C 5C 6C"), Ordering::Less);
        assert_eq!(cmp("9D 10D JD QD KD", "2C 3C 4C 5C 6C"), Ordering::Less);
        assert_eq!(cmp("10S JS QS KS AS", "10H JH QH KH AH"), Ordering::Greater);
    }

    #[test]
    fn flush_by_suit_then_high_card() {
        assert_eq!(cmp("2H 7H 9H JH KH", "2S 4S 5S 6S 8S"), Ordering::Less);
        // Same suit is only possible across decks but the rule still applies.
        assert_eq!(cmp("2H 7H 9H JH KH", "2H 7H 9H JH AH"), Ordering::Less);
        assert_eq!(cmp("2H 7H 9H JH KH", "2H 7H 9H JH KH"), Ordering::Equal);
    }

    #[test]
    fn straight_by_high_card() {
        assert_eq!(cmp("5C 6D 7H 8S 9C", "6C 7D 8H 9S 10C"), Ordering::Less);
        assert_eq!(cmp("5C 6D 7H 8S 9C", "5D 6C 7S 8H 9D"), Ordering::Equal);

        // The ace low straight uses the ace face value.
        assert_eq!(cmp("AD 2C 3D 4H 5S", "9C 10D JH QS KC"), Ordering::Greater);
    }

    #[test]
    fn three_of_a_kind() {
        assert_eq!(cmp("5C 5D 5H 8S 9C", "6C 6D 6H 2S 3C"), Ordering::Less);
        // Same triplet, highest differing kicker wins.
        assert_eq!(cmp("5C 5D 5H KS 9C", "5C 5D 5H QS JC"), Ordering::Greater);
        assert_eq!(cmp("5C 5D 5H KS 9C", "5C 5D 5H KD 10C"), Ordering::Less);
        // Same kickers, suit of the highest kicker.
        assert_eq!(cmp("5C 5D 5H KS 9C", "5C 5D 5S KH 9D"), Ordering::Greater);
        assert_eq!(cmp("5C 5D 5H KD 9C", "5C 5D 5S KC 9D"), Ordering::Less);
    }

    #[test]
    fn four_of_a_kind() {
        assert_eq!(cmp("9C 9D 9H 9S KD", "9C 9D 9H 9S QS"), Ordering::Greater);
        assert_eq!(cmp("9C 9D 9H 9S QS", "9C 9D 9H 9S KD"), Ordering::Less);
        assert_eq!(cmp("9C 9D 9H 9S AD", "10C 10D 10H 10S 2D"), Ordering::Less);
    }

    #[test]
    fn full_house() {
        assert_eq!(cmp("9C 9D 9H 2S 2D", "8C 8D 8H AS AD"), Ordering::Greater);
        assert_eq!(cmp("9C 9D 9H 2S 2D", "9C 9D 9S 3S 3D"), Ordering::Less);
        assert_eq!(cmp("9C 9D 9H 3H 3C", "9C 9D 9S 3S 3D"), Ordering::Equal);
    }

    #[test]
    fn two_pair_by_kicker_suit() {
        assert_eq!(cmp("AH AS KH KD 2D", "AH AS KH KD 2S"), Ordering::Less);
        // The kicker face doesn't matter, only its suit.
        assert_eq!(cmp("3C 3S 4H 4D AD", "3C 3S 4H 4D 2H"), Ordering::Less);
        assert_eq!(cmp("3C 3S 4H 4D AC", "5C 5S 6H 6D 2C"), Ordering::Equal);
    }

    #[test]
    fn pair_by_high_card_suit() {
        assert_eq!(cmp("AC AD 7H 8S 9D", "2C 2D 3H 4S 5S"), Ordering::Less);
        assert_eq!(cmp("AC AD 7H 8S 9S", "2C 2D 3H 4S 5D"), Ordering::Greater);
        assert_eq!(cmp("AC AD 7H 8S 9H", "2C 2D 3S 4D 5H"), Ordering::Equal);
    }

    #[test]
    fn high_card_by_suit_then_face() {
        assert_eq!(cmp("2C 5D 7H 8S KD", "2C 5D 7H 8S 9S"), Ordering::Less);
        assert_eq!(cmp("2C 5D 7H 8S KS", "2C 5D 7H 8D QS"), Ordering::Greater);
        assert_eq!(cmp("2C 5D 7H 8S KS", "3C 4D 7H 8D KS"), Ordering::Equal);
    }

    #[test]
    fn resolve_is_antisymmetric() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut hands = Vec::new();
        for _ in 0..200 {
            let mut deck = fivecard_cards::Deck::new_and_shuffled(&mut rng);
            for cards in deck.deal_hands(10, 5) {
                hands.push(Classification::new(Hand::from_cards(cards).unwrap()));
            }
        }

        for a in hands.iter().take(300) {
            for b in hands.iter().take(300) {
                assert_eq!(resolve(a, b), resolve(b, a).reverse(), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn resolve_is_transitive() {
        let mut rng = StdRng::seed_from_u64(0xcafe);
        let mut hands = Vec::new();
        for _ in 0..10 {
            let mut deck = fivecard_cards::Deck::new_and_shuffled(&mut rng);
            for cards in deck.deal_hands(10, 5) {
                hands.push(Classification::new(Hand::from_cards(cards).unwrap()));
            }
        }

        for a in &hands {
            for b in &hands {
                for c in &hands {
                    if resolve(a, b).is_ge() && resolve(b, c).is_ge() {
                        assert!(resolve(a, c).is_ge(), "{a} >= {b} >= {c}");
                    }
                }
            }
        }
    }
}
