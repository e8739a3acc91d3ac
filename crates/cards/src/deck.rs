// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and deck definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Poker card.
///
/// A card is an immutable face and suit pair, two cards are the same card if
/// they have the same face and suit.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// The card face value, from 2 for a deuce to 14 for an ace.
    #[inline]
    pub fn face_value(&self) -> u8 {
        self.rank.value()
    }

    /// The card suit order used for breaking ties, see [Suit::rank].
    #[inline]
    pub fn suit_rank(&self) -> u8 {
        self.suit.rank()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Card rank.
///
/// The discriminant is the card face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The face value, 2 to 14.
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Converts a face string to a rank.
    ///
    /// Accepts the numbers 2 to 10 and the letters J, Q, K, A.
    pub fn from_face(face: &str) -> Option<Rank> {
        let rank = match face {
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ if face.bytes().all(|b| b.is_ascii_digit()) => {
                let value = face.parse::<u8>().ok()?;
                Rank::ranks().find(|r| r.value() == value && value <= 10)?
            }
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Jack => write!(f, "J"),
            Rank::Queen => write!(f, "Q"),
            Rank::King => write!(f, "K"),
            Rank::Ace => write!(f, "A"),
            r => write!(f, "{}", r.value()),
        }
    }
}

/// Card suit.
///
/// The discriminant is the suit order used to break ties between hands,
/// diamonds < clubs < hearts < spades.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Diamonds suit.
    Diamonds = 1,
    /// Clubs suit.
    Clubs = 2,
    /// Hearts suit.
    Hearts = 3,
    /// Spades suit.
    Spades = 4,
}

impl Suit {
    /// Returns all suits in deck order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit order, 1 for diamonds to 4 for spades.
    #[inline]
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// The suit letter.
    pub fn letter(&self) -> char {
        match self {
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    /// Converts an uppercase suit letter to a suit.
    pub fn from_letter(letter: char) -> Option<Suit> {
        Suit::suits().find(|s| s.letter() == letter)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals `hands` hands of `cards_per_hand` cards from the top of the deck.
    ///
    /// Cards are dealt round robin, one card to each hand in turn, so the i-th
    /// card from the top goes to hand `i % hands`.
    ///
    /// Panics if the deck has less than `hands * cards_per_hand` cards.
    pub fn deal_hands(&mut self, hands: usize, cards_per_hand: usize) -> Vec<Vec<Card>> {
        let total = hands * cards_per_hand;
        assert!(
            total <= self.cards.len(),
            "Cannot deal {total} cards from a deck with {} cards",
            self.cards.len()
        );

        let mut dealt = vec![Vec::with_capacity(cards_per_hand); hands];
        for (idx, card) in self.cards.drain(..total).enumerate() {
            dealt[idx % hands].push(card);
        }

        dealt
    }

    /// The cards left in the deck, top card first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 1 <= k <= 5.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=5).contains(&k), "1 <= k <= 5");

        if k > self.cards.len() {
            return;
        }

        let mut hand = Vec::with_capacity(k);
        self.visit(0, k, &mut hand, &mut f);
    }

    fn visit<F>(&self, start: usize, k: usize, hand: &mut Vec<Card>, f: &mut F)
    where
        F: FnMut(&[Card]),
    {
        if hand.len() == k {
            f(hand.as_slice());
            return;
        }

        // Leave enough cards to complete the hand.
        let last = self.cards.len() - (k - hand.len());
        for idx in start..=last {
            hand.push(self.cards[idx]);
            self.visit(idx + 1, k, hand, f);
            hand.pop();
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_cards_unique() {
        let deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.into_iter().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn ordered_deck() {
        let deck = Deck::default();
        let cards = deck.cards();
        assert_eq!(cards[0], Card::new(Rank::Deuce, Suit::Diamonds));
        assert_eq!(cards[12], Card::new(Rank::Ace, Suit::Diamonds));
        assert_eq!(cards[13], Card::new(Rank::Deuce, Suit::Clubs));
        assert_eq!(cards[51], Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10H");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_values() {
        let c = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(c.face_value(), 14);
        assert_eq!(c.suit_rank(), 4);

        let c = Card::new(Rank::Deuce, Suit::Diamonds);
        assert_eq!(c.face_value(), 2);
        assert_eq!(c.suit_rank(), 1);

        let ranks = Suit::suits().map(|s| s.rank()).collect::<Vec<_>>();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn rank_from_face() {
        assert_eq!(Rank::from_face("2"), Some(Rank::Deuce));
        assert_eq!(Rank::from_face("9"), Some(Rank::Nine));
        assert_eq!(Rank::from_face("10"), Some(Rank::Ten));
        assert_eq!(Rank::from_face("J"), Some(Rank::Jack));
        assert_eq!(Rank::from_face("Q"), Some(Rank::Queen));
        assert_eq!(Rank::from_face("K"), Some(Rank::King));
        assert_eq!(Rank::from_face("A"), Some(Rank::Ace));

        assert_eq!(Rank::from_face("1"), None);
        assert_eq!(Rank::from_face("11"), None);
        assert_eq!(Rank::from_face("14"), None);
        assert_eq!(Rank::from_face("T"), None);
        assert_eq!(Rank::from_face("a"), None);
        assert_eq!(Rank::from_face("+5"), None);
        assert_eq!(Rank::from_face(""), None);
    }

    #[test]
    fn suit_from_letter() {
        assert_eq!(Suit::from_letter('D'), Some(Suit::Diamonds));
        assert_eq!(Suit::from_letter('C'), Some(Suit::Clubs));
        assert_eq!(Suit::from_letter('H'), Some(Suit::Hearts));
        assert_eq!(Suit::from_letter('S'), Some(Suit::Spades));
        assert_eq!(Suit::from_letter('s'), None);
        assert_eq!(Suit::from_letter('X'), None);
    }

    #[test]
    fn deal_round_robin() {
        let mut deck = Deck::default();
        let top = deck.cards().to_vec();

        let hands = deck.deal_hands(6, 5);
        assert_eq!(hands.len(), 6);
        assert!(hands.iter().all(|h| h.len() == 5));

        for (idx, card) in top[..30].iter().enumerate() {
            assert_eq!(hands[idx % 6][idx / 6], *card);
        }

        assert_eq!(deck.count(), 22);
        assert_eq!(deck.cards(), &top[30..]);
    }

    #[test]
    #[should_panic]
    fn deal_too_many() {
        let mut deck = Deck::default();
        deck.deal_hands(11, 5);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_after_deal() {
        let mut deck = Deck::default();
        deck.deal_hands(6, 5);

        let mut count = 0;
        deck.for_each(5, |_| count += 1);
        // 22 choose 5
        assert_eq!(count, 26_334);
    }
}
