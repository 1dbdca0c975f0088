// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use ahash::AHashSet;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Error for malformed or duplicate cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The text is not a two or three characters card encoding.
    #[error("malformed card {0:?}")]
    Malformed(String),
    /// The rank character is not one of 2-9, T, J, Q, K, A.
    #[error("unknown rank {0:?}")]
    UnknownRank(char),
    /// The suit character is not one of c, d, h, s.
    #[error("unknown suit {0:?}")]
    UnknownSuit(char),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    Duplicate(Card),
}

/// Card rank.
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
    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value, deuce is 2 up to 14 for an ace.
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

impl TryFrom<char> for Rank {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(CardError::UnknownRank(c)),
        };

        Ok(rank)
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };

        write!(f, "{suit}")
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let suit = match c.to_ascii_lowercase() {
            'c' => Suit::Clubs,
            'd' => Suit::Diamonds,
            'h' => Suit::Hearts,
            's' => Suit::Spades,
            _ => return Err(CardError::UnknownSuit(c)),
        };

        Ok(suit)
    }
}

/// A Poker card.
///
/// Cards order rank first then suit, so that a default deck enumerates in
/// a fixed rank major canonical order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Self { rank, suit }
    }

    /// Returns the card rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
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

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the "10h" three characters spelling for a ten.
        let s = s.trim();
        let (rank, suit) = match s.len() {
            2 => {
                let mut chars = s.chars();
                let rank = Rank::try_from(chars.next().unwrap())?;
                (rank, Suit::try_from(chars.next().unwrap())?)
            }
            3 if s.starts_with("10") => {
                (Rank::Ten, Suit::try_from(s.chars().nth(2).unwrap())?)
            }
            _ => return Err(CardError::Malformed(s.to_string())),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Parses a whitespace or comma separated list of cards.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

/// A cards deck.
///
/// A deck holds the 52 cards universe minus any card already visible on
/// the table, in canonical rank major order.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates the deck of cards left once the `excluded` cards are removed.
    ///
    /// Fails if the same card appears twice in `excluded`.
    pub fn remaining(excluded: &[Card]) -> Result<Self, CardError> {
        let mut seen = AHashSet::with_capacity(excluded.len());
        for card in excluded {
            if !seen.insert(*card) {
                return Err(CardError::Duplicate(*card));
            }
        }

        let mut deck = Self::default();
        deck.cards.retain(|c| !seen.contains(c));
        Ok(deck)
    }

    /// The cards left in the deck in canonical order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Calls the `f` closure for each k-cards subset of the deck.
    ///
    /// Subsets enumerate in canonical order so runs are deterministic.
    ///
    /// Panics if k is not 1 <= k <= 5.
    pub fn for_each_choose<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=5).contains(&k), "1 <= k <= 5");

        if k > self.cards.len() {
            return;
        }

        let n = self.cards.len();
        let mut h = [self.cards[0]; 5];

        for c1 in 0..n {
            h[0] = self.cards[c1];

            if k == 1 {
                f(&h[0..k]);
                continue;
            }

            for c2 in (c1 + 1)..n {
                h[1] = self.cards[c2];

                if k == 2 {
                    f(&h[0..k]);
                    continue;
                }

                for c3 in (c2 + 1)..n {
                    h[2] = self.cards[c3];

                    if k == 3 {
                        f(&h[0..k]);
                        continue;
                    }

                    for c4 in (c3 + 1)..n {
                        h[3] = self.cards[c4];

                        if k == 4 {
                            f(&h[0..k]);
                            continue;
                        }

                        for c5 in (c4 + 1)..n {
                            h[4] = self.cards[c5];
                            f(&h[0..k]);
                        }
                    }
                }
            }
        }
    }

    /// Calls the `f` closure with `samples` random k-cards draws.
    ///
    /// Each draw is without replacement, draws are independent of each
    /// other.
    ///
    /// Panics if k is larger than the cards left in the deck.
    pub fn sample<R, F>(&self, rng: &mut R, samples: usize, k: usize, mut f: F)
    where
        R: Rng,
        F: FnMut(&[Card]),
    {
        assert!(k <= self.cards.len(), "not enough cards to sample");

        let n = self.cards.len();
        let mut cards = self.cards.clone();

        for _ in 0..samples {
            // Partial Fisher-Yates, the first k cards are a uniform draw.
            for i in 0..k {
                let j = rng.random_range(i..n);
                cards.swap(i, j);
            }

            f(&cards[0..k]);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Rank::ranks()
            .flat_map(|r| Suit::suits().map(move |s| Card::new(r, s)))
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
