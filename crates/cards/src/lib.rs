// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Railbird Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use railbird_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! cards can also be parsed from their text encoding, rank `2`..`9`, `T`,
//! `J`, `Q`, `K`, `A` followed by a lowercase suit letter:
//!
//! ```
//! # use railbird_cards::{Card, Rank, Suit};
//! let th = "Th".parse::<Card>().unwrap();
//! assert_eq!(th, Card::new(Rank::Ten, Suit::Hearts));
//! ```
//!
//! and a [Deck] type for deck subtraction, k-subset enumeration, and
//! without replacement sampling. For example to iterate all flop
//! completions once two players cards are known:
//!
//! ```
//! # use railbird_cards::{parse_cards, Deck};
//! let known = parse_cards("Ah Kh 2c 2d Td 9d 3s").unwrap();
//! let deck = Deck::remaining(&known).unwrap();
//!
//! let mut count = 0;
//! deck.for_each_choose(2, |cards| {
//!     assert_eq!(cards.len(), 2);
//!     count += 1;
//! });
//! assert_eq!(count, 990);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardError, Deck, Rank, Suit, parse_cards};
