// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Railbird Poker hand evaluator.
//!
//! Hand evaluator for 5, 6 and 7 cards hands. The evaluator classifies the
//! best five cards hand into a [HandCategory] with the tiebreaker ranks
//! ordering hands within a category, so that two hands compare exactly
//! equal when they split the pot.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the
//! hand and compare it against another one:
//!
//! ```
//! # use railbird_eval::*;
//! # use railbird_cards::parse_cards;
//! let pair = HandValue::eval(&parse_cards("Ah Ad 9c 5d 2s").unwrap());
//! let trips = HandValue::eval(&parse_cards("7h 7d 7c Kd 2s").unwrap());
//! assert!(trips > pair);
//! assert_eq!(trips.category(), HandCategory::ThreeOfAKind);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod value;
pub use value::{HandCategory, HandValue};

// Reexport cards types.
pub use railbird_cards::{Card, Deck, Rank, Suit};
