// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classification and ordering.
use serde::{Deserialize, Serialize};
use std::fmt;

use railbird_cards::Card;

/// The category of a five cards hand, ordered weakest to strongest.
///
/// A royal flush is the top straight flush, not a category of its own.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum HandCategory {
    /// No pair, the five ranks break ties.
    HighCard,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five consecutive ranks, ace low allowed.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        };

        write!(f, "{label}")
    }
}

/// The value of a 5, 6, or 7 cards hand.
///
/// A value holds the category of the best five cards hand and its
/// tiebreaker ranks in decreasing significance, for a two pair hand the
/// higher pair, the lower pair, then the kicker. The derived ordering
/// compares the category first then the tiebreakers lexicographically, so
/// hands that split the pot compare exactly equal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct HandValue {
    category: HandCategory,
    // Tiebreaker rank values, unused positions padded with zeros so that
    // lexicographic comparison stops at the first meaningful difference.
    ranks: [u8; 5],
}

impl HandValue {
    /// Evaluates a 5, 6, or 7 cards hand.
    ///
    /// For more than five cards every five cards subset is evaluated and
    /// the best value returned, 21 subsets for a seven cards hand.
    ///
    /// Panics if the hand has fewer than 5 or more than 7 cards.
    pub fn eval(cards: &[Card]) -> HandValue {
        let n = cards.len();
        assert!((5..=7).contains(&n), "5 to 7 cards");

        if n == 5 {
            return Self::eval_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
        }

        let mut best: Option<HandValue> = None;
        for c1 in 0..(n - 4) {
            for c2 in (c1 + 1)..(n - 3) {
                for c3 in (c2 + 1)..(n - 2) {
                    for c4 in (c3 + 1)..(n - 1) {
                        for c5 in (c4 + 1)..n {
                            let value = Self::eval_five(&[
                                cards[c1], cards[c2], cards[c3], cards[c4], cards[c5],
                            ]);

                            if best.is_none_or(|b| value > b) {
                                best = Some(value);
                            }
                        }
                    }
                }
            }
        }

        best.unwrap()
    }

    /// The category of the best five cards hand.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The tiebreaker rank values in decreasing significance.
    ///
    /// The length and meaning depend on the category, a straight has only
    /// its high card, a flush all five ranks descending.
    pub fn tiebreakers(&self) -> &[u8] {
        let len = match self.category {
            HandCategory::StraightFlush | HandCategory::Straight => 1,
            HandCategory::FourOfAKind | HandCategory::FullHouse => 2,
            HandCategory::ThreeOfAKind | HandCategory::TwoPair => 3,
            HandCategory::OnePair => 4,
            HandCategory::Flush | HandCategory::HighCard => 5,
        };

        &self.ranks[..len]
    }

    fn new(category: HandCategory, tiebreakers: &[u8]) -> Self {
        let mut ranks = [0u8; 5];
        ranks[..tiebreakers.len()].copy_from_slice(tiebreakers);
        Self { category, ranks }
    }

    fn eval_five(cards: &[Card; 5]) -> HandValue {
        // Rank values in descending order.
        let mut values = [0u8; 5];
        for (v, c) in values.iter_mut().zip(cards) {
            *v = c.rank().value();
        }
        values.sort_unstable_by(|a, b| b.cmp(a));

        let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        let straight_high = straight_high(&values);

        if let Some(high) = straight_high {
            if is_flush {
                return Self::new(HandCategory::StraightFlush, &[high]);
            }
        }

        // Group repeated ranks, biggest group first then higher rank.
        let mut counts = [0u8; 15];
        for v in values {
            counts[v as usize] += 1;
        }

        let mut groups = [(0u8, 0u8); 5];
        let mut ngroups = 0;
        for v in (2..=14u8).rev() {
            if counts[v as usize] > 0 {
                groups[ngroups] = (counts[v as usize], v);
                ngroups += 1;
            }
        }

        let groups = &mut groups[..ngroups];
        groups.sort_unstable_by(|a, b| b.cmp(a));

        match (groups[0].0, groups.get(1).map_or(0, |g| g.0)) {
            (4, _) => Self::new(HandCategory::FourOfAKind, &[groups[0].1, groups[1].1]),
            (3, 2) => Self::new(HandCategory::FullHouse, &[groups[0].1, groups[1].1]),
            _ if is_flush => Self::new(HandCategory::Flush, &values),
            _ if straight_high.is_some() => {
                Self::new(HandCategory::Straight, &[straight_high.unwrap()])
            }
            (3, _) => Self::new(
                HandCategory::ThreeOfAKind,
                &[groups[0].1, groups[1].1, groups[2].1],
            ),
            (2, 2) => Self::new(
                HandCategory::TwoPair,
                &[groups[0].1, groups[1].1, groups[2].1],
            ),
            (2, _) => Self::new(
                HandCategory::OnePair,
                &[groups[0].1, groups[1].1, groups[2].1, groups[3].1],
            ),
            _ => Self::new(HandCategory::HighCard, &values),
        }
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}

/// Returns the high card of a straight given descending rank values.
///
/// The ace low straight A-2-3-4-5 counts with a high card of five.
fn straight_high(values: &[u8; 5]) -> Option<u8> {
    let distinct = values.windows(2).all(|w| w[0] > w[1]);
    if !distinct {
        return None;
    }

    if values[0] - values[4] == 4 {
        Some(values[0])
    } else if values == &[14, 5, 4, 3, 2] {
        Some(5)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use railbird_cards::{Deck, parse_cards};

    fn eval(s: &str) -> HandValue {
        HandValue::eval(&parse_cards(s).unwrap())
    }

    #[test]
    fn category_ordering() {
        // One representative hand per category, royal flush down to a
        // high card.
        let hands = [
            eval("Ah Kh Qh Jh Th"),
            eval("9h 8h 7h 6h 5h"),
            eval("9c 9d 9h 9s Ah"),
            eval("9c 9d 9h Ah As"),
            eval("Ah Kh 9h 5h 3h"),
            eval("9c 8d 7h 6s 5c"),
            eval("9c 9d 9h Ah Ks"),
            eval("9c 9d Ah As 5c"),
            eval("9c 9d Ah Ks Qc"),
            eval("Ah Kd Qc 9s 5c"),
        ];

        let categories = [
            HandCategory::StraightFlush,
            HandCategory::StraightFlush,
            HandCategory::FourOfAKind,
            HandCategory::FullHouse,
            HandCategory::Flush,
            HandCategory::Straight,
            HandCategory::ThreeOfAKind,
            HandCategory::TwoPair,
            HandCategory::OnePair,
            HandCategory::HighCard,
        ];

        for (hand, category) in hands.iter().zip(categories) {
            assert_eq!(hand.category(), category);
        }

        for pair in hands.windows(2) {
            assert!(pair[0] > pair[1], "{} <= {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn ace_low_straight() {
        let wheel = eval("Ah 2c 3d 4s 5h");
        assert_eq!(wheel.category(), HandCategory::Straight);
        assert_eq!(wheel.tiebreakers(), &[5]);

        let six_high = eval("2c 3d 4s 5h 6d");
        assert_eq!(six_high.category(), HandCategory::Straight);
        assert!(wheel < six_high);

        // Same for a straight flush.
        let steel_wheel = eval("Ah 2h 3h 4h 5h");
        assert_eq!(steel_wheel.category(), HandCategory::StraightFlush);
        assert_eq!(steel_wheel.tiebreakers(), &[5]);
        assert!(steel_wheel < eval("2s 3s 4s 5s 6s"));

        // An ace around the corner is not a straight.
        let not_straight = eval("Jh Qc Kd As 2h");
        assert_eq!(not_straight.category(), HandCategory::HighCard);
    }

    #[test]
    fn kicker_ordering() {
        // Pair of aces, king kicker beats queen kicker.
        assert!(eval("Ah Ad Kc 9d 2s") > eval("Ah Ad Qc Jd 9s"));
        assert_eq!(eval("Ah Ad Kc 9d 2s").tiebreakers(), &[14, 13, 9, 2]);

        // Higher second pair wins, then the kicker.
        assert!(eval("Ah Ad 3c 3d Ks") > eval("Ac As 2c 2d Ks"));
        assert!(eval("Ah Ad 3c 3d Ks") > eval("Ac As 3h 3s Qs"));
        assert_eq!(eval("Ah Ad 3c 3d Ks").tiebreakers(), &[14, 3, 13]);

        // Full house compares the triplet then the pair.
        assert!(eval("9c 9d 9h 2h 2s") > eval("8c 8d 8h Ah As"));
        assert!(eval("9c 9d 9h 3h 3s") > eval("9c 9d 9s 2h 2s"));

        // Quads compare the quad rank then the kicker.
        assert!(eval("9c 9d 9h 9s 2h") > eval("8c 8d 8h 8s Ah"));
        assert!(eval("9c 9d 9h 9s Ah") > eval("9c 9d 9h 9s Kh"));

        // A flush compares all five ranks in descending order.
        assert!(eval("Ah Kh 9h 5h 3h") > eval("Ad Kd 9d 4d 3d"));

        // Trips compare the two kickers in descending order.
        assert!(eval("9c 9d 9h Ah Ks") > eval("9c 9d 9h Ad Qs"));
    }

    #[test]
    fn exact_ties() {
        // Equal category and tiebreakers in different suits tie exactly.
        assert_eq!(eval("Ah Ad Kc 9d 2s"), eval("As Ac Kd 9h 2c"));
        assert_eq!(eval("9c 8d 7h 6s 5c"), eval("9d 8h 7s 6c 5d"));

        // Both players play the board pair with the same kickers.
        let board = "Ad Kc Qh 8s 8d";
        let p1 = eval(&format!("{board} 2c 3c"));
        let p2 = eval(&format!("{board} 2d 3d"));
        assert_eq!(p1, p2);
        assert_eq!(p1.category(), HandCategory::OnePair);
    }

    #[test]
    fn best_of_seven() {
        // A seven cards hand with both a flush and a pair plays the flush.
        let hv = eval("Ah Kh 9h 5h 3h Ad As");
        assert_eq!(hv.category(), HandCategory::Flush);
        assert_eq!(hv.tiebreakers(), &[14, 13, 9, 5, 3]);

        // Six cards, the lowest kicker is dropped.
        let hv = eval("Ah Ad Kc 9d 3s 2s");
        assert_eq!(hv.category(), HandCategory::OnePair);
        assert_eq!(hv.tiebreakers(), &[14, 13, 9, 3]);

        // The best five of seven make a straight.
        let hv = eval("2c 4d 9c 8d 7h 6s 5c");
        assert_eq!(hv.category(), HandCategory::Straight);
        assert_eq!(hv.tiebreakers(), &[9]);
    }

    #[test]
    fn five_cards_frequencies() {
        // Category frequencies over all C(52,5) hands, and the number of
        // distinct hand strength classes.
        let mut counts = [0usize; 9];
        let mut classes = HashSet::default();

        Deck::default().for_each_choose(5, |hand| {
            let hv = HandValue::eval(hand);
            counts[hv.category() as usize] += 1;
            classes.insert(hv);
        });

        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
        assert_eq!(counts[HandCategory::HighCard as usize], 1_302_540);
        assert_eq!(counts[HandCategory::OnePair as usize], 1_098_240);
        assert_eq!(counts[HandCategory::TwoPair as usize], 123_552);
        assert_eq!(counts[HandCategory::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandCategory::Straight as usize], 10_200);
        assert_eq!(counts[HandCategory::Flush as usize], 5_108);
        assert_eq!(counts[HandCategory::FullHouse as usize], 3_744);
        assert_eq!(counts[HandCategory::FourOfAKind as usize], 624);
        assert_eq!(counts[HandCategory::StraightFlush as usize], 40);

        assert_eq!(classes.len(), 7_462);
    }
}
