// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity request and result types.
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use railbird_cards::{Card, CardError, parse_cards};

/// Error for a structurally invalid equity request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// A card is malformed or appears twice.
    #[error(transparent)]
    Card(#[from] CardError),
    /// Fewer than two players.
    #[error("at least two players required, got {0}")]
    TooFewPlayers(usize),
    /// The board has a card count that cannot occur in a hand.
    #[error("board must have 0, 3, 4, or 5 cards, got {0}")]
    InvalidBoard(usize),
    /// The same player appears more than once.
    #[error("duplicate player {0}")]
    DuplicatePlayer(PlayerId),
}

/// A unique player identifier assigned by the caller.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PlayerId(u32);

impl PlayerId {
    /// Creates a player id with the given value.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A request identifier, strictly increasing across requests.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RequestId(u64);

impl RequestId {
    /// Creates a request id with the given value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player's hole cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHand {
    /// The player id.
    pub player_id: PlayerId,
    /// The player's two hole cards.
    pub hole_cards: [Card; 2],
}

impl PlayerHand {
    /// Creates a player hand.
    pub fn new(player_id: PlayerId, c1: Card, c2: Card) -> Self {
        Self {
            player_id,
            hole_cards: [c1, c2],
        }
    }

    /// Creates a player hand from the cards text encoding, e.g. `"Ah Kh"`.
    pub fn parse(player_id: PlayerId, s: &str) -> Result<Self, RequestError> {
        let cards = parse_cards(s)?;
        let [c1, c2] = cards[..] else {
            return Err(CardError::Malformed(s.to_string()).into());
        };

        Ok(Self::new(player_id, c1, c2))
    }
}

/// An equity estimation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquityRequest {
    /// The request id used to discard superseded results.
    pub request_id: RequestId,
    /// The players hole cards, at least two players.
    pub players: Vec<PlayerHand>,
    /// The revealed board cards, 0, 3, 4, or 5 cards.
    pub board: Vec<Card>,
}

impl EquityRequest {
    /// Checks this request is structurally valid.
    ///
    /// Fails if there are fewer than two players, the board card count
    /// cannot occur in a hand, a player appears twice, or a card appears
    /// twice across all hole cards and the board.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.players.len() < 2 {
            return Err(RequestError::TooFewPlayers(self.players.len()));
        }

        if !matches!(self.board.len(), 0 | 3 | 4 | 5) {
            return Err(RequestError::InvalidBoard(self.board.len()));
        }

        let mut ids = AHashSet::with_capacity(self.players.len());
        for player in &self.players {
            if !ids.insert(player.player_id) {
                return Err(RequestError::DuplicatePlayer(player.player_id));
            }
        }

        let mut cards = AHashSet::with_capacity(self.players.len() * 2 + self.board.len());
        let all = self
            .players
            .iter()
            .flat_map(|p| p.hole_cards.iter())
            .chain(self.board.iter());
        for card in all {
            if !cards.insert(*card) {
                return Err(CardError::Duplicate(*card).into());
            }
        }

        Ok(())
    }

    /// All the visible cards, hole cards then board.
    pub(crate) fn known_cards(&self) -> Vec<Card> {
        self.players
            .iter()
            .flat_map(|p| p.hole_cards.iter().copied())
            .chain(self.board.iter().copied())
            .collect()
    }
}

/// How an equity result was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultKind {
    /// Every board completion was enumerated, the result is exact.
    Exact,
    /// Monte Carlo sampled, the result is an estimate.
    Sampled,
    /// Uniform odds after an internal failure, not a computed result.
    Fallback,
}

/// A player's share of an equity result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerEquity {
    /// The player id.
    pub player_id: PlayerId,
    /// Percentage of trials this player wins outright.
    pub win_pct: f64,
    /// Percentage of the pot from split trials, 1/n credit per n-way tie.
    pub tie_pct: f64,
}

impl PlayerEquity {
    /// This player's total pot share, outright wins plus split credit.
    pub fn equity(&self) -> f64 {
        self.win_pct + self.tie_pct
    }
}

/// An equity estimation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquityResult {
    /// The id of the request this result answers.
    pub request_id: RequestId,
    /// How the result was computed.
    pub kind: ResultKind,
    /// Per player equities in request players order.
    pub players: Vec<PlayerEquity>,
}

impl EquityResult {
    /// Uniform odds for every player in the request, tagged as a fallback.
    pub fn fallback(request: &EquityRequest) -> Self {
        let win_pct = 100.0 / request.players.len() as f64;
        let players = request
            .players
            .iter()
            .map(|p| PlayerEquity {
                player_id: p.player_id,
                win_pct,
                tie_pct: 0.0,
            })
            .collect();

        Self {
            request_id: request.request_id,
            kind: ResultKind::Fallback,
            players,
        }
    }

    /// True if this is a degraded uniform odds result.
    pub fn is_fallback(&self) -> bool {
        self.kind == ResultKind::Fallback
    }
}
