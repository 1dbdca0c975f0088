// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Railbird Poker hand equity estimator.
//!
//! Given each visible player's hole cards and the revealed board this
//! crate computes every player's probability of winning or tying the hand
//! once the remaining board cards are dealt. With two or fewer board cards
//! to come the estimator enumerates every completion exhaustively, with
//! the whole board to come it falls back to Monte Carlo sampling:
//!
//! ```
//! # use railbird_cards::parse_cards;
//! # use railbird_equity::{Estimator, EquityRequest, PlayerHand, PlayerId, RequestId};
//! let request = EquityRequest {
//!     request_id: RequestId::new(1),
//!     players: vec![
//!         PlayerHand::parse(PlayerId::new(1), "Ah Kh").unwrap(),
//!         PlayerHand::parse(PlayerId::new(2), "2c 2d").unwrap(),
//!     ],
//!     board: parse_cards("Ad Kd 2h").unwrap(),
//! };
//!
//! let result = Estimator::default().estimate_seeded(&request, 42).unwrap();
//! let total: f64 = result
//!     .players
//!     .iter()
//!     .map(|p| p.win_pct + p.tie_pct)
//!     .sum();
//! assert!((total - 100.0).abs() < 1e-6);
//! ```
//!
//! The [EquityWorker] runs the estimator on a dedicated thread so Monte
//! Carlo runs never block the caller, and discards results superseded by a
//! newer request:
//!
//! ```no_run
//! # use railbird_cards::parse_cards;
//! # use railbird_equity::{Estimator, EquityWorker, PlayerHand, PlayerId};
//! let mut worker = EquityWorker::new(Estimator::default());
//!
//! let players = vec![
//!     PlayerHand::parse(PlayerId::new(1), "Ah Kh").unwrap(),
//!     PlayerHand::parse(PlayerId::new(2), "2c 2d").unwrap(),
//! ];
//!
//! worker.submit(players, parse_cards("Ad Kd 2h").unwrap()).unwrap();
//! // Only ever the result for the latest submitted request.
//! if let Some(result) = worker.poll() {
//!     println!("request {} equities ready", result.request_id);
//! }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod estimator;
mod request;
mod tracker;
mod worker;

pub use estimator::Estimator;
pub use request::{
    EquityRequest, EquityResult, PlayerEquity, PlayerHand, PlayerId, RequestError, RequestId,
    ResultKind,
};
pub use tracker::RequestTracker;
pub use worker::EquityWorker;

// Reexport cards and eval types.
pub use railbird_cards::{Card, CardError, Deck, Rank, Suit};
pub use railbird_eval::{HandCategory, HandValue};
