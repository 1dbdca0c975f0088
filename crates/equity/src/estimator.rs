// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Dual mode equity estimator.
use log::debug;
use rand::prelude::*;

use railbird_cards::{Card, Deck};
use railbird_eval::HandValue;

use crate::request::{
    EquityRequest, EquityResult, PlayerEquity, PlayerHand, RequestError, RequestId, ResultKind,
};

/// Estimates each player's win and tie probabilities.
///
/// With two or fewer board cards to come every completion is enumerated
/// and the result is exact, with the whole board to come the estimator
/// samples a fixed number of random completions.
#[derive(Debug, Clone)]
pub struct Estimator {
    trials: usize,
}

impl Estimator {
    /// Default number of Monte Carlo trials.
    pub const DEFAULT_TRIALS: usize = 5_000;

    /// Creates an estimator with the given Monte Carlo trials budget.
    pub fn with_trials(trials: usize) -> Self {
        assert!(trials > 0, "at least one trial");
        Self { trials }
    }

    /// Estimates equities for a request with a random seed.
    pub fn estimate(&self, request: &EquityRequest) -> Result<EquityResult, RequestError> {
        self.estimate_seeded(request, rand::rng().random())
    }

    /// Estimates equities for a request.
    ///
    /// The seed only affects Monte Carlo sampling, exact enumerations
    /// ignore it. Fails without computing anything if the request is
    /// invalid.
    pub fn estimate_seeded(
        &self,
        request: &EquityRequest,
        seed: u64,
    ) -> Result<EquityResult, RequestError> {
        request.validate()?;

        let deck = Deck::remaining(&request.known_cards())?;
        let unknown = 5 - request.board.len();

        let result = if unknown <= 2 {
            debug!(
                "request {} enumerating {unknown} unknown cards",
                request.request_id
            );
            self.enumerated(request, &deck)
        } else {
            debug!(
                "request {} sampling {} trials with seed {seed}",
                request.request_id, self.trials
            );
            self.sampled(request, &deck, seed)
        };

        Ok(result)
    }

    /// Exhaustive enumeration of every board completion.
    fn enumerated(&self, request: &EquityRequest, deck: &Deck) -> EquityResult {
        let mut tally = Tally::new(&request.players, &request.board);

        let unknown = 5 - request.board.len();
        if unknown == 0 {
            tally.score(&[]);
        } else {
            deck.for_each_choose(unknown, |completion| tally.score(completion));
        }

        tally.into_result(request.request_id, ResultKind::Exact)
    }

    /// Monte Carlo sampling of random board completions.
    fn sampled(&self, request: &EquityRequest, deck: &Deck, seed: u64) -> EquityResult {
        let mut tally = Tally::new(&request.players, &request.board);
        let unknown = 5 - request.board.len();

        let mut rng = StdRng::seed_from_u64(seed);
        deck.sample(&mut rng, self.trials, unknown, |completion| {
            tally.score(completion)
        });

        tally.into_result(request.request_id, ResultKind::Sampled)
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::with_trials(Self::DEFAULT_TRIALS)
    }
}

/// Win and tie counters accumulated across board completions.
struct Tally {
    players: Vec<PlayerHand>,
    board: Vec<Card>,
    wins: Vec<u64>,
    tie_shares: Vec<f64>,
    values: Vec<HandValue>,
    trials: u64,
}

impl Tally {
    fn new(players: &[PlayerHand], board: &[Card]) -> Self {
        Self {
            players: players.to_vec(),
            board: board.to_vec(),
            wins: vec![0; players.len()],
            tie_shares: vec![0.0; players.len()],
            values: Vec::with_capacity(players.len()),
            trials: 0,
        }
    }

    /// Scores one board completion.
    ///
    /// The single best player accrues a full win, on a tie each of the n
    /// best players accrues 1/n of split credit instead.
    fn score(&mut self, completion: &[Card]) {
        debug_assert_eq!(self.board.len() + completion.len(), 5);

        let mut seven = [self.players[0].hole_cards[0]; 7];
        seven[2..2 + self.board.len()].copy_from_slice(&self.board);
        seven[2 + self.board.len()..].copy_from_slice(completion);

        self.values.clear();
        for player in &self.players {
            seven[0] = player.hole_cards[0];
            seven[1] = player.hole_cards[1];
            self.values.push(HandValue::eval(&seven));
        }

        let best = *self.values.iter().max().unwrap();
        let winners = self.values.iter().filter(|v| **v == best).count();

        if winners == 1 {
            let idx = self.values.iter().position(|v| *v == best).unwrap();
            self.wins[idx] += 1;
        } else {
            let share = 1.0 / winners as f64;
            for (idx, value) in self.values.iter().enumerate() {
                if *value == best {
                    self.tie_shares[idx] += share;
                }
            }
        }

        self.trials += 1;
    }

    fn into_result(self, request_id: RequestId, kind: ResultKind) -> EquityResult {
        let trials = self.trials as f64;
        let players = self
            .players
            .iter()
            .zip(self.wins.iter().zip(&self.tie_shares))
            .map(|(player, (wins, tie_share))| PlayerEquity {
                player_id: player.player_id,
                win_pct: 100.0 * *wins as f64 / trials,
                tie_pct: 100.0 * tie_share / trials,
            })
            .collect();

        EquityResult {
            request_id,
            kind,
            players,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railbird_cards::parse_cards;

    use crate::request::PlayerId;

    fn request(players: &[&str], board: &str) -> EquityRequest {
        EquityRequest {
            request_id: RequestId::new(1),
            players: players
                .iter()
                .enumerate()
                .map(|(id, s)| PlayerHand::parse(PlayerId::new(id as u32 + 1), s).unwrap())
                .collect(),
            board: parse_cards(board).unwrap(),
        }
    }

    fn assert_conservation(result: &EquityResult) {
        let total: f64 = result.players.iter().map(PlayerEquity::equity).sum();
        assert!((total - 100.0).abs() < 1e-6, "total {total}");

        for p in &result.players {
            assert!(p.win_pct >= 0.0 && p.tie_pct >= 0.0);
            assert!(p.equity() <= 100.0 + 1e-6);
        }
    }

    #[test]
    fn river_showdown() {
        // Trip deuces beat aces and kings two pair.
        let req = request(&["Ah Kh", "2c 2d"], "Ad Kd 2h 7s 9c");
        let res = Estimator::default().estimate_seeded(&req, 42).unwrap();

        assert_eq!(res.kind, ResultKind::Exact);
        assert_eq!(res.players[0].win_pct, 0.0);
        assert_eq!(res.players[0].tie_pct, 0.0);
        assert_eq!(res.players[1].win_pct, 100.0);
        assert_eq!(res.players[1].tie_pct, 0.0);
        assert_conservation(&res);
    }

    #[test]
    fn turn_exact_outs() {
        // Two pair against trips on the turn, only two aces and two kings
        // of the 44 river cards save the two pair with a full house.
        let req = request(&["Ah Kh", "2c 2d"], "Ad Kd 2h 7s");
        let res = Estimator::default().estimate_seeded(&req, 42).unwrap();

        assert_eq!(res.kind, ResultKind::Exact);
        assert!((res.players[0].win_pct - 400.0 / 44.0).abs() < 1e-9);
        assert!((res.players[1].win_pct - 4000.0 / 44.0).abs() < 1e-9);
        assert_eq!(res.players[0].tie_pct, 0.0);
        assert_conservation(&res);
    }

    #[test]
    fn flop_split_pot() {
        // Both players hold the same made straight in different suits, no
        // completion can differentiate them.
        let req = request(&["9c 8d", "9d 8h"], "7s 6c 5h");
        let res = Estimator::default().estimate_seeded(&req, 42).unwrap();

        assert_eq!(res.kind, ResultKind::Exact);
        for p in &res.players {
            assert_eq!(p.win_pct, 0.0);
            assert!((p.tie_pct - 50.0).abs() < 1e-9);
            assert!((p.equity() - 50.0).abs() < 1e-9);
        }
        assert_conservation(&res);
    }

    #[test]
    fn preflop_sampled() {
        // Aces against kings preflop is around 82% for the aces.
        let req = request(&["Ah Ad", "Kh Kd"], "");
        let res = Estimator::with_trials(20_000)
            .estimate_seeded(&req, 99)
            .unwrap();

        assert_eq!(res.kind, ResultKind::Sampled);
        let aces = res.players[0].equity();
        assert!((79.0..=85.0).contains(&aces), "aces equity {aces}");
        assert_conservation(&res);
    }

    #[test]
    fn sampled_matches_enumerated() {
        // A high trial Monte Carlo run on a flop scenario must agree with
        // the exhaustive enumeration within one percentage point.
        let est = Estimator::with_trials(50_000);
        let req = request(&["Ah Kh", "8c 8d"], "Ad 7s 6c");

        let deck = Deck::remaining(&req.known_cards()).unwrap();
        let exact = est.enumerated(&req, &deck);
        let sampled = est.sampled(&req, &deck, 1234);

        assert_eq!(exact.kind, ResultKind::Exact);
        assert_eq!(sampled.kind, ResultKind::Sampled);
        for (e, s) in exact.players.iter().zip(&sampled.players) {
            assert!((e.win_pct - s.win_pct).abs() < 1.0);
            assert!((e.tie_pct - s.tie_pct).abs() < 1.0);
        }

        assert_conservation(&exact);
        assert_conservation(&sampled);
    }

    #[test]
    fn sampled_is_reproducible() {
        let est = Estimator::default();
        let req = request(&["Ah Ad", "Kh Kd", "Qh Qd"], "");

        let res1 = est.estimate_seeded(&req, 7).unwrap();
        let res2 = est.estimate_seeded(&req, 7).unwrap();
        for (p1, p2) in res1.players.iter().zip(&res2.players) {
            assert_eq!(p1.win_pct, p2.win_pct);
            assert_eq!(p1.tie_pct, p2.tie_pct);
        }
    }

    #[test]
    fn three_way_conservation() {
        let est = Estimator::default();

        let req = request(&["Ah Ad", "Kh Kd", "Qh Qd"], "2c 7s Jd");
        assert_conservation(&est.estimate_seeded(&req, 3).unwrap());

        let req = request(&["Ah Ad", "Kh Kd", "Qh Qd"], "2c 7s Jd 3h");
        assert_conservation(&est.estimate_seeded(&req, 3).unwrap());

        let req = request(&["Ah Ad", "Kh Kd", "Qh Qd"], "2c 7s Jd 3h 9s");
        assert_conservation(&est.estimate_seeded(&req, 3).unwrap());
    }

    #[test]
    fn invalid_request_no_result() {
        // A card in two players hole cards fails before any evaluation.
        let req = request(&["Ah Kh", "Ah 2d"], "");
        let err = Estimator::default().estimate_seeded(&req, 42).unwrap_err();
        assert!(matches!(
            err,
            RequestError::Card(railbird_cards::CardError::Duplicate(_))
        ));
    }
}
