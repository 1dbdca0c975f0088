// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example odds -- --hand "Ah Kh" --hand "2c 2d" --board "Ad Kd 2h"
// Exact result
// player 1: AhKh  win  16.8%  tie   0.0%
// player 2: 2c2d  win  83.2%  tie   0.0%
// ```

//! Command line equity demo.
use anyhow::Result;
use clap::Parser;
use std::time::Duration;

use railbird_cards::parse_cards;
use railbird_equity::{Estimator, EquityWorker, PlayerHand, PlayerId};

#[derive(Debug, Parser)]
struct Cli {
    /// A player's hole cards, repeat for each player (eg. "Ah Kh").
    #[clap(long = "hand", required = true)]
    hands: Vec<String>,
    /// The board cards (eg. "Ad Kd 2h").
    #[clap(long, default_value = "")]
    board: String,
    /// Monte Carlo trials used when no board cards are known.
    #[clap(long, default_value_t = Estimator::DEFAULT_TRIALS)]
    trials: usize,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let players = cli
        .hands
        .iter()
        .enumerate()
        .map(|(id, s)| PlayerHand::parse(PlayerId::new(id as u32 + 1), s))
        .collect::<Result<Vec<_>, _>>()?;
    let board = parse_cards(&cli.board)?;

    let mut worker = EquityWorker::new(Estimator::with_trials(cli.trials));
    worker.submit(players.clone(), board)?;

    let result = worker
        .recv_latest(Duration::from_secs(60))
        .expect("no result from worker");

    println!("{:?} result", result.kind);
    for (hand, equity) in players.iter().zip(&result.players) {
        println!(
            "player {}: {}{}  win {:5.1}%  tie {:5.1}%",
            equity.player_id,
            hand.hole_cards[0],
            hand.hole_cards[1],
            equity.win_pct,
            equity.tie_pct
        );
    }

    Ok(())
}
