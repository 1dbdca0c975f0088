// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity worker thread.
use log::{error, info};
use std::{
    panic::{self, AssertUnwindSafe},
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

use railbird_cards::Card;

use crate::{
    estimator::Estimator,
    request::{EquityRequest, EquityResult, PlayerHand, RequestError, RequestId},
    tracker::RequestTracker,
};

/// Runs the estimator on a dedicated thread.
///
/// Requests are fire and forget, the worker processes them strictly in
/// arrival order and the caller polls for results. Only the result for
/// the most recently submitted request is ever returned, results for
/// superseded requests finish computing and are discarded on arrival.
///
/// The caller and the worker only exchange immutable request and result
/// payloads, no other state crosses the thread boundary.
#[derive(Debug)]
pub struct EquityWorker {
    requests_tx: Option<mpsc::Sender<EquityRequest>>,
    results_rx: mpsc::Receiver<EquityResult>,
    tracker: RequestTracker,
    task: Option<thread::JoinHandle<()>>,
}

impl EquityWorker {
    /// Creates a worker and starts its thread.
    pub fn new(estimator: Estimator) -> Self {
        let (requests_tx, requests_rx) = mpsc::channel::<EquityRequest>();
        let (results_tx, results_rx) = mpsc::channel();

        let task = thread::spawn(move || {
            info!("equity worker started");

            while let Ok(request) = requests_rx.recv() {
                let result =
                    panic::catch_unwind(AssertUnwindSafe(|| estimator.estimate(&request)));

                // Requests are validated on submit, any failure past that
                // point degrades to uniform odds instead of crashing.
                let result = match result {
                    Ok(Ok(result)) => result,
                    Ok(Err(e)) => {
                        error!("request {} failed: {e}", request.request_id);
                        EquityResult::fallback(&request)
                    }
                    Err(_) => {
                        error!("request {} panicked", request.request_id);
                        EquityResult::fallback(&request)
                    }
                };

                if results_tx.send(result).is_err() {
                    break;
                }
            }

            info!("equity worker stopped");
        });

        Self {
            requests_tx: Some(requests_tx),
            results_rx,
            tracker: RequestTracker::new(),
            task: Some(task),
        }
    }

    /// Validates and submits a request, returns its id.
    ///
    /// An invalid request fails here and never produces a result, the ids
    /// of requests already in flight stay unaffected.
    pub fn submit(
        &mut self,
        players: Vec<PlayerHand>,
        board: Vec<Card>,
    ) -> Result<RequestId, RequestError> {
        let mut request = EquityRequest {
            request_id: RequestId::new(0),
            players,
            board,
        };
        request.validate()?;

        request.request_id = self.tracker.issue();
        let request_id = request.request_id;

        if let Some(tx) = self.requests_tx.as_ref() {
            let _ = tx.send(request);
        }

        Ok(request_id)
    }

    /// Drains pending results, returns the one for the latest submitted
    /// request if it has arrived, stale results are discarded.
    pub fn poll(&mut self) -> Option<EquityResult> {
        let mut applied = None;
        while let Ok(result) = self.results_rx.try_recv() {
            if self.tracker.apply(&result) {
                applied = Some(result);
            }
        }

        applied
    }

    /// Waits up to `timeout` for the result of the latest submitted
    /// request, stale results are discarded as they arrive.
    pub fn recv_latest(&mut self, timeout: Duration) -> Option<EquityResult> {
        let deadline = Instant::now() + timeout;

        loop {
            let now = Instant::now();
            if now >= deadline {
                return None;
            }

            match self.results_rx.recv_timeout(deadline - now) {
                Ok(result) => {
                    if self.tracker.apply(&result) {
                        return Some(result);
                    }
                }
                Err(_) => return None,
            }
        }
    }

    /// The id of the latest submitted request.
    pub fn latest_issued(&self) -> Option<RequestId> {
        self.tracker.latest()
    }

    /// The id of the last result returned to the caller.
    pub fn last_applied(&self) -> Option<RequestId> {
        self.tracker.last_applied()
    }
}

impl Drop for EquityWorker {
    fn drop(&mut self) {
        // Drop the channel to signal the task to exit.
        self.requests_tx = None;
        if let Some(task) = self.task.take() {
            let _ = task.join();
        }
    }
}
