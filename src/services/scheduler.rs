// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fixed-interval repetition of a job, stopped by a shutdown future.

use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Run `job` immediately and then once per `period` until `shutdown` resolves.
///
/// A job in progress is finished before shutdown is observed. Returns the
/// number of completed runs.
pub async fn run_periodic<S, F, Fut>(period: Duration, shutdown: S, mut job: F) -> u64
where
    S: Future<Output = ()>,
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    let mut runs = 0;
    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => {
                tracing::info!(runs, "Shutdown requested, stopping scheduler");
                return runs;
            }
            _ = ticker.tick() => {
                job().await;
                runs += 1;
            }
        }
    }
}
