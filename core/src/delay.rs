//! Random delays and their concurrent fan-out.
//!
//! # Design
//! `wait_random` is the only place that suspends. `wait_n` drives `n` of
//! them concurrently on the calling task and keeps completion order;
//! `task_wait_n` spawns each one as its own tokio task, joins the handles in
//! submission order and sorts the result. Nothing here cancels, times out,
//! or shares state between delays.

use std::time::Duration;

use futures::future::try_join_all;
use futures::stream::{FuturesUnordered, StreamExt};
use rand::Rng;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::error::DelayError;

pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(10);

/// Sleep for a duration drawn uniformly from `[0, max_delay]` and return it.
pub async fn wait_random(max_delay: Duration) -> Duration {
    let delay = rand::rng().random_range(Duration::ZERO..=max_delay);
    trace!(?delay, "sleeping");
    tokio::time::sleep(delay).await;
    delay
}

/// Run `n` random waits concurrently; results are in completion order.
pub async fn wait_n(n: usize, max_delay: Duration) -> Vec<Duration> {
    (0..n)
        .map(|_| wait_random(max_delay))
        .collect::<FuturesUnordered<_>>()
        .collect()
        .await
}

/// Spawn `wait_random` as a task on the current tokio runtime.
///
/// # Panics
/// Panics when called outside a tokio runtime.
pub fn task_wait_random(max_delay: Duration) -> JoinHandle<Duration> {
    tokio::spawn(wait_random(max_delay))
}

/// Spawn `n` random waits as tasks and return their delays sorted ascending.
pub async fn task_wait_n(n: usize, max_delay: Duration) -> Result<Vec<Duration>, DelayError> {
    debug!(n, ?max_delay, "spawning delay tasks");
    let handles: Vec<_> = (0..n).map(|_| task_wait_random(max_delay)).collect();
    let mut delays = try_join_all(handles).await?;
    delays.sort();
    Ok(delays)
}

/// Average wall-clock time per wait when running `wait_n(n, max_delay)` on a
/// fresh single-threaded runtime.
pub fn measure_time(n: usize, max_delay: Duration) -> Result<Duration, DelayError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let start = std::time::Instant::now();
    runtime.block_on(wait_n(n, max_delay));
    let total = start.elapsed();

    if n == 0 {
        return Ok(Duration::ZERO);
    }
    Ok(total.div_f64(n as f64))
}
