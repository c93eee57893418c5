//! An asynchronous stream of random numbers and its collection.

use std::time::Duration;

use futures::future::join_all;
use futures::stream::{self, Stream, StreamExt};
use rand::Rng;
use tokio::time::Instant;
use tracing::trace;

/// Values produced by `async_generator`.
pub const GENERATED_COUNT: usize = 10;
/// Pause before each value of `async_generator`.
pub const GENERATOR_INTERVAL: Duration = Duration::from_secs(1);
/// Inclusive upper bound of each value of `async_generator`.
pub const GENERATOR_UPPER: f64 = 10.0;
/// Comprehensions run side by side by `measure_runtime`.
pub const RUNTIME_FANOUT: usize = 4;

/// Yield `count` values drawn uniformly from `[0, upper]`, sleeping
/// `interval` before each one.
///
/// # Panics
/// The stream panics on first value if `upper` is negative or not finite.
pub fn random_stream(count: usize, interval: Duration, upper: f64) -> impl Stream<Item = f64> {
    stream::unfold(0usize, move |produced| async move {
        if produced == count {
            return None;
        }
        tokio::time::sleep(interval).await;
        let value = rand::rng().random_range(0.0..=upper);
        trace!(produced, value, "generated");
        Some((value, produced + 1))
    })
}

/// Ten values in `[0, 10]`, one per second.
pub fn async_generator() -> impl Stream<Item = f64> {
    random_stream(GENERATED_COUNT, GENERATOR_INTERVAL, GENERATOR_UPPER)
}

pub async fn async_comprehension() -> Vec<f64> {
    async_generator().collect().await
}

/// Total time to run `RUNTIME_FANOUT` comprehensions concurrently. Since
/// they overlap this is close to one comprehension's duration, not four.
pub async fn measure_runtime() -> Duration {
    let start = Instant::now();
    join_all((0..RUNTIME_FANOUT).map(|_| async_comprehension())).await;
    start.elapsed()
}
