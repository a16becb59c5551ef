//! Timer helpers that work in the browser and in native tests

use futures::future::{select, Either};
use invite_common::REVEAL_DELAY_MS;
use std::future::Future;

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Run `fut`, giving up after `ms`. `None` means the timer won.
pub async fn with_timeout<F: Future>(ms: u64, fut: F) -> Option<F::Output> {
    let fut = std::pin::pin!(fut);
    let timer = std::pin::pin!(sleep_ms(ms));
    match select(fut, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}

/// Wait out the reveal delay, then run `reveal`.
///
/// Dropping or cancelling the future before the delay elapses means `reveal`
/// never runs.
pub async fn after_reveal_delay<R>(reveal: impl FnOnce() -> R) -> R {
    sleep_ms(REVEAL_DELAY_MS).await;
    reveal()
}
