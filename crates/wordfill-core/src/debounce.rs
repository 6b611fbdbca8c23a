//! Cancellable debounce timer.
//!
//! Each call to [`Debouncer::schedule`] cancels the previous timer and arms a
//! new one. When a timer survives its quiet period the value is sent on the
//! output channel. Must be used from within a tokio runtime.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Default quiet period before a search is issued.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(400);

/// Coalesces bursts of values into the last one after a quiet period.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::Sender<T>,
    pending: Option<CancellationToken>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub const fn new(delay: Duration, tx: mpsc::Sender<T>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm the timer for `value`, replacing any pending one.
    pub fn schedule(&mut self, value: T) {
        self.cancel();

        let token = CancellationToken::new();
        let timer = token.clone();
        let tx = self.tx.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                biased;
                () = timer.cancelled() => {
                    trace!("Debounce timer cancelled");
                }
                () = tokio::time::sleep(delay) => {
                    // Mark as fired so `is_pending` reports false.
                    timer.cancel();
                    if tx.send(value).await.is_err() {
                        trace!("Debounce receiver dropped");
                    }
                }
            }
        });
        self.pending = Some(token);
    }

    /// Cancel the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }

    /// Whether a timer is armed and has not fired or been cancelled.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|t| !t.is_cancelled())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tokio::time::{Instant, timeout};

    #[tokio::test(start_paused = true)]
    async fn fires_after_quiet_period() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut debouncer = Debouncer::new(DEFAULT_DELAY, tx);
        let start = Instant::now();
        debouncer.schedule("wor");
        assert!(debouncer.is_pending());

        let early = timeout(Duration::from_millis(399), rx.recv()).await;
        assert!(early.is_err(), "must not fire before the quiet period");

        assert_eq!(rx.recv().await, Some("wor"));
        assert!(start.elapsed() >= DEFAULT_DELAY);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn burst_coalesces_to_last_value() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut debouncer = Debouncer::new(DEFAULT_DELAY, tx);
        for word in ["w", "wo", "wor"] {
            debouncer.schedule(word);
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        assert_eq!(rx.recv().await, Some("wor"));
        let extra = timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(extra.is_err(), "only one value per quiet period");
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_suppresses_pending_value() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut debouncer = Debouncer::new(DEFAULT_DELAY, tx);
        debouncer.schedule("wor");
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        let got = timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(got.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_pending_timer() {
        let (tx, mut rx) = mpsc::channel(4);
        let keep_open = tx.clone();
        {
            let mut debouncer = Debouncer::new(DEFAULT_DELAY, tx);
            debouncer.schedule("wor");
        }
        let got = timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(got.is_err());
        drop(keep_open);
    }

    #[tokio::test(start_paused = true)]
    async fn separate_quiet_periods_each_fire() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut debouncer = Debouncer::new(DEFAULT_DELAY, tx);
        debouncer.schedule("he");
        assert_eq!(rx.recv().await, Some("he"));
        debouncer.schedule("hel");
        assert_eq!(rx.recv().await, Some("hel"));
        assert_eq!(debouncer.delay(), DEFAULT_DELAY);
        drop(debouncer);
        assert_eq!(rx.recv().await, None);
    }
}
