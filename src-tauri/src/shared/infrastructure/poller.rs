//! Interval-driven refetch loops.
//!
//! Each page keeps its lists current with its own poll cadence. Realtime
//! events do not merge payloads into state; they [`nudge`](Poller::nudge)
//! the matching poller for an immediate refetch instead.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

use crate::shared::errors::AppResult;
use crate::{log_debug, log_warn};

pub struct Poller {
    name: &'static str,
    interval: Duration,
    notify: Notify,
    cancel: CancellationToken,
}

impl Poller {
    pub fn new(name: &'static str, interval: Duration, cancel: CancellationToken) -> Arc<Self> {
        Arc::new(Self {
            name,
            interval,
            notify: Notify::new(),
            cancel,
        })
    }

    /// Request an immediate refetch ahead of the next interval tick.
    pub fn nudge(&self) {
        self.notify.notify_one();
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Drive the poll loop until cancellation. A failing tick is logged and
    /// retried on the next cycle; the next successful poll reconciles state.
    pub async fn run<F, Fut>(self: Arc<Self>, tick: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = AppResult<()>> + Send,
    {
        log_debug!("Poller '{}' started ({:?} interval)", self.name, self.interval);

        loop {
            if let Err(e) = tick().await {
                log_warn!("Poller '{}' tick failed: {}", self.name, e);
            }

            tokio::select! {
                _ = self.cancel.cancelled() => {
                    log_debug!("Poller '{}' stopped", self.name);
                    break;
                }
                _ = tokio::time::sleep(self.interval) => {}
                _ = self.notify.notified() => {
                    log_debug!("Poller '{}' nudged for immediate refetch", self.name);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_poller_ticks_and_stops_on_cancel() {
        let cancel = CancellationToken::new();
        let poller = Poller::new("test", Duration::from_millis(10), cancel.clone());
        let ticks = Arc::new(AtomicUsize::new(0));

        let counted = ticks.clone();
        let handle = tokio::spawn(poller.run(move || {
            let counted = counted.clone();
            async move {
                counted.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        }));

        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel.cancel();
        handle.await.unwrap();

        assert!(ticks.load(Ordering::SeqCst) >= 2);
    }

    #[tokio::test]
    async fn test_nudge_triggers_early_tick() {
        let cancel = CancellationToken::new();
        let poller = Poller::new("nudged", Duration::from_secs(60), cancel.clone());
        let ticks = Arc::new(AtomicUsize::new(0));

        let counted = ticks.clone();
        let handle = tokio::spawn(poller.clone().run(move || {
            let counted = counted.clone();
            async move {
                counted.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        }));

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1, "only the initial tick ran");

        poller.nudge();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2, "nudge forced a refetch");

        cancel.cancel();
        handle.await.unwrap();
    }
}
