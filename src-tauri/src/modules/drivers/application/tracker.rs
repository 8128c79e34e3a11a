//! Continuous driver location reporting.
//!
//! The webview feeds raw geolocation fixes in; the tracker forwards the
//! latest one to the backend, throttled so a chatty GPS cannot flood the
//! API. Failures are logged and reported once, and never stop the watch.
//! The watch runs until it is explicitly stopped on logout or teardown.

use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::modules::drivers::domain::entities::LocationFix;
use crate::modules::drivers::domain::repository::DriverLocationRepository;
use crate::shared::errors::AppResult;
use crate::{log_debug, log_info, log_warn};

/// Minimum spacing between two location uploads.
const REPORT_PERIOD: Duration = Duration::from_secs(2);

pub struct LocationTracker {
    repo: Arc<dyn DriverLocationRepository>,
    latest: Mutex<Option<LocationFix>>,
    notify: Notify,
    active: Mutex<Option<CancellationToken>>,
    limiter: governor::DefaultDirectRateLimiter,
    error_reported: AtomicBool,
}

impl LocationTracker {
    pub fn new(repo: Arc<dyn DriverLocationRepository>) -> Arc<Self> {
        let quota = Quota::with_period(REPORT_PERIOD)
            .unwrap()
            .allow_burst(NonZeroU32::new(1).unwrap());
        Arc::new(Self {
            repo,
            latest: Mutex::new(None),
            notify: Notify::new(),
            active: Mutex::new(None),
            limiter: RateLimiter::direct(quota),
            error_reported: AtomicBool::new(false),
        })
    }

    pub fn is_running(&self) -> bool {
        self.active
            .lock()
            .unwrap()
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }

    /// Start the watch for `driver_id`. Returns false when one is already
    /// running (the existing watch keeps going).
    pub fn start(self: &Arc<Self>, driver_id: Uuid) -> bool {
        let mut active = self.active.lock().unwrap();
        if active.as_ref().is_some_and(|token| !token.is_cancelled()) {
            return false;
        }

        let cancel = CancellationToken::new();
        *active = Some(cancel.clone());
        self.error_reported.store(false, Ordering::SeqCst);

        let tracker = Arc::clone(self);
        tokio::spawn(async move {
            tracker.run(driver_id, cancel).await;
        });
        log_info!("Location tracking started for driver {}", driver_id);
        true
    }

    /// Explicit stop on logout or component teardown; the watch never
    /// expires by itself.
    pub fn stop(&self) {
        if let Some(token) = self.active.lock().unwrap().take() {
            token.cancel();
            log_info!("Location tracking stopped");
        }
    }

    /// Accept a fix from the webview's geolocation watch.
    pub fn push_fix(&self, fix: LocationFix) -> AppResult<()> {
        *self.latest.lock().unwrap() = Some(fix);
        self.notify.notify_one();
        Ok(())
    }

    /// Whether an upload failure has been shown to the user already.
    pub fn take_error_flag(&self) -> bool {
        self.error_reported.swap(false, Ordering::SeqCst)
    }

    async fn run(self: Arc<Self>, driver_id: Uuid, cancel: CancellationToken) {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    log_debug!("Location watch for {} torn down", driver_id);
                    break;
                }
                _ = self.notify.notified() => {}
            }

            // Throttle before draining the freshest fix
            self.limiter.until_ready().await;
            if cancel.is_cancelled() {
                break;
            }

            let fix = self.latest.lock().unwrap().take();
            if let Some(fix) = fix {
                match self.repo.update_location(driver_id, &fix).await {
                    Ok(()) => {
                        log_debug!("Location {} {:.5},{:.5} uploaded", driver_id, fix.lat, fix.lng);
                    }
                    Err(e) => {
                        // Report once to the user, keep watching regardless
                        if !self.error_reported.swap(true, Ordering::SeqCst) {
                            log_warn!("Location upload failed: {}", e);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;

    #[derive(Default)]
    struct RecordingRepo {
        uploads: AtomicUsize,
    }

    #[async_trait]
    impl DriverLocationRepository for RecordingRepo {
        async fn update_location(&self, _driver_id: Uuid, _fix: &LocationFix) -> AppResult<()> {
            self.uploads.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_start_is_idempotent() {
        let tracker = LocationTracker::new(Arc::new(RecordingRepo::default()));
        assert!(tracker.start(Uuid::new_v4()));
        assert!(!tracker.start(Uuid::new_v4()), "second start is a no-op");
        tracker.stop();
    }

    #[tokio::test]
    async fn test_fix_is_uploaded_and_stop_ends_watch() {
        let repo = Arc::new(RecordingRepo::default());
        let tracker = LocationTracker::new(repo.clone());
        let driver_id = Uuid::new_v4();
        tracker.start(driver_id);

        tracker.push_fix(LocationFix::new(41.0, 29.0).unwrap()).unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(repo.uploads.load(Ordering::SeqCst) >= 1);

        tracker.stop();
        assert!(!tracker.is_running());
    }
}
