//! # Hero Banner Host
//!
//! Owns the carousel state machine and its auto-advance timer.
//!
//! ## Timer Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Auto-Advance Lifecycle                               │
//! │                                                                         │
//! │  start()                                                                │
//! │    │                                                                    │
//! │    ├── auto_slide off or ≤1 active banner ──► no task scheduled        │
//! │    │                                                                    │
//! │    └── otherwise ──► spawn rotation task                                │
//! │                        loop {                                           │
//! │                          select! {                                      │
//! │                            interval tick ──► carousel.next()           │
//! │                            shutdown      ──► break                     │
//! │                          }                                              │
//! │                        }                                                │
//! │                                                                         │
//! │  stop() / Drop ──► shutdown signal + abort                             │
//! │                    (no tick may mutate state after teardown)           │
//! │                                                                         │
//! │  set_banners() ──► rotation set recomputed; task stopped when the      │
//! │                    new set no longer rotates, started when it does     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use medigo_catalog::fallback::default_banners;
use medigo_core::{Banner, Carousel, SlideDirection};

/// Handle to a running rotation task.
struct RotationTask {
    shutdown_tx: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

/// The hero banner screen component: carousel state plus timer lifecycle.
pub struct HeroBanner {
    /// Shared with the rotation task; manual controls and ticks serialize
    /// through this lock.
    carousel: Arc<Mutex<Carousel>>,

    /// Whether the timer should run at all (host-supplied setting).
    auto_slide: bool,

    /// Tick period for auto-advance.
    interval: Duration,

    /// Running rotation task, if any.
    rotation: Option<RotationTask>,
}

impl HeroBanner {
    /// Creates a host over the given banners. The timer is not started
    /// until [`HeroBanner::start`] is called.
    pub fn new(banners: Vec<Banner>, auto_slide: bool, interval: Duration) -> Self {
        HeroBanner {
            carousel: Arc::new(Mutex::new(Carousel::new(banners))),
            auto_slide,
            interval,
            rotation: None,
        }
    }

    /// Creates a host over the bundled default banner set.
    pub fn with_default_banners(interval: Duration) -> Self {
        Self::new(default_banners(), true, interval)
    }

    /// Starts the auto-advance timer.
    ///
    /// No-op when auto-slide is disabled, when a task is already running,
    /// or when the active set has ≤ 1 entries (nothing to rotate).
    pub fn start(&mut self) {
        if !self.auto_slide || self.rotation.is_some() {
            return;
        }
        if !self.lock().should_rotate() {
            debug!("Not scheduling rotation: fewer than two active banners");
            return;
        }

        let carousel = Arc::clone(&self.carousel);
        let interval = self.interval;
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel(1);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // The first tick of a tokio interval fires immediately; consume it
            // so the first advance lands one full period after start.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        carousel.lock().expect("Carousel mutex poisoned").next();
                    }
                    _ = shutdown_rx.recv() => {
                        debug!("Rotation task shutting down");
                        break;
                    }
                }
            }
        });

        info!(interval_ms = self.interval.as_millis() as u64, "Rotation started");
        self.rotation = Some(RotationTask {
            shutdown_tx,
            handle,
        });
    }

    /// Stops the auto-advance timer, if running.
    pub fn stop(&mut self) {
        if let Some(task) = self.rotation.take() {
            // Signal first for a clean exit; abort covers a full channel or
            // an already-wedged task.
            let _ = task.shutdown_tx.try_send(());
            task.handle.abort();
            info!("Rotation stopped");
        }
    }

    /// Whether a rotation task is currently scheduled.
    pub fn is_rotating(&self) -> bool {
        self.rotation.is_some()
    }

    /// Replaces the banner list.
    ///
    /// The carousel clamps its index; the timer is stopped when the new set
    /// no longer rotates and (re)started when it does.
    pub fn set_banners(&mut self, banners: Vec<Banner>) {
        let should_rotate = {
            let mut carousel = self.lock();
            carousel.set_banners(banners);
            carousel.should_rotate()
        };
        if !should_rotate {
            self.stop();
        } else if self.auto_slide && self.rotation.is_none() {
            self.start();
        }
    }

    /// Manual next (right arrow).
    pub fn next(&self) {
        self.lock().next();
    }

    /// Manual previous (left arrow).
    pub fn previous(&self) {
        self.lock().previous();
    }

    /// Jump to a slide (dot indicator).
    pub fn go_to(&self, index: usize) {
        self.lock().go_to(index);
    }

    /// The currently displayed banner, cloned out of the lock.
    pub fn current_banner(&self) -> Option<Banner> {
        self.lock().current().cloned()
    }

    pub fn current_index(&self) -> usize {
        self.lock().current_index()
    }

    pub fn direction(&self) -> SlideDirection {
        self.lock().direction()
    }

    pub fn active_len(&self) -> usize {
        self.lock().active_len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Carousel> {
        self.carousel.lock().expect("Carousel mutex poisoned")
    }
}

impl Drop for HeroBanner {
    fn drop(&mut self) {
        // The owning screen is gone; no tick may mutate state after this.
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banners(n: usize) -> Vec<Banner> {
        (0..n)
            .map(|i| Banner::new(format!("{i}"), format!("Banner {i}")))
            .collect()
    }

    const PERIOD: Duration = Duration::from_secs(5);

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance_ticks_forward() {
        let mut hero = HeroBanner::new(banners(3), true, PERIOD);
        hero.start();
        assert!(hero.is_rotating());
        assert_eq!(hero.current_index(), 0);

        // Ticks land at t = 5s and t = 10s.
        tokio::time::sleep(PERIOD * 2 + Duration::from_millis(10)).await;
        assert_eq!(hero.current_index(), 2);
        assert_eq!(hero.direction(), SlideDirection::Forward);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance_wraps() {
        let mut hero = HeroBanner::new(banners(2), true, PERIOD);
        hero.start();

        tokio::time::sleep(PERIOD * 2 + Duration::from_millis(10)).await;
        assert_eq!(hero.current_index(), 0); // 0 -> 1 -> 0
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_timer_for_single_banner() {
        let mut hero = HeroBanner::new(banners(1), true, PERIOD);
        hero.start();
        assert!(!hero.is_rotating());

        tokio::time::sleep(PERIOD * 3).await;
        assert_eq!(hero.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_timer_when_auto_slide_disabled() {
        let mut hero = HeroBanner::new(banners(3), false, PERIOD);
        hero.start();
        assert!(!hero.is_rotating());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_rotation() {
        let mut hero = HeroBanner::new(banners(3), true, PERIOD);
        hero.start();

        tokio::time::sleep(PERIOD + Duration::from_millis(10)).await;
        assert_eq!(hero.current_index(), 1);

        hero.stop();
        assert!(!hero.is_rotating());
        tokio::time::sleep(PERIOD * 3).await;
        assert_eq!(hero.current_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shrinking_to_one_banner_stops_rotation() {
        let mut hero = HeroBanner::new(banners(3), true, PERIOD);
        hero.start();
        assert!(hero.is_rotating());

        hero.set_banners(banners(1));
        assert!(!hero.is_rotating());
        assert_eq!(hero.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_growing_set_restarts_rotation() {
        let mut hero = HeroBanner::new(banners(1), true, PERIOD);
        hero.start();
        assert!(!hero.is_rotating());

        hero.set_banners(banners(3));
        assert!(hero.is_rotating());
    }

    #[tokio::test]
    async fn test_manual_controls_without_timer() {
        let hero = HeroBanner::new(banners(3), false, PERIOD);
        hero.next();
        hero.next();
        assert_eq!(hero.current_index(), 2);
        hero.previous();
        assert_eq!(hero.current_index(), 1);
        hero.go_to(0);
        assert_eq!(hero.direction(), SlideDirection::Backward);
    }

    #[tokio::test]
    async fn test_default_banner_set() {
        let hero = HeroBanner::with_default_banners(PERIOD);
        assert_eq!(hero.active_len(), 3);
        assert_eq!(
            hero.current_banner().unwrap().title,
            "Get 30% Off on Your First Order"
        );
    }
}
