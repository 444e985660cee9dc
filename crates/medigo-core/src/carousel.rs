//! # Carousel Controller
//!
//! Cyclic slide state for the hero banner.
//!
//! ## State Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Carousel State Transitions                           │
//! │                                                                         │
//! │  UI Action / Timer          Operation            State Change           │
//! │  ─────────────────          ─────────            ────────────           │
//! │                                                                         │
//! │  Timer tick ──────────────► next() ────────────► index = (i+1) % n     │
//! │                                                  direction = Forward    │
//! │                                                                         │
//! │  Left arrow ──────────────► previous() ────────► index = (i-1+n) % n   │
//! │                                                  direction = Backward   │
//! │                                                                         │
//! │  Dot click ───────────────► go_to(k) ──────────► index = clamp(k)      │
//! │                                                  direction by compare   │
//! │                                                                         │
//! │  Banner list change ──────► set_banners() ─────► active set recomputed │
//! │                                                  index clamped          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `current_index` is always valid for the current active-banner count
//!   (0 when the set is empty)
//! - Only banners with `active == true` participate in rotation
//! - With ≤ 1 active banners, `next()`/`previous()` are identity and
//!   `should_rotate()` is false (the host must not schedule a timer)
//!
//! The index clamp on `set_banners` closes the stale-index gap: if the active
//! set shrinks while a later slide is selected, the selection moves to the
//! last remaining slide instead of going out of range.

use crate::types::{Banner, SlideDirection};

/// The hero banner carousel state machine.
///
/// Pure and synchronous: the auto-advance timer lives in the screen layer
/// and merely calls [`Carousel::next`] on each tick.
#[derive(Debug, Clone, Default)]
pub struct Carousel {
    /// Active banners only, in their supplied order.
    active: Vec<Banner>,

    /// Index of the currently displayed slide. Always in `[0, active.len())`
    /// when the set is non-empty, 0 otherwise.
    current_index: usize,

    /// Direction of the most recent transition.
    direction: SlideDirection,
}

impl Carousel {
    /// Creates a carousel from a banner list.
    ///
    /// Inactive banners are dropped from the rotation set up front.
    pub fn new(banners: Vec<Banner>) -> Self {
        Carousel {
            active: banners.into_iter().filter(|b| b.active).collect(),
            current_index: 0,
            direction: SlideDirection::None,
        }
    }

    /// Replaces the banner list, recomputing the rotation set.
    ///
    /// The current index is clamped into the new valid range so a shrinking
    /// list can never leave a stale out-of-range selection. An empty set
    /// resets the index to 0.
    pub fn set_banners(&mut self, banners: Vec<Banner>) {
        self.active = banners.into_iter().filter(|b| b.active).collect();
        if self.active.is_empty() {
            self.current_index = 0;
        } else if self.current_index >= self.active.len() {
            self.current_index = self.active.len() - 1;
        }
        self.direction = SlideDirection::None;
    }

    /// Advances to the next slide, wrapping at the end.
    ///
    /// Identity when fewer than two banners are active.
    pub fn next(&mut self) {
        if self.active.len() <= 1 {
            return;
        }
        self.direction = SlideDirection::Forward;
        self.current_index = (self.current_index + 1) % self.active.len();
    }

    /// Moves to the previous slide, wrapping from 0 to the last slide.
    ///
    /// Identity when fewer than two banners are active.
    pub fn previous(&mut self) {
        if self.active.len() <= 1 {
            return;
        }
        self.direction = SlideDirection::Backward;
        self.current_index = (self.current_index + self.active.len() - 1) % self.active.len();
    }

    /// Jumps directly to a slide (dot selection).
    ///
    /// Out-of-range targets clamp to the last slide. Direction is Forward
    /// when the (clamped) target is after the current slide, Backward when
    /// before, and None when it is the current slide.
    pub fn go_to(&mut self, index: usize) {
        if self.active.is_empty() {
            return;
        }
        let target = index.min(self.active.len() - 1);
        self.direction = match target.cmp(&self.current_index) {
            std::cmp::Ordering::Greater => SlideDirection::Forward,
            std::cmp::Ordering::Less => SlideDirection::Backward,
            std::cmp::Ordering::Equal => SlideDirection::None,
        };
        self.current_index = target;
    }

    /// The currently displayed banner, or `None` when nothing is active
    /// (the host renders nothing in that case).
    pub fn current(&self) -> Option<&Banner> {
        self.active.get(self.current_index)
    }

    /// Index of the currently displayed slide.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Direction of the most recent transition.
    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    /// The active rotation set, in order.
    pub fn active_banners(&self) -> &[Banner] {
        &self.active
    }

    /// Number of active banners.
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// True when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// True when auto-advance makes sense: rotation needs at least two
    /// slides, so the host skips timer scheduling entirely below that.
    pub fn should_rotate(&self) -> bool {
        self.active.len() > 1
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

    #[test]
    fn test_next_wraps_modulo_count() {
        let mut carousel = Carousel::new(banners(3));
        carousel.next();
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.direction(), SlideDirection::Forward);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last_from_zero() {
        let mut carousel = Carousel::new(banners(4));
        carousel.previous();
        assert_eq!(carousel.current_index(), 3);
        assert_eq!(carousel.direction(), SlideDirection::Backward);
    }

    #[test]
    fn test_n_nexts_return_to_start() {
        // For all n >= 2: n calls to next() are a full cycle.
        for n in 2..=6 {
            let mut carousel = Carousel::new(banners(n));
            carousel.go_to(1);
            let start = carousel.current_index();
            for _ in 0..n {
                carousel.next();
            }
            assert_eq!(carousel.current_index(), start, "cycle broken for n={n}");
        }
    }

    #[test]
    fn test_previous_then_next_is_identity() {
        for n in 2..=6 {
            let mut carousel = Carousel::new(banners(n));
            let start = carousel.current_index();
            carousel.previous();
            carousel.next();
            assert_eq!(carousel.current_index(), start);
        }
    }

    #[test]
    fn test_single_banner_is_static() {
        let mut carousel = Carousel::new(banners(1));
        assert!(!carousel.should_rotate());
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.direction(), SlideDirection::None);
    }

    #[test]
    fn test_empty_set_renders_nothing() {
        let mut carousel = Carousel::new(Vec::new());
        assert!(carousel.is_empty());
        assert!(carousel.current().is_none());
        assert!(!carousel.should_rotate());
        carousel.next();
        carousel.go_to(2);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_inactive_banners_excluded_from_rotation() {
        let mut all = banners(3);
        all[1].active = false;
        let carousel = Carousel::new(all);
        assert_eq!(carousel.active_len(), 2);
        assert_eq!(carousel.active_banners()[1].id, "2");
    }

    #[test]
    fn test_go_to_sets_direction_by_comparison() {
        let mut carousel = Carousel::new(banners(4));
        carousel.go_to(2);
        assert_eq!(carousel.direction(), SlideDirection::Forward);
        carousel.go_to(1);
        assert_eq!(carousel.direction(), SlideDirection::Backward);
        carousel.go_to(1);
        assert_eq!(carousel.direction(), SlideDirection::None);
    }

    #[test]
    fn test_go_to_clamps_out_of_range() {
        let mut carousel = Carousel::new(banners(3));
        carousel.go_to(99);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_shrinking_list_clamps_index() {
        let mut carousel = Carousel::new(banners(5));
        carousel.go_to(4);
        carousel.set_banners(banners(2));
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.current().is_some());
    }

    #[test]
    fn test_list_emptying_resets_index() {
        let mut carousel = Carousel::new(banners(3));
        carousel.go_to(2);
        carousel.set_banners(Vec::new());
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.current().is_none());
    }
}
