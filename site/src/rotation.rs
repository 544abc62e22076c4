//! Carousel rotation: which dataset is active, and the timer that advances it.
//!
//! [`Rotation`] is the plain state machine. [`AutoRotate`] owns a running
//! interval and cancels it when dropped, so a torn-down carousel can never
//! be ticked again. The timer itself comes from a [`Scheduler`]: the DOM
//! interval in the browser, a manual clock in tests.

use std::num::NonZeroUsize;
use std::time::Duration;

/// Interval between automatic advances.
pub const ROTATE_EVERY: Duration = Duration::from_millis(5000);

/// Active index over a fixed, non-empty list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    active: usize,
    len: NonZeroUsize,
}

impl Rotation {
    /// Rotation over `len` items, starting at index 0.
    pub fn new(len: NonZeroUsize) -> Self {
        Self { active: 0, len }
    }

    /// Rotation over a slice; `None` when the slice is empty.
    pub fn over<T>(items: &[T]) -> Option<Self> {
        NonZeroUsize::new(items.len()).map(Self::new)
    }

    /// Currently active index, always `< len()`.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Number of items rotated over.
    pub fn len(&self) -> usize {
        self.len.get()
    }

    /// Advance to the next item, wrapping after the last.
    pub fn tick(&mut self) {
        self.active = (self.active + 1) % self.len.get();
    }

    /// Jump to `index`. Selector controls only offer valid indices; anything
    /// else is reduced modulo `len()`.
    pub fn select(&mut self, index: usize) {
        self.active = index % self.len.get();
    }
}

/// Handle to a running periodic task.
pub trait CancelHandle {
    /// Stop the task. It must not fire afterwards.
    fn cancel(self);
}

/// Source of periodic callbacks.
pub trait Scheduler {
    /// Handle returned for each scheduled task
    type Handle: CancelHandle;

    /// Run `task` every `period` until the handle is cancelled. `None` when
    /// the environment cannot provide a timer.
    fn every(&self, period: Duration, task: impl Fn() + 'static) -> Option<Self::Handle>;
}

/// Running auto-advance timer; cancels on drop.
#[derive(Debug)]
#[must_use = "dropping the guard stops the rotation"]
pub struct AutoRotate<H: CancelHandle> {
    handle: Option<H>,
}

impl<H: CancelHandle> AutoRotate<H> {
    /// Schedule `tick` every [`ROTATE_EVERY`].
    pub fn start<S>(scheduler: &S, tick: impl Fn() + 'static) -> Self
    where
        S: Scheduler<Handle = H>,
    {
        Self::start_every(scheduler, ROTATE_EVERY, tick)
    }

    /// Schedule `tick` with a custom period.
    pub fn start_every<S>(scheduler: &S, period: Duration, tick: impl Fn() + 'static) -> Self
    where
        S: Scheduler<Handle = H>,
    {
        let handle = scheduler.every(period, tick);
        if handle.is_none() {
            tracing::warn!("carousel timer unavailable, auto-rotation disabled");
        }
        Self { handle }
    }

    /// True while the timer is scheduled.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Cancel now. Same as dropping the guard.
    pub fn stop(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

impl<H: CancelHandle> Drop for AutoRotate<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// DOM interval timer (`window.setInterval`).
///
/// Only call [`Scheduler::every`] from code that runs in the browser, such
/// as an effect; effects never run during static rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserInterval;

impl CancelHandle for leptos::prelude::IntervalHandle {
    fn cancel(self) {
        self.clear();
    }
}

impl Scheduler for BrowserInterval {
    type Handle = leptos::prelude::IntervalHandle;

    fn every(&self, period: Duration, task: impl Fn() + 'static) -> Option<Self::Handle> {
        leptos::prelude::set_interval_with_handle(task, period).ok()
    }
}


#[cfg(test)]
mod tests {
    use super::manual::{ManualClock, ManualHandle};
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct NoTimers;

    impl Scheduler for NoTimers {
        type Handle = ManualHandle;

        fn every(&self, _: Duration, _: impl Fn() + 'static) -> Option<ManualHandle> {
            None
        }
    }

    fn rotation(len: usize) -> Rotation {
        Rotation::new(NonZeroUsize::new(len).unwrap())
    }

    fn shared(len: usize) -> (Rc<Cell<Rotation>>, impl Fn() + 'static) {
        let state = Rc::new(Cell::new(rotation(len)));
        let tick = {
            let state = state.clone();
            move || {
                let mut r = state.get();
                r.tick();
                state.set(r);
            }
        };
        (state, tick)
    }

    #[test]
    fn tick_cycles_modulo_len() {
        for len in 1..=5 {
            let mut r = rotation(len);
            for count in 1..=3 * len {
                r.tick();
                assert_eq!(r.active(), count % len);
            }
        }
    }

    #[test]
    fn select_overrides_then_tick_continues_from_selection() {
        let mut r = rotation(4);
        r.tick();
        r.select(3);
        assert_eq!(r.active(), 3);
        r.tick();
        assert_eq!(r.active(), 0);
        r.select(2);
        r.tick();
        assert_eq!(r.active(), 3);
    }

    #[test]
    fn out_of_range_select_wraps() {
        let mut r = rotation(4);
        r.select(6);
        assert_eq!(r.active(), 2);
        r.select(4);
        assert_eq!(r.active(), 0);
        r.tick();
        assert_eq!(r.active(), 1);
    }

    #[test]
    fn over_rejects_empty_list() {
        assert!(Rotation::over::<u8>(&[]).is_none());
        assert_eq!(Rotation::over(&[1, 2, 3]).map(|r| r.len()), Some(3));
    }

    #[test]
    fn auto_rotate_ticks_every_five_seconds() {
        let clock = ManualClock::default();
        let (state, tick) = shared(4);
        let guard = AutoRotate::start(&clock, tick);
        assert!(guard.is_running());

        clock.advance(Duration::from_millis(4999));
        assert_eq!(state.get().active(), 0);
        clock.advance(Duration::from_millis(1));
        assert_eq!(state.get().active(), 1);
        clock.advance(ROTATE_EVERY * 3);
        assert_eq!(state.get().active(), 0);

        drop(guard);
    }

    #[test]
    fn dropping_guard_cancels_timer() {
        let clock = ManualClock::default();
        let (state, tick) = shared(4);
        let guard = AutoRotate::start(&clock, tick);
        drop(guard);

        clock.advance(ROTATE_EVERY);
        clock.advance(ROTATE_EVERY * 10);
        assert_eq!(state.get().active(), 0);
    }

    #[test]
    fn stop_cancels_mid_cycle() {
        let clock = ManualClock::default();
        let (state, tick) = shared(3);
        let guard = AutoRotate::start(&clock, tick);

        clock.advance(ROTATE_EVERY);
        assert_eq!(state.get().active(), 1);
        guard.stop();
        clock.advance(ROTATE_EVERY * 2);
        assert_eq!(state.get().active(), 1);
    }

    #[test]
    fn manual_select_between_ticks() {
        let clock = ManualClock::default();
        let (state, tick) = shared(4);
        let _guard = AutoRotate::start(&clock, tick);

        clock.advance(Duration::from_millis(2500));
        let mut r = state.get();
        r.select(2);
        state.set(r);
        clock.advance(Duration::from_millis(2500));
        assert_eq!(state.get().active(), 3);
    }

    #[test]
    fn missing_timer_is_not_running() {
        let guard = AutoRotate::start(&NoTimers, || {});
        assert!(!guard.is_running());
    }
}
