//! Standard runtime services backed by Rust's `std` library.
//!
//! This crate provides concrete implementations of the platform traits
//! defined in `yds-core`. A host event loop constructs a [`StdRuntime`],
//! mounts widgets through [`StdRuntime::runtime`], and calls
//! [`StdRuntime::run_frame`] whenever [`StdRuntime::take_frame_request`]
//! reports pending work (or from the registered frame waker).

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use yds_core::{Clock, FrameReport, FrameRequester, Runtime, RuntimeHandle};

type FrameWaker = Arc<dyn Fn() + Send + Sync + 'static>;

/// Frame requester that raises a flag and pokes an optional waker.
pub struct StdScheduler {
    frame_requested: AtomicBool,
    frame_waker: RwLock<Option<FrameWaker>>,
}

impl StdScheduler {
    pub fn new() -> Self {
        Self {
            frame_requested: AtomicBool::new(false),
            frame_waker: RwLock::new(None),
        }
    }

    /// Returns whether a frame has been requested since the last call.
    pub fn take_frame_request(&self) -> bool {
        self.frame_requested.swap(false, Ordering::SeqCst)
    }

    /// Registers a waker that will be invoked whenever a new frame is scheduled.
    pub fn set_frame_waker(&self, waker: impl Fn() + Send + Sync + 'static) {
        *self
            .frame_waker
            .write()
            .unwrap_or_else(|poisoned| recover("set_frame_waker", poisoned)) =
            Some(Arc::new(waker));
    }

    /// Clears any registered frame waker.
    pub fn clear_frame_waker(&self) {
        *self
            .frame_waker
            .write()
            .unwrap_or_else(|poisoned| recover("clear_frame_waker", poisoned)) = None;
    }

    fn wake(&self) {
        let waker = self
            .frame_waker
            .read()
            .unwrap_or_else(|poisoned| recover("wake", poisoned))
            .clone();
        if let Some(waker) = waker {
            waker();
        }
    }
}

/// A waker that panicked poisons the lock; the stored value is still valid.
fn recover<G>(operation: &str, poisoned: PoisonError<G>) -> G {
    log::error!("frame waker lock poisoned during {operation}; recovering");
    poisoned.into_inner()
}

impl Default for StdScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StdScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdScheduler")
            .field(
                "frame_requested",
                &self.frame_requested.load(Ordering::SeqCst),
            )
            .finish()
    }
}

impl FrameRequester for StdScheduler {
    fn schedule_frame(&self) {
        self.frame_requested.store(true, Ordering::SeqCst);
        self.wake();
    }
}

/// Clock implementation backed by [`std::time`].
#[derive(Debug, Default, Clone)]
pub struct StdClock;

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn elapsed_millis(&self, since: Self::Instant) -> u64 {
        since.elapsed().as_millis() as u64
    }
}

impl StdClock {
    /// Returns the elapsed time as a [`Duration`] for convenience.
    pub fn elapsed(&self, since: Instant) -> Duration {
        since.elapsed()
    }
}

/// Convenience container bundling the standard scheduler, clock and runtime.
#[derive(Clone)]
pub struct StdRuntime {
    scheduler: Arc<StdScheduler>,
    clock: Arc<StdClock>,
    started: Instant,
    runtime: Runtime,
}

impl StdRuntime {
    pub fn new() -> Self {
        let scheduler = Arc::new(StdScheduler::default());
        let runtime = Runtime::new(scheduler.clone());
        let clock = Arc::new(StdClock);
        Self {
            started: clock.now(),
            scheduler,
            clock,
            runtime,
        }
    }

    /// Returns the [`yds_core::Runtime`] wired to the standard scheduler.
    pub fn runtime(&self) -> Runtime {
        self.runtime.clone()
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn scheduler(&self) -> Arc<StdScheduler> {
        Arc::clone(&self.scheduler)
    }

    pub fn clock(&self) -> Arc<StdClock> {
        Arc::clone(&self.clock)
    }

    /// Milliseconds since this runtime was created. Timestamps for
    /// time-bound widgets such as tooltips.
    pub fn uptime_millis(&self) -> u64 {
        self.clock.elapsed_millis(self.started)
    }

    /// Returns whether a frame was requested since the last poll.
    pub fn take_frame_request(&self) -> bool {
        self.scheduler.take_frame_request()
    }

    /// Registers a waker to be called when the runtime schedules a new frame.
    pub fn set_frame_waker(&self, waker: impl Fn() + Send + Sync + 'static) {
        self.scheduler.set_frame_waker(waker);
    }

    pub fn clear_frame_waker(&self) {
        self.scheduler.clear_frame_waker();
    }

    /// Runs the pending layout and display passes.
    pub fn run_frame(&self) -> FrameReport {
        self.runtime.run_frame()
    }
}

impl fmt::Debug for StdRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdRuntime")
            .field("scheduler", &self.scheduler)
            .field("clock", &self.clock)
            .field("runtime", &self.runtime)
            .finish()
    }
}

impl Default for StdRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use yds_core::Component;
    use yds_ui::{BoxButton, Theme, Tooltip, TooltipPhase};

    use super::StdRuntime;

    #[test]
    fn std_runtime_requests_frame_and_runs_passes_on_attribute_change() {
        let runtime = StdRuntime::new();
        let wakes = Arc::new(AtomicUsize::new(0));
        {
            let wakes = wakes.clone();
            runtime.set_frame_waker(move || {
                wakes.fetch_add(1, Ordering::SeqCst);
            });
        }

        let theme = Rc::new(Theme::standard());
        let button = runtime
            .runtime()
            .mount(|invalidator| BoxButton::new(invalidator, theme));
        assert!(!runtime.take_frame_request());

        button.borrow_mut().set_text(Some("Confirm"));
        button.borrow_mut().set_warned(true);
        assert!(
            runtime.take_frame_request(),
            "attribute write should request a frame"
        );
        assert_eq!(wakes.load(Ordering::SeqCst), 1);

        let report = runtime.run_frame();
        assert_eq!((report.layouts, report.displays), (1, 1));
        assert!(button.borrow().invalidation_state().is_clean());
        assert_eq!(button.borrow().title().text.as_deref(), Some("Confirm"));
        assert!(!runtime.take_frame_request());
    }

    #[test]
    fn poisoned_waker_lock_is_recovered() {
        let runtime = StdRuntime::new();
        let scheduler = runtime.scheduler();
        let poisoner = scheduler.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.frame_waker.write().unwrap();
            panic!("poison the waker lock");
        })
        .join();

        let wakes = Arc::new(AtomicUsize::new(0));
        {
            let wakes = wakes.clone();
            scheduler.set_frame_waker(move || {
                wakes.fetch_add(1, Ordering::SeqCst);
            });
        }
        yds_core::FrameRequester::schedule_frame(&*scheduler);
        assert_eq!(wakes.load(Ordering::SeqCst), 1);
        assert!(scheduler.take_frame_request());
    }

    #[test]
    fn uptime_drives_tooltip_expiry() {
        let runtime = StdRuntime::new();
        let tooltip = runtime
            .runtime()
            .mount(|invalidator| Tooltip::new(invalidator, Rc::new(Theme::standard())));

        let shown_at = runtime.uptime_millis();
        assert!(tooltip.borrow_mut().show(shown_at));
        assert!(matches!(
            tooltip.borrow_mut().advance(shown_at + 10_000),
            TooltipPhase::Dismissed
        ));
        runtime.run_frame();
        assert_eq!(tooltip.borrow().layer().alpha, 0.0);
    }
}
