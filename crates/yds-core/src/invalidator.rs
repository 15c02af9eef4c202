use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::aspect::{Aspect, InvalidationFlags, InvalidationState};
use crate::platform::{DetachedScheduler, RenderScheduler};
use crate::ComponentId;

static NEXT_COMPONENT_ID: AtomicUsize = AtomicUsize::new(1);

pub(crate) fn next_component_id() -> ComponentId {
    NEXT_COMPONENT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Counters describing how much work a component has requested and run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Every invalidation request, including ones coalesced into a pending pass.
    pub requests: u64,
    /// Requests that were forwarded to the scheduler.
    pub scheduled: u64,
    pub layouts: u64,
    pub displays: u64,
}

impl PassStats {
    pub fn passes(&self, aspect: Aspect) -> u64 {
        match aspect {
            Aspect::Layout => self.layouts,
            Aspect::Display => self.displays,
        }
    }

    fn record_pass(&mut self, aspect: Aspect) {
        match aspect {
            Aspect::Layout => self.layouts += 1,
            Aspect::Display => self.displays += 1,
        }
    }
}

struct InvalidatorInner {
    id: ComponentId,
    flags: Cell<InvalidationFlags>,
    stats: Cell<PassStats>,
    scheduler: Rc<dyn RenderScheduler>,
}

/// Owner-side handle through which attributes request deferred passes.
///
/// A component holds one `Invalidator`; each of its [`crate::Observed`]
/// attributes holds a clone. All clones share the same flags, so a write to
/// any attribute is visible to the component's pass methods.
#[derive(Clone)]
pub struct Invalidator {
    inner: Rc<InvalidatorInner>,
}

impl Invalidator {
    pub fn new(scheduler: Rc<dyn RenderScheduler>) -> Self {
        Self::with_id(next_component_id(), scheduler)
    }

    pub(crate) fn with_id(id: ComponentId, scheduler: Rc<dyn RenderScheduler>) -> Self {
        Self {
            inner: Rc::new(InvalidatorInner {
                id,
                flags: Cell::new(InvalidationFlags::default()),
                stats: Cell::new(PassStats::default()),
                scheduler,
            }),
        }
    }

    /// Invalidator whose requests only flip flags; passes are driven by hand.
    pub fn detached() -> Self {
        Self::new(Rc::new(DetachedScheduler))
    }

    pub fn id(&self) -> ComponentId {
        self.inner.id
    }

    /// Marks `aspect` pending and, on a clean-to-pending transition, asks
    /// the scheduler for a pass. Never runs the pass itself.
    pub fn request_invalidation(&self, aspect: Aspect) {
        let mut flags = self.inner.flags.get();
        let newly = flags.mark(aspect);
        self.inner.flags.set(flags);

        let mut stats = self.inner.stats.get();
        stats.requests += 1;
        if newly {
            stats.scheduled += 1;
        }
        self.inner.stats.set(stats);

        if !newly {
            return;
        }
        log::trace!("component {}: {aspect} invalidated", self.inner.id);
        match aspect {
            Aspect::Layout => self.inner.scheduler.schedule_layout(self.inner.id),
            Aspect::Display => self.inner.scheduler.schedule_display(self.inner.id),
        }
    }

    pub fn flags(&self) -> InvalidationFlags {
        self.inner.flags.get()
    }

    pub fn state(&self) -> InvalidationState {
        self.inner.flags.get().state()
    }

    pub fn is_pending(&self, aspect: Aspect) -> bool {
        self.inner.flags.get().is_pending(aspect)
    }

    pub fn stats(&self) -> PassStats {
        self.inner.stats.get()
    }

    /// Clears `aspect` ahead of running its pass. Returns `false` when
    /// nothing was pending. Writes made while the pass runs re-arm the flag
    /// and schedule a follow-up pass.
    pub(crate) fn begin_pass(&self, aspect: Aspect) -> bool {
        let mut flags = self.inner.flags.get();
        if !flags.take(aspect) {
            return false;
        }
        self.inner.flags.set(flags);
        self.record_pass(aspect);
        true
    }

    pub(crate) fn begin_forced_pass(&self, aspect: Aspect) {
        let mut flags = self.inner.flags.get();
        flags.take(aspect);
        self.inner.flags.set(flags);
        self.record_pass(aspect);
    }

    fn record_pass(&self, aspect: Aspect) {
        let mut stats = self.inner.stats.get();
        stats.record_pass(aspect);
        self.inner.stats.set(stats);
    }
}

impl fmt::Debug for Invalidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invalidator")
            .field("id", &self.inner.id)
            .field("flags", &self.inner.flags.get())
            .field("stats", &self.inner.stats.get())
            .finish()
    }
}
