use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use crate::aspect::Aspect;
use crate::collections::map::{HashMap, HashSet};
use crate::component::Component;
use crate::invalidator::Invalidator;
use crate::platform::{FrameRequester, RenderScheduler};
use crate::ComponentId;

type ComponentRef = Weak<RefCell<dyn Component>>;

/// Registry size that triggers a prune on mount, doubled after each prune.
const MIN_PRUNE_THRESHOLD: usize = 64;

#[derive(Default)]
struct PassQueue {
    pending: HashSet<ComponentId>,
    order: Vec<ComponentId>,
}

impl PassQueue {
    fn push(&mut self, id: ComponentId) -> bool {
        if self.pending.insert(id) {
            self.order.push(id);
            true
        } else {
            false
        }
    }

    fn take(&mut self) -> Vec<ComponentId> {
        self.pending.clear();
        std::mem::take(&mut self.order)
    }

    fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

struct RuntimeInner {
    requester: Arc<dyn FrameRequester>,
    needs_frame: Cell<bool>,
    in_frame: Cell<bool>,
    frames: Cell<u64>,
    components: RefCell<HashMap<ComponentId, ComponentRef>>,
    prune_threshold: Cell<usize>,
    layout_queue: RefCell<PassQueue>,
    display_queue: RefCell<PassQueue>,
}

impl RuntimeInner {
    fn new(requester: Arc<dyn FrameRequester>) -> Self {
        Self {
            requester,
            needs_frame: Cell::new(false),
            in_frame: Cell::new(false),
            frames: Cell::new(0),
            components: RefCell::new(HashMap::default()),
            prune_threshold: Cell::new(MIN_PRUNE_THRESHOLD),
            layout_queue: RefCell::new(PassQueue::default()),
            display_queue: RefCell::new(PassQueue::default()),
        }
    }

    fn queue(&self, aspect: Aspect) -> &RefCell<PassQueue> {
        match aspect {
            Aspect::Layout => &self.layout_queue,
            Aspect::Display => &self.display_queue,
        }
    }

    fn schedule(&self, id: ComponentId, aspect: Aspect) {
        let queued = self.queue(aspect).borrow_mut().push(id);
        if queued && !self.in_frame.get() {
            self.request_frame();
        }
    }

    fn request_frame(&self) {
        if !self.needs_frame.replace(true) {
            self.requester.schedule_frame();
        }
    }

    fn has_pending_passes(&self) -> bool {
        !self.layout_queue.borrow().is_empty() || !self.display_queue.borrow().is_empty()
    }

    /// Drops registry entries whose component is gone. Returns how many.
    fn prune(&self) -> usize {
        let mut components = self.components.borrow_mut();
        let before = components.len();
        components.retain(|_, component| component.strong_count() > 0);
        before - components.len()
    }

    fn register(&self, id: ComponentId, component: ComponentRef) {
        if self.components.borrow().len() >= self.prune_threshold.get() {
            self.prune();
            let live = self.components.borrow().len();
            let threshold = live.saturating_mul(2).max(MIN_PRUNE_THRESHOLD);
            self.prune_threshold.set(threshold);
        }
        self.components.borrow_mut().insert(id, component);
    }

    fn lookup(&self, id: ComponentId) -> Option<Rc<RefCell<dyn Component>>> {
        let upgraded = self.components.borrow().get(&id).and_then(Weak::upgrade);
        if upgraded.is_none() {
            self.components.borrow_mut().remove(&id);
        }
        upgraded
    }

    fn run_pass(&self, id: ComponentId, aspect: Aspect, report: &mut FrameReport) {
        let Some(component) = self.lookup(id) else {
            report.stale += 1;
            return;
        };
        let ran = match component.try_borrow_mut() {
            Ok(mut component) => match aspect {
                Aspect::Layout => component.perform_layout_if_needed(),
                Aspect::Display => component.perform_display_if_needed(),
            },
            Err(_) => {
                log::warn!("component {id} busy during {aspect} pass; deferring to next frame");
                self.queue(aspect).borrow_mut().push(id);
                report.deferred += 1;
                return;
            }
        };
        if ran {
            match aspect {
                Aspect::Layout => report.layouts += 1,
                Aspect::Display => report.displays += 1,
            }
        }
    }
}

/// Summary of the work done by one [`Runtime::run_frame`] call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub layouts: usize,
    pub displays: usize,
    /// Requests for components that were dropped before the frame.
    pub stale: usize,
    /// Passes pushed to the next frame because the component was borrowed.
    pub deferred: usize,
}

impl FrameReport {
    pub fn is_idle(&self) -> bool {
        self.layouts == 0 && self.displays == 0
    }
}

/// Coalescing render scheduler for a set of mounted components.
///
/// Layout and display requests are queued per component; the host is asked
/// for a frame once per idle-to-dirty transition and drives the passes with
/// [`Runtime::run_frame`].
#[derive(Clone)]
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new(requester: Arc<dyn FrameRequester>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new(requester)),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle(Rc::downgrade(&self.inner))
    }

    /// Builds a component wired to this runtime and registers it for passes.
    ///
    /// The runtime keeps only a weak reference; dropping the returned value
    /// unmounts the component.
    pub fn mount<C, F>(&self, build: F) -> Rc<RefCell<C>>
    where
        C: Component + 'static,
        F: FnOnce(Invalidator) -> C,
    {
        let invalidator = Invalidator::new(Rc::new(self.handle()));
        let component = Rc::new(RefCell::new(build(invalidator)));
        let id = component.borrow().invalidator().id();
        let erased: Rc<RefCell<dyn Component>> = component.clone();
        self.inner.register(id, Rc::downgrade(&erased));
        component
    }

    /// Runs every pending layout pass, then every pending display pass.
    ///
    /// Display requests raised by a layout pass are served in the same
    /// frame. Requests raised during the display phase wait for the next
    /// frame, which is requested before this call returns.
    pub fn run_frame(&self) -> FrameReport {
        let inner = &self.inner;
        inner.in_frame.set(true);
        inner.needs_frame.set(false);

        let mut report = FrameReport::default();
        for aspect in Aspect::ALL {
            let ids = inner.queue(aspect).borrow_mut().take();
            for id in ids {
                inner.run_pass(id, aspect, &mut report);
            }
        }

        inner.in_frame.set(false);
        if inner.has_pending_passes() {
            inner.request_frame();
        }
        let pruned = inner.prune();

        let frame = inner.frames.get() + 1;
        inner.frames.set(frame);
        log::debug!(
            "frame {frame}: {} layout, {} display, {} stale, {} deferred, {pruned} pruned",
            report.layouts,
            report.displays,
            report.stale,
            report.deferred
        );
        report
    }

    pub fn needs_frame(&self) -> bool {
        self.inner.needs_frame.get()
    }

    pub fn has_pending_passes(&self) -> bool {
        self.inner.has_pending_passes()
    }

    pub fn frames_run(&self) -> u64 {
        self.inner.frames.get()
    }

    /// Number of mounted components that are still alive.
    pub fn live_components(&self) -> usize {
        self.inner.prune();
        self.inner.components.borrow().len()
    }
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("needs_frame", &self.inner.needs_frame.get())
            .field("frames", &self.inner.frames.get())
            .finish()
    }
}

/// Weak handle used by invalidators. Requests made after the runtime is
/// dropped are ignored.
#[derive(Clone)]
pub struct RuntimeHandle(Weak<RuntimeInner>);

impl RuntimeHandle {
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }

    pub fn needs_frame(&self) -> bool {
        self.0
            .upgrade()
            .map(|inner| inner.needs_frame.get())
            .unwrap_or(false)
    }
}

impl RenderScheduler for RuntimeHandle {
    fn schedule_layout(&self, component: ComponentId) {
        if let Some(inner) = self.0.upgrade() {
            inner.schedule(component, Aspect::Layout);
        }
    }

    fn schedule_display(&self, component: ComponentId) {
        if let Some(inner) = self.0.upgrade() {
            inner.schedule(component, Aspect::Display);
        }
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
