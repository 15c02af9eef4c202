use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use yds_core::{
    Aspect, Component, ComponentId, FrameReport, FrameRequester, Invalidator, RenderScheduler,
    Runtime,
};

/// Render scheduler that records every request it receives.
#[derive(Debug, Default)]
pub struct RecordingScheduler {
    calls: RefCell<Vec<(ComponentId, Aspect)>>,
}

impl RecordingScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Invalidator wired to this scheduler.
    pub fn invalidator(self: &Rc<Self>) -> Invalidator {
        Invalidator::new(self.clone())
    }

    pub fn calls(&self) -> Vec<(ComponentId, Aspect)> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, aspect: Aspect) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|(_, requested)| *requested == aspect)
            .count()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl RenderScheduler for RecordingScheduler {
    fn schedule_layout(&self, component: ComponentId) {
        self.calls.borrow_mut().push((component, Aspect::Layout));
    }

    fn schedule_display(&self, component: ComponentId) {
        self.calls.borrow_mut().push((component, Aspect::Display));
    }
}

/// Frame requester that only counts how often a frame was asked for.
#[derive(Debug, Default)]
pub struct CountingFrameRequester {
    requests: AtomicUsize,
}

impl CountingFrameRequester {
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl FrameRequester for CountingFrameRequester {
    fn schedule_frame(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

/// Runtime plus a counting requester, driven frame by frame from tests.
pub struct TestHost {
    runtime: Runtime,
    requester: Arc<CountingFrameRequester>,
}

impl TestHost {
    /// Upper bound on frames run by [`TestHost::pump`] before giving up.
    pub const MAX_FRAMES: usize = 16;

    pub fn new() -> Self {
        let requester = Arc::new(CountingFrameRequester::default());
        Self {
            runtime: Runtime::new(requester.clone()),
            requester,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn mount<C, F>(&self, build: F) -> Rc<RefCell<C>>
    where
        C: Component + 'static,
        F: FnOnce(Invalidator) -> C,
    {
        self.runtime.mount(build)
    }

    pub fn frame_requests(&self) -> usize {
        self.requester.requests()
    }

    pub fn needs_frame(&self) -> bool {
        self.runtime.needs_frame()
    }

    pub fn frame(&self) -> FrameReport {
        self.runtime.run_frame()
    }

    /// Runs frames while the runtime asks for them. Returns the merged
    /// report and the number of frames run.
    pub fn pump(&self) -> (FrameReport, usize) {
        let mut total = FrameReport::default();
        let mut frames = 0;
        while self.runtime.needs_frame() && frames < Self::MAX_FRAMES {
            let report = self.runtime.run_frame();
            total.layouts += report.layouts;
            total.displays += report.displays;
            total.stale += report.stale;
            total.deferred += report.deferred;
            frames += 1;
        }
        (total, frames)
    }
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}
