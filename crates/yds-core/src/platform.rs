//! Platform abstraction traits for the invalidation core.
//!
//! These traits let components hand deferred work to whatever drives the
//! host's render loop, without depending on a specific toolkit or on `std`
//! timing APIs.

use crate::ComponentId;

/// Accepts "mark dirty" requests on behalf of the render/layout engine.
///
/// Implementations must guarantee that if at least one request was made
/// since the last pass, the matching pass callback happens before the next
/// frame is presented, and that several requests before that callback
/// collapse into one.
pub trait RenderScheduler {
    /// Request a layout pass for `component`.
    fn schedule_layout(&self, component: ComponentId);

    /// Request a display (repaint) pass for `component`.
    fn schedule_display(&self, component: ComponentId);
}

/// Host hook used by [`crate::Runtime`] to ask for a render tick.
///
/// Implementations must be safe to call from the UI thread at any time,
/// including from inside a running frame.
pub trait FrameRequester: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for time-bound widget behaviour.
pub trait Clock: Send + Sync {
    /// Instant type produced by this clock implementation.
    type Instant: Copy + Send + Sync;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: Self::Instant) -> u64;
}

/// Scheduler that drops every request. Used by detached components whose
/// owner drives passes by hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedScheduler;

impl RenderScheduler for DetachedScheduler {
    fn schedule_layout(&self, _component: ComponentId) {}

    fn schedule_display(&self, _component: ComponentId) {}
}
