//! Invalidation aspects and the per-component dirty flags they drive.

use std::fmt;

/// A category of deferred work an attribute write can request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Aspect {
    Layout,
    Display,
}

impl Aspect {
    pub const ALL: [Aspect; 2] = [Aspect::Layout, Aspect::Display];
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aspect::Layout => f.write_str("layout"),
            Aspect::Display => f.write_str("display"),
        }
    }
}

/// Aspect tag lists used when declaring attributes.
///
/// The order of a list is the order in which invalidation requests are
/// issued for a single accepted write.
pub mod aspects {
    use super::Aspect;

    pub const LAYOUT: &[Aspect] = &[Aspect::Layout];
    pub const DISPLAY: &[Aspect] = &[Aspect::Display];
    pub const LAYOUT_AND_DISPLAY: &[Aspect] = &[Aspect::Layout, Aspect::Display];
}

/// Pending-pass flags owned by a single component.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InvalidationFlags {
    pub needs_layout: bool,
    pub needs_display: bool,
}

impl InvalidationFlags {
    /// Marks `aspect` pending. Returns `true` only on a clean-to-pending
    /// transition, so repeated marks between passes coalesce.
    pub fn mark(&mut self, aspect: Aspect) -> bool {
        let slot = self.slot(aspect);
        let newly = !*slot;
        *slot = true;
        newly
    }

    /// Clears `aspect` and returns whether it was pending.
    pub fn take(&mut self, aspect: Aspect) -> bool {
        std::mem::replace(self.slot(aspect), false)
    }

    pub fn is_pending(&self, aspect: Aspect) -> bool {
        match aspect {
            Aspect::Layout => self.needs_layout,
            Aspect::Display => self.needs_display,
        }
    }

    pub fn state(&self) -> InvalidationState {
        match (self.needs_layout, self.needs_display) {
            (false, false) => InvalidationState::Clean,
            (true, false) => InvalidationState::LayoutPending,
            (false, true) => InvalidationState::DisplayPending,
            (true, true) => InvalidationState::LayoutAndDisplayPending,
        }
    }

    fn slot(&mut self, aspect: Aspect) -> &mut bool {
        match aspect {
            Aspect::Layout => &mut self.needs_layout,
            Aspect::Display => &mut self.needs_display,
        }
    }
}

/// Observable state of a component's invalidation machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidationState {
    Clean,
    LayoutPending,
    DisplayPending,
    LayoutAndDisplayPending,
}

impl InvalidationState {
    pub fn is_clean(self) -> bool {
        self == InvalidationState::Clean
    }
}
