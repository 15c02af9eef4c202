use crate::aspect::{Aspect, InvalidationState};
use crate::invalidator::Invalidator;

/// A widget that owns attributes and runs deferred layout and display passes.
///
/// Implementors provide the two pass procedures; the `*_if_needed` entry
/// points guard them with the invalidation flags so that any number of
/// writes between passes collapse into one run per aspect.
pub trait Component {
    fn invalidator(&self) -> &Invalidator;

    /// Applies size and position constraints derived from current attributes.
    fn layout(&mut self);

    /// Resolves the visual style from current attributes and applies it.
    fn display(&mut self);

    /// Runs the layout procedure if a layout pass is pending.
    fn perform_layout_if_needed(&mut self) -> bool {
        if !self.invalidator().begin_pass(Aspect::Layout) {
            return false;
        }
        self.layout();
        true
    }

    /// Runs the display procedure if a display pass is pending.
    fn perform_display_if_needed(&mut self) -> bool {
        if !self.invalidator().begin_pass(Aspect::Display) {
            return false;
        }
        self.display();
        true
    }

    /// Unconditional layout and display, used once at construction so that
    /// default attribute values reach the render primitives.
    fn force_pass(&mut self) {
        self.force_layout();
        self.invalidator().begin_forced_pass(Aspect::Display);
        self.display();
    }

    /// Runs the layout procedure now, pending or not, and clears the layout
    /// flag. Used by size queries that must observe up-to-date geometry.
    fn force_layout(&mut self) {
        self.invalidator().begin_forced_pass(Aspect::Layout);
        self.layout();
    }

    /// Runs whichever passes are pending, layout first.
    fn settle(&mut self) {
        self.perform_layout_if_needed();
        self.perform_display_if_needed();
    }

    fn invalidation_state(&self) -> InvalidationState {
        self.invalidator().state()
    }
}

#[cfg(test)]
#[path = "tests/component_tests.rs"]
mod tests;
