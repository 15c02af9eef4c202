use std::fmt;

use crate::aspect::Aspect;
use crate::invalidator::Invalidator;

/// A component attribute that requests invalidation when its value changes.
///
/// The aspect list is fixed when the attribute is declared; only the value
/// changes over the attribute's lifetime.
pub struct Observed<T> {
    value: T,
    aspects: &'static [Aspect],
    owner: Invalidator,
}

impl<T: PartialEq> Observed<T> {
    pub fn new(value: T, aspects: &'static [Aspect], owner: &Invalidator) -> Self {
        Self {
            value,
            aspects,
            owner: owner.clone(),
        }
    }

    /// Stores `value` if it differs from the current one and requests every
    /// declared aspect, in declaration order. Returns whether the value
    /// changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        for &aspect in self.aspects {
            self.owner.request_invalidation(aspect);
        }
        true
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn aspects(&self) -> &'static [Aspect] {
        self.aspects
    }
}

impl<T: PartialEq + Copy> Observed<T> {
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: PartialEq> Observed<Option<T>> {
    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }

    pub fn as_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T: fmt::Debug> fmt::Debug for Observed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observed")
            .field("value", &self.value)
            .field("aspects", &self.aspects)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/attribute_tests.rs"]
mod tests;
