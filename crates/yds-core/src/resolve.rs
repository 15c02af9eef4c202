//! Precedence-based style resolution.
//!
//! Widget families describe their state ladders as ordered [`RuleTable`]s:
//! each rule pairs a predicate over an attribute snapshot with the style
//! tuple that applies when it matches. Rules are tried in order and the first
//! match wins; the table's fallback covers the default tier, so resolution
//! is total.

use std::fmt;

/// One rung of a precedence ladder.
pub struct Rule<S, V> {
    pub when: fn(&S) -> bool,
    pub then: V,
}

/// Ordered list of rules with a default branch.
pub struct RuleTable<S: 'static, V: 'static> {
    rules: &'static [Rule<S, V>],
    fallback: V,
}

impl<S: 'static, V: 'static> RuleTable<S, V> {
    pub const fn new(rules: &'static [Rule<S, V>], fallback: V) -> Self {
        Self { rules, fallback }
    }

    /// Returns the style tuple of the first matching rule, or the fallback.
    pub fn resolve(&self, snapshot: &S) -> &V {
        self.rules
            .iter()
            .find(|rule| (rule.when)(snapshot))
            .map(|rule| &rule.then)
            .unwrap_or(&self.fallback)
    }

    /// Index of the matching rule; `None` means the fallback applied.
    pub fn matching_rule(&self, snapshot: &S) -> Option<usize> {
        self.rules.iter().position(|rule| (rule.when)(snapshot))
    }

    pub fn len(&self) -> usize {
        self.rules.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<S: 'static, V: fmt::Debug + 'static> fmt::Debug for RuleTable<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleTable")
            .field("rules", &self.rules.len())
            .field("fallback", &self.fallback)
            .finish()
    }
}

/// Transient interaction signal supplied by the platform on press/release.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Interaction {
    pub pressed: bool,
}

impl Interaction {
    pub const IDLE: Interaction = Interaction { pressed: false };
    pub const PRESSED: Interaction = Interaction { pressed: true };
}

/// A value with a distinct variant for the pressed state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pressable<T> {
    pub normal: T,
    pub pressed: T,
}

impl<T: Copy> Pressable<T> {
    pub const fn new(normal: T, pressed: T) -> Self {
        Self { normal, pressed }
    }

    /// Same value whether pressed or not.
    pub const fn fixed(value: T) -> Self {
        Self {
            normal: value,
            pressed: value,
        }
    }

    pub fn pick(&self, interaction: Interaction) -> T {
        if interaction.pressed {
            self.pressed
        } else {
            self.normal
        }
    }

    pub fn map<U: Copy>(&self, mut f: impl FnMut(T) -> U) -> Pressable<U> {
        Pressable {
            normal: f(self.normal),
            pressed: f(self.pressed),
        }
    }
}

#[cfg(test)]
#[path = "tests/resolve_tests.rs"]
mod tests;
