// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The counter state and the transitions that can be applied to it.

/// A named transition of the [`Counter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Add one to the counter.
    Increment,
    /// Subtract one from the counter.
    Decrement,
    /// Return the counter to its default value.
    Reset,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Increment, Action::Decrement, Action::Reset];
}

/// Holds the counter value. There are no bounds, arithmetic wraps around
/// at the edges of `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    value: i64,
    default: i64,
}

impl Counter {
    pub const fn new(default: i64) -> Self {
        Counter {
            value: default,
            default,
        }
    }

    pub const fn value(&self) -> i64 {
        self.value
    }

    pub fn increment(&mut self) -> i64 {
        self.value = self.value.wrapping_add(1);
        self.value
    }

    pub fn decrement(&mut self) -> i64 {
        self.value = self.value.wrapping_sub(1);
        self.value
    }

    pub fn reset(&mut self) -> i64 {
        self.value = self.default;
        self.value
    }

    /// Apply a transition, returning the new value.
    pub fn apply(&mut self, action: Action) -> i64 {
        match action {
            Action::Increment => self.increment(),
            Action::Decrement => self.decrement(),
            Action::Reset => self.reset(),
        }
    }
}

impl Default for Counter {
    fn default() -> Self {
        Counter::new(0)
    }
}
