// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error;
use std::fmt;

use crate::state::Action;

/// The part an element plays in the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The element showing the counter value.
    Display,
    /// A button bound to an [`Action`].
    Button(Action),
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Display => f.write_str("counter display"),
            Role::Button(Action::Increment) => f.write_str("increment button"),
            Role::Button(Action::Decrement) => f.write_str("decrement button"),
            Role::Button(Action::Reset) => f.write_str("reset button"),
        }
    }
}

/// One or more required elements could not be found after the body was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupError {
    missing: Vec<(Role, String)>,
}

impl LookupError {
    pub(crate) fn new(missing: Vec<(Role, String)>) -> Self {
        debug_assert!(!missing.is_empty());

        LookupError { missing }
    }

    /// Every element that was not found, in lookup order.
    pub fn missing(&self) -> &[(Role, String)] {
        &self.missing
    }

    pub fn is_missing(&self, role: Role) -> bool {
        self.missing.iter().any(|(r, _)| *r == role)
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("failed to find one or more required DOM elements")?;

        for (n, (role, id)) in self.missing.iter().enumerate() {
            let sep = if n == 0 { ": " } else { ", " };

            write!(f, "{sep}{role} (#{id})")?;
        }

        Ok(())
    }
}

impl error::Error for LookupError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = LookupError::new(vec![
            (Role::Button(Action::Decrement), "dec".into()),
            (Role::Display, "counter".into()),
        ]);

        assert_eq!(
            err.to_string(),
            "failed to find one or more required DOM elements: \
             decrement button (#dec), counter display (#counter)"
        );
        assert!(err.is_missing(Role::Display));
        assert!(!err.is_missing(Role::Button(Action::Reset)));
    }
}
