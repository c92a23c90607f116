// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Owner of the counter state and its render sink.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::render::{Frame, Surface};
use crate::state::{Action, Counter};
use crate::Config;

/// Applies transitions to a [`Counter`] and renders each result to a [`Surface`].
///
/// ```
/// use cmpm_counter::render::Frame;
/// use cmpm_counter::{Action, Config, Controller};
///
/// let mut controller = Controller::new(Config::default(), Vec::<Frame>::new());
///
/// assert_eq!(controller.dispatch(Action::Increment), 1);
/// assert_eq!(controller.surface().last().unwrap().title, "Clicked 1");
/// ```
pub struct Controller<S> {
    counter: Counter,
    config: Config,
    surface: S,
}

impl<S> Controller<S>
where
    S: Surface,
{
    /// Create a controller at the configured default value. Nothing is
    /// rendered until the first transition or [`render`](Controller::render).
    pub fn new(config: Config, surface: S) -> Self {
        Controller {
            counter: Counter::new(config.default_count),
            config,
            surface,
        }
    }

    pub fn value(&self) -> i64 {
        self.counter.value()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Push the current value through the surface.
    pub fn render(&mut self) {
        let frame = Frame::compose(self.counter.value(), &self.config);

        self.surface.render(&frame);
    }

    /// Apply a named transition and render, returning the new value.
    pub fn dispatch(&mut self, action: Action) -> i64 {
        let value = self.counter.apply(action);

        self.render();

        value
    }

    pub fn increment(&mut self) -> i64 {
        self.dispatch(Action::Increment)
    }

    pub fn decrement(&mut self) -> i64 {
        self.dispatch(Action::Decrement)
    }

    pub fn reset(&mut self) -> i64 {
        self.dispatch(Action::Reset)
    }
}

/// Shared handle to a [`Controller`], cloned into every event listener.
pub struct App<S> {
    inner: Rc<RefCell<Controller<S>>>,
}

impl<S> Clone for App<S> {
    fn clone(&self) -> Self {
        App {
            inner: self.inner.clone(),
        }
    }
}

impl<S> fmt::Debug for App<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("App");

        match self.inner.try_borrow() {
            Ok(controller) => dbg.field("counter", &controller.counter),
            Err(_) => dbg.field("counter", &format_args!("<borrowed>")),
        };

        dbg.finish_non_exhaustive()
    }
}

impl<S> App<S>
where
    S: Surface,
{
    pub fn new(controller: Controller<S>) -> Self {
        App {
            inner: Rc::new(RefCell::new(controller)),
        }
    }

    /// Dispatch an action from an event listener.
    ///
    /// Returns `None` without touching the state if another dispatch is
    /// still running on this app.
    pub fn dispatch(&self, action: Action) -> Option<i64> {
        match self.inner.try_borrow_mut() {
            Ok(mut controller) => Some(controller.dispatch(action)),
            Err(_) => {
                crate::error!("cyclical update detected, dropping {action:?}");
                None
            }
        }
    }

    /// Render the current value, skipped with a diagnostic if the controller
    /// is already borrowed.
    pub fn render(&self) {
        match self.inner.try_borrow_mut() {
            Ok(mut controller) => controller.render(),
            Err(_) => crate::error!("cyclical update detected, skipping render"),
        }
    }

    /// # Panics
    ///
    /// Panics if called while a dispatch or render on this app is running.
    pub fn value(&self) -> i64 {
        self.inner.borrow().value()
    }

    /// Run `f` with a shared borrow of the controller.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Controller<S>) -> R,
    {
        f(&self.inner.borrow())
    }
}
