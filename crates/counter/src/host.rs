// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The rendering surface the widget is mounted into.

use crate::markup::Markup;
use crate::render::Surface;

/// A document the widget can be built in: the live browser DOM
/// ([`Dom`](crate::dom::Dom)) or an in-memory
/// [`Page`](crate::headless::Page).
pub trait Host {
    /// Handle to an element found with [`lookup`](Host::lookup).
    type Element: Clone;

    /// Render sink writing to a display element of this host.
    type Surface: Surface;

    /// Replace the entire body content with `markup`.
    fn mount(&mut self, markup: &Markup);

    /// Find an element by its identifier.
    fn lookup(&self, id: &str) -> Option<Self::Element>;

    /// Call `handler` on every click of `element`, for as long as the page lives.
    fn on_click<F>(&mut self, element: &Self::Element, handler: F)
    where
        F: FnMut() + 'static;

    /// Create a render sink that writes the counter text to `display`,
    /// and the title and background to the document.
    fn surface(&self, display: Self::Element) -> Self::Surface;
}
