// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Counter
//!
//! _A click counter for the browser._
//!
//! The widget replaces the document body with a heading, a counter display
//! and three buttons: increment, decrement and reset. Every click updates the
//! displayed number, sets the page title to `Clicked <N>` and paints the
//! background in one of two colors depending on whether `N` is even or odd.
//!
//! ### Layout
//!
//! * [`state`]: the [`Counter`] value and its [`Action`]s.
//! * [`render`]: turning a value into a [`Frame`](render::Frame), and the
//!   [`Surface`](render::Surface) trait frames are rendered to.
//! * [`controller`]: [`Controller`] applying actions and rendering results.
//! * [`bootstrap`](bootstrap()): building the markup in a [`Host`](host::Host)
//!   and binding the buttons.
//! * [`dom`] and [`headless`]: the browser document, and an in-memory one
//!   for tests.
//!
//! ### Example
//!
//! ```
//! use cmpm_counter::headless::Page;
//! use cmpm_counter::{bootstrap, Config};
//!
//! let mut page = Page::new();
//! let app = bootstrap(&mut page, Config::default()).unwrap();
//!
//! page.click("dec");
//!
//! assert_eq!(app.value(), -1);
//! assert_eq!(page.title(), "Clicked -1");
//! ```
//!
//! In the browser, call [`start`] from a `wasm32-unknown-unknown` binary and
//! serve it with [`trunk`](https://trunkrs.dev/):
//! ```sh
//! cd crates/counter
//! trunk serve
//! ```

#[cfg(all(
    target_arch = "wasm32",
    feature = "rlsf",
    not(target_feature = "atomics")
))]
#[global_allocator]
static A: rlsf::SmallGlobalTlsf = rlsf::SmallGlobalTlsf::new();

pub mod controller;
pub mod dom;
pub mod headless;
pub mod host;
pub mod log;
pub mod markup;
pub mod render;
pub mod runtime;
pub mod state;

mod bootstrap;
mod config;
mod report;

pub use bootstrap::bootstrap;
pub use config::Config;
pub use controller::{App, Controller};
pub use report::{LookupError, Role};
pub use runtime::start;
pub use state::{Action, Counter};
