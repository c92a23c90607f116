// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cell::{Cell, RefCell};

use crate::bootstrap::bootstrap;
use crate::controller::App;
use crate::dom::{Dom, DomSurface};
use crate::host::Host;
use crate::Config;

/// Lifecycle of the widget on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not started, or started and failed to bind. A failed page stays here.
    Unbootstrapped,
    /// Buttons are bound and the initial state has been rendered.
    Ready,
}

thread_local! {
    static INIT: Cell<bool> = const { Cell::new(false) };

    static PHASE: Cell<Phase> = const { Cell::new(Phase::Unbootstrapped) };

    static APP: RefCell<Option<App<DomSurface>>> = const { RefCell::new(None) };
}

/// Current [`Phase`] of the widget launched on this thread.
pub fn phase() -> Phase {
    PHASE.get()
}

/// Start the widget in the document `body`. Only the first call on a page
/// does anything.
pub fn start(config: Config) {
    if INIT.get() {
        crate::error!("the counter has already been started on this page");
        return;
    }
    INIT.set(true);

    init_panic_hook();

    let Some(mut dom) = Dom::new() else {
        crate::error!("no document available to start the counter in");
        return;
    };

    if let Some(app) = launch(&mut dom, config) {
        APP.set(Some(app));
    }
}

/// Bootstrap the widget in `host`, moving to [`Phase::Ready`] on success.
///
/// If any element is missing the failure is logged once and the page is left
/// structured but inert, in [`Phase::Unbootstrapped`].
pub fn launch<H>(host: &mut H, config: Config) -> Option<App<H::Surface>>
where
    H: Host,
    H::Surface: 'static,
{
    match bootstrap(host, config) {
        Ok(app) => {
            PHASE.set(Phase::Ready);
            crate::info!("counter ready at {}", app.value());
            Some(app)
        }
        Err(err) => {
            crate::error!("{err}");
            None
        }
    }
}

fn init_panic_hook() {
    // Only enable console hook on debug builds
    #[cfg(debug_assertions)]
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}
