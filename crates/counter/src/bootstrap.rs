// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building the widget inside a [`Host`].

use crate::controller::{App, Controller};
use crate::host::Host;
use crate::markup::Markup;
use crate::report::{LookupError, Role};
use crate::state::Action;
use crate::Config;

/// Elements resolved during the binding phase.
struct Resolved<E> {
    display: E,
    buttons: [(Action, E); 3],
}

fn resolve<H: Host>(host: &H, config: &Config) -> Result<Resolved<H::Element>, LookupError> {
    let mut missing = Vec::new();

    let mut find = |role: Role, id: &str| {
        let found = host.lookup(id);

        if found.is_none() {
            missing.push((role, id.to_owned()));
        }
        found
    };

    let increment = find(Role::Button(Action::Increment), &*config.increment_id);
    let decrement = find(Role::Button(Action::Decrement), &*config.decrement_id);
    let reset = find(Role::Button(Action::Reset), &*config.reset_id);
    let display = find(Role::Display, &*config.counter_id);

    match (increment, decrement, reset, display) {
        (Some(increment), Some(decrement), Some(reset), Some(display)) => Ok(Resolved {
            display,
            buttons: [
                (Action::Increment, increment),
                (Action::Decrement, decrement),
                (Action::Reset, reset),
            ],
        }),
        _ => Err(LookupError::new(missing)),
    }
}

/// Build the widget in `host`.
///
/// The body is always replaced with the widget markup. If any of the counter
/// display or the three buttons cannot be found afterwards, no listener is
/// attached, nothing is rendered, and the error is returned. Otherwise every
/// button is bound to its action and the initial state is rendered once.
pub fn bootstrap<H>(host: &mut H, config: Config) -> Result<App<H::Surface>, LookupError>
where
    H: Host,
    H::Surface: 'static,
{
    host.mount(&Markup::counter(&config));

    let Resolved { display, buttons } = resolve(host, &config)?;

    let app = App::new(Controller::new(config, host.surface(display)));

    for (action, button) in buttons {
        let app = app.clone();

        host.on_click(&button, move || {
            app.dispatch(action);
        });
    }

    app.render();

    Ok(app)
}
