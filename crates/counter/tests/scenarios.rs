// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use cmpm_counter::headless::Page;
use cmpm_counter::render::{Frame, Parity};
use cmpm_counter::{bootstrap, Action, App, Config, Controller, Role};
use proptest::prelude::*;

fn ready() -> Page {
    let mut page = Page::new();

    bootstrap(&mut page, Config::default()).unwrap();

    page
}

fn assert_shows(page: &Page, n: i64, color: &str) {
    assert_eq!(page.text("counter"), Some(n.to_string()));
    assert_eq!(page.title(), format!("Clicked {n}"));
    assert_eq!(page.background().as_deref(), Some(color));
}

#[test]
fn initial_load() {
    let page = ready();

    assert_shows(&page, 0, "lightblue");
    assert_eq!(
        page.body().unwrap().to_string(),
        "<h1>CMPM 121 Project</h1>\n\
         <p>Counter: <span id=\"counter\">0</span></p>\n\
         <button id=\"increment\">Click Me!</button>\n\
         <button id=\"dec\">Decrement</button>\n\
         <button id=\"reset\">Reset</button>"
    );
}

#[test]
fn increment_once() {
    let mut page = ready();

    assert_eq!(page.click("increment"), 1);

    assert_shows(&page, 1, "pink");
}

#[test]
fn increment_three_times() {
    let mut page = ready();

    for _ in 0..3 {
        page.click("increment");
    }

    assert_shows(&page, 3, "pink");
}

#[test]
fn decrement_from_zero() {
    let mut page = ready();

    page.click("dec");

    assert_shows(&page, -1, "pink");
}

#[test]
fn reset_after_clicks() {
    let mut page = ready();

    page.click("increment");
    page.click("increment");
    page.click("dec");
    page.click("dec");
    page.click("dec");
    page.click("reset");

    assert_shows(&page, 0, "lightblue");

    page.click("reset");

    assert_shows(&page, 0, "lightblue");
}

#[test]
fn missing_button_leaves_page_inert() {
    let mut page = Page::new().without("dec");

    let err = bootstrap(&mut page, Config::default()).unwrap_err();

    assert!(err.is_missing(Role::Button(Action::Decrement)));
    assert_eq!(err.missing().len(), 1);

    // Structure is there, nothing is bound or rendered.
    assert!(page.body().is_some());
    for id in ["increment", "dec", "reset"] {
        assert_eq!(page.listeners(id), 0);
        assert_eq!(page.click(id), 0);
    }
    assert_eq!(page.text("counter").as_deref(), Some("0"));
    assert_eq!(page.title(), "");
    assert_eq!(page.background(), None);
    assert_eq!(page.renders(), 0);
}

#[test]
fn external_dispatch_matches_clicks() {
    let mut page = Page::new();
    let app: App<_> = bootstrap(&mut page, Config::default()).unwrap();

    for action in Action::ALL {
        app.dispatch(action);
    }
    app.dispatch(Action::Decrement);

    assert_eq!(app.value(), -1);
    assert_shows(&page, -1, "pink");
}

fn step() -> impl Strategy<Value = Action> {
    prop_oneof![Just(Action::Increment), Just(Action::Decrement)]
}

proptest! {
    #[test]
    fn display_is_sum_of_steps(steps in prop::collection::vec(step(), 0..64)) {
        let mut page = ready();
        let mut expected = 0_i64;

        for action in &steps {
            match action {
                Action::Increment => {
                    page.click("increment");
                    expected += 1;
                }
                _ => {
                    page.click("dec");
                    expected -= 1;
                }
            }
        }

        prop_assert_eq!(page.text("counter"), Some(expected.to_string()));
        prop_assert_eq!(page.title(), format!("Clicked {expected}"));

        page.click("reset");

        let shown = page.text("counter");

        prop_assert_eq!(shown.as_deref(), Some("0"));
    }

    #[test]
    fn every_render_is_current(actions in prop::collection::vec(
        prop_oneof![Just(Action::Increment), Just(Action::Decrement), Just(Action::Reset)],
        1..32,
    )) {
        let config = Config::default();
        let mut controller = Controller::new(config.clone(), Vec::<Frame>::new());

        let count = actions.len();

        for action in actions {
            let value = controller.dispatch(action);
            let frame = controller.surface().last().unwrap();

            prop_assert_eq!(frame.value, value);
            prop_assert_eq!(&frame.text, &value.to_string());
            prop_assert_eq!(&frame.background, Parity::of(value).color(&config));
        }

        prop_assert_eq!(controller.surface().len(), count);
    }
}
