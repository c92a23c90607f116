// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Diagnostics. On `wasm32` these go to the browser console, anywhere else
//! they are printed to standard error.

#[cfg(test)]
use std::cell::RefCell;
use std::fmt;
use std::sync::OnceLock;

static VERBOSE_OUTPUT: OnceLock<()> = OnceLock::new();

/// Enable [`info!`] messages, which are dropped by default.
pub fn enable_verbose_output() {
    let _ = VERBOSE_OUTPUT.set(());
}

pub fn is_verbose_output_enabled() -> bool {
    VERBOSE_OUTPUT.get().is_some()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Info,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => f.write_str("error"),
            Level::Info => f.write_str("info"),
        }
    }
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        $crate::log::emit($crate::log::Level::Error, format_args!($($arg)*));
    }};
}

pub use error;

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        if $crate::log::is_verbose_output_enabled() {
            $crate::log::emit($crate::log::Level::Info, format_args!($($arg)*));
        }
    }};
}

pub use info;

#[doc(hidden)]
pub fn emit(level: Level, args: fmt::Arguments) {
    let line = format!("{level}: {args}");

    #[cfg(test)]
    CAPTURED.with_borrow_mut(|lines| lines.push((level, line.clone())));

    #[cfg(target_arch = "wasm32")]
    {
        let line = wasm_bindgen::JsValue::from_str(&line);

        match level {
            Level::Error => web_sys::console::error_1(&line),
            Level::Info => web_sys::console::log_1(&line),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{line}");
}

#[cfg(test)]
thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Drain every line emitted on this thread so far.
#[cfg(test)]
pub(crate) fn take_captured() -> Vec<(Level, String)> {
    CAPTURED.take()
}
