// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::process::ExitCode;

#[cfg(target_arch = "wasm32")]
fn main() -> ExitCode {
    if cfg!(debug_assertions) {
        cmpm_counter::log::enable_verbose_output();
    }

    cmpm_counter::start(cmpm_counter::Config::default());

    ExitCode::SUCCESS
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    cmpm_counter::error!("the counter runs in a browser, build it for wasm32-unknown-unknown");

    ExitCode::FAILURE
}
