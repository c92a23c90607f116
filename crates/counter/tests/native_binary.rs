// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![cfg(not(target_arch = "wasm32"))]

use std::process::Command;

#[test]
fn native_run_explains_and_fails() {
    let out = Command::new(env!("CARGO_BIN_EXE_cmpm-counter"))
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&out.stderr);

    assert!(!out.status.success());
    assert!(stderr.starts_with("error: "), "{stderr}");
    assert!(stderr.contains("wasm32-unknown-unknown"), "{stderr}");
}
