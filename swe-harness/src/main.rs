// Copyright (c) The swe-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! An evaluation-harness generator for pull-request benchmarks.
//!
//! Generates container build specs and three-stage run scripts for a pull
//! request, and parses raw test-runner logs into structured results.

mod dispatch;
mod errors;
mod output;

use clap::Parser;
use color_eyre::Result;
use dispatch::SweHarnessApp;

fn main() -> Result<()> {
    color_eyre::install()?;

    let app = SweHarnessApp::parse();
    match app.exec() {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            error.display_to_stderr();
            std::process::exit(error.process_exit_code())
        }
    }
}
