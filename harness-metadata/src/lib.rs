// Copyright (c) The swe-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Structured access to swe-harness machine-readable output.
//!
//! The evaluation pipeline runs a project's test suite inside a container
//! and captures the raw console log. This crate defines the structured
//! result types that the log parser in `harness-core` produces and that
//! downstream consumers (report writers, result comparators) read back,
//! along with the exit codes the `swe-harness` CLI uses.

mod exit_codes;
mod test_result;

pub use exit_codes::*;
pub use test_result::*;
