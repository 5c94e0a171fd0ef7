// Copyright (c) The swe-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Core functionality for [swe-harness](https://crates.io/crates/swe-harness).
//!
//! swe-harness turns a source-code project plus a pull request into an
//! evaluation harness: a container build specification, a fixed set of
//! shell scripts that run the project's test suite at three points
//! (baseline, with the test patch, with the test and fix patches), and a
//! parser that recovers structured pass/fail/skip results from the raw
//! console log of each run.
//!
//! The [`parse`] module is the heart of the crate; the [`pipeline`] module
//! renders the surrounding build specification and scripts from a single
//! configuration struct. Container execution itself is out of scope and
//! belongs to the orchestration layer driving this library.

pub mod errors;
pub mod parse;
pub mod pipeline;
