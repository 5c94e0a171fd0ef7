// Copyright (c) The swe-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Documented exit codes for `swe-harness` failures.
///
/// Unknown/unexpected failures will always result in exit code 1.
///
/// Note that log parsing itself never fails: malformed logs produce an
/// empty or partial [`TestResult`](crate::TestResult), not an error exit.
pub enum HarnessExitCode {}

impl HarnessExitCode {
    /// No errors occurred and swe-harness exited normally.
    pub const OK: i32 = 0;

    /// A user issue happened while setting up a swe-harness invocation,
    /// such as an unreadable or invalid configuration file.
    pub const SETUP_ERROR: i32 = 96;

    /// Creating a harness (Dockerfile, patches, run scripts) produced an
    /// error.
    pub const HARNESS_GENERATION_FAILED: i32 = 103;

    /// Writing data to stdout or stderr produced an error.
    pub const WRITE_OUTPUT_ERROR: i32 = 110;
}
