// Copyright (c) The swe-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::pipeline::{HarnessConfig, PullRequest};
use swrite::{SWrite, swriteln};

/// The three fixed points at which the project's test suite is run.
///
/// Comparing the three results tells the evaluator whether the fix patch
/// actually makes the new tests pass without breaking existing ones.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RunStage {
    /// The unpatched checkout.
    Baseline,

    /// With the test patch applied.
    TestPatch,

    /// With the test and fix patches applied.
    FixPatch,
}

impl RunStage {
    /// All stages in execution order.
    pub const ALL: [RunStage; 3] = [RunStage::Baseline, RunStage::TestPatch, RunStage::FixPatch];

    /// The script file name for this stage.
    pub fn script_name(self) -> &'static str {
        match self {
            RunStage::Baseline => "run.sh",
            RunStage::TestPatch => "test-run.sh",
            RunStage::FixPatch => "fix-run.sh",
        }
    }

    /// The patch files applied before running, in application order.
    fn patches(self) -> &'static [&'static str] {
        match self {
            RunStage::Baseline => &[],
            RunStage::TestPatch => &["/home/test.patch"],
            RunStage::FixPatch => &["/home/test.patch", "/home/fix.patch"],
        }
    }

    /// Renders the shell script for this stage.
    pub fn render(self, config: &HarnessConfig, pr: &PullRequest) -> String {
        let mut script = String::new();
        swriteln!(script, "#!/bin/bash");
        swriteln!(script, "cd {}", pr.workdir());
        let patches = self.patches();
        if !patches.is_empty() {
            // Patch application failure is reported through a non-zero
            // exit, distinct from test failures in the log.
            swriteln!(
                script,
                "if ! git -C {} apply --whitespace=nowarn {}; then",
                pr.workdir(),
                patches.join(" ")
            );
            swriteln!(script, "    echo \"Error: git apply failed\" >&2");
            swriteln!(script, "    exit 1");
            swriteln!(script, "fi");
        }
        swriteln!(script, "{}", config.test_command_line());
        script
    }
}
