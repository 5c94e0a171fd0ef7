// Copyright (c) The swe-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Harness generation: container build specs and three-stage run scripts.
//!
//! Everything here is pure string rendering driven by a [`HarnessConfig`]
//! and a [`PullRequest`]; writing files and building/running containers
//! belongs to the caller.

mod config;
mod image;
mod pull_request;
mod scripts;

pub use config::*;
pub use image::*;
pub use pull_request::*;
pub use scripts::*;

/// Renders the complete harness for one pull request: the Dockerfile plus
/// the patch and script files to place next to it.
pub fn generate_harness(config: &HarnessConfig, pr: &PullRequest) -> Vec<HarnessFile> {
    let spec = ImageSpec::new(config, pr);
    let mut files = vec![HarnessFile {
        name: "Dockerfile",
        contents: spec.dockerfile(),
    }];
    files.extend(spec.files());
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::LogGrammar;

    pub(super) fn sample_config() -> HarnessConfig {
        HarnessConfig {
            base_image: "python:3.10-slim".to_owned(),
            install_commands: vec![
                "apt-get update && apt-get install -y libpq-dev".to_owned(),
                "python -m pip install -r requirements/test.txt".to_owned(),
            ],
            test_command: vec![
                "python".to_owned(),
                "-m".to_owned(),
                "pytest".to_owned(),
                "-rA".to_owned(),
                "--tb=no".to_owned(),
                "-p".to_owned(),
                "no:cacheprovider".to_owned(),
                "src/tests/".to_owned(),
            ],
            log_grammar: LogGrammar::Dense,
            test_file_suffixes: vec![".py".to_owned()],
        }
    }

    pub(super) fn sample_pr() -> PullRequest {
        PullRequest {
            org: "dssg".to_owned(),
            repo: "triage".to_owned(),
            number: 912,
            base: BaseCommit {
                sha: "0123abcd".to_owned(),
            },
            fix_patch: "--- a/src/lib.py\n+++ b/src/lib.py\n".to_owned(),
            test_patch: "--- a/src/tests/test_lib.py\n+++ b/src/tests/test_lib.py\n".to_owned(),
        }
    }

    #[test]
    fn generates_all_harness_files() {
        let files = generate_harness(&sample_config(), &sample_pr());
        let names: Vec<_> = files.iter().map(|file| file.name).collect();
        assert_eq!(
            names,
            [
                "Dockerfile",
                "fix.patch",
                "test.patch",
                "run.sh",
                "test-run.sh",
                "fix-run.sh",
            ]
        );
    }
}
